//! Final grade as a percentage of the max score

use thiserror::Error;

/// Error type for grade calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("cannot grade a score of {score} against a max score of 0")]
    DegenerateMaxScore { score: u32 },
}

/// Percentage of the max score achieved, rounded to the nearest integer
///
/// Halves round to the even neighbour, and the division is done in integer
/// arithmetic so `.5` boundaries are exact. A zero score always grades 0. The
/// result is not capped at 100 because the reference max score can undercount.
///
/// # Errors
/// Returns `GradeError::DegenerateMaxScore` for a positive score with a max
/// score of 0.
///
/// # Examples
/// ```
/// use spelling_bee::core::grade;
///
/// assert_eq!(grade(50, 100), Ok(50));
/// assert_eq!(grade(1, 8), Ok(12)); // 12.5 rounds to even
/// assert_eq!(grade(0, 0), Ok(0));
/// assert!(grade(3, 0).is_err());
/// ```
pub const fn grade(score: u32, max_score: u32) -> Result<u32, GradeError> {
    if score == 0 {
        return Ok(0);
    }
    if max_score == 0 {
        return Err(GradeError::DegenerateMaxScore { score });
    }

    let scaled = score as u64 * 100;
    let max = max_score as u64;
    let quotient = scaled / max;
    let twice_remainder = (scaled % max) * 2;

    let rounded = if twice_remainder > max || (twice_remainder == max && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    Ok(rounded as u32)
}

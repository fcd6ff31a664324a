//! Formatting utilities for terminal output

use crate::core::{GradeError, LetterSet};

/// Format the puzzle letters the way the player sees them
///
/// Center letter first, vowel last, separated by spaces.
#[must_use]
pub fn hive_line(letters: &LetterSet) -> String {
    letters
        .display_order()
        .iter()
        .map(|&b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a grade as a percentage, or `n/a` when the max score was 0
#[must_use]
pub fn format_grade(grade: &Result<u32, GradeError>) -> String {
    match grade {
        Ok(percent) => format!("{percent}%"),
        Err(_) => "n/a".to_string(),
    }
}

/// Rank title for a grade
#[must_use]
pub const fn rank_title(percent: u32) -> &'static str {
    match percent {
        0 => "Beginner",
        1..=7 => "Good Start",
        8..=14 => "Moving Up",
        15..=24 => "Good",
        25..=39 => "Solid",
        40..=49 => "Nice",
        50..=69 => "Great",
        70..=99 => "Amazing",
        _ => "Genius",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hive_line_center_first() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        assert_eq!(hive_line(&letters), "w r d x y z o");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow_and_zero_max() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn grade_formatting() {
        assert_eq!(format_grade(&Ok(42)), "42%");
        assert_eq!(
            format_grade(&Err(GradeError::DegenerateMaxScore { score: 3 })),
            "n/a"
        );
    }

    #[test]
    fn rank_titles() {
        assert_eq!(rank_title(0), "Beginner");
        assert_eq!(rank_title(50), "Great");
        assert_eq!(rank_title(100), "Genius");
        assert_eq!(rank_title(130), "Genius");
    }
}

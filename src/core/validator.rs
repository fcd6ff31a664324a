//! Submission validation
//!
//! Rules are checked in a fixed order and the first failing rule is reported.

use super::{LetterSet, WordBank};
use thiserror::Error;
use tracing::debug;

/// Shortest word the game accepts
pub const MIN_LENGTH: usize = 4;

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Sorry, words must be {min} or more letters. Try again.", min = MIN_LENGTH)]
    TooShort,
    #[error("Sorry, words must contain the center letter. Try again.")]
    MissingCenterLetter,
    #[error("Sorry, words must only use the letters available. Try again.")]
    LetterOutOfRange,
    #[error("Sorry, word already entered. Try again.")]
    DuplicateSubmission,
    #[error("Sorry, entry not a word. Try again.")]
    NotInDictionary,
}

/// Check a submission against the puzzle rules
///
/// `prior` holds the words already accepted this game; the duplicate check is
/// an exact, case-sensitive comparison.
///
/// # Errors
/// Returns the first `Rejection` that applies, in this order: too short,
/// missing center letter, letter out of range, duplicate, not in dictionary.
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, Rejection, WordBank, validate};
///
/// let letters = LetterSet::new("owrdxyz").unwrap();
/// let bank = WordBank::from_words(["word", "wordy"]);
/// let accepted = vec!["word".to_string()];
///
/// assert_eq!(validate("wordy", &letters, &accepted, &bank), Ok(()));
/// assert_eq!(validate("word", &letters, &accepted, &bank), Err(Rejection::DuplicateSubmission));
/// assert_eq!(validate("dory", &letters, &accepted, &bank), Err(Rejection::MissingCenterLetter));
/// ```
pub fn validate<S: AsRef<str>>(
    word: &str,
    letters: &LetterSet,
    prior: &[S],
    bank: &WordBank,
) -> Result<(), Rejection> {
    let verdict = check(word, letters, prior, bank);
    debug!(word, ?verdict, "validated submission");
    verdict
}

fn check<S: AsRef<str>>(
    word: &str,
    letters: &LetterSet,
    prior: &[S],
    bank: &WordBank,
) -> Result<(), Rejection> {
    if word.chars().count() < MIN_LENGTH {
        return Err(Rejection::TooShort);
    }

    if !word.bytes().any(|b| b == letters.center()) {
        return Err(Rejection::MissingCenterLetter);
    }

    if !word.chars().all(|c| letters.contains_char(c)) {
        return Err(Rejection::LetterOutOfRange);
    }

    if prior.iter().any(|p| p.as_ref() == word) {
        return Err(Rejection::DuplicateSubmission);
    }

    if !bank.contains(word) {
        return Err(Rejection::NotInDictionary);
    }

    Ok(())
}

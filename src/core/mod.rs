//! Core game logic for Spelling Bee
//!
//! Puzzle generation, validation, scoring and grading. Everything here is pure
//! apart from the injected random number generator; play loops live elsewhere.

mod bank;
mod grade;
mod letters;
mod scorer;
mod session;
mod validator;

pub use bank::WordBank;
pub use grade::{GradeError, grade};
pub use letters::{LETTER_COUNT, LetterSet, LetterSetError, VOWELS};
pub use scorer::{
    MaxScoreRule, PANGRAM_BONUS, is_pangram, max_score, qualifies, qualifying_words, score,
};
pub use session::{GameReport, GameSession};
pub use validator::{MIN_LENGTH, Rejection, validate};

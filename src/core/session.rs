//! A single game in progress
//!
//! The session owns the accepted words and running score for one puzzle. Play
//! loops hold it by value and feed submissions through [`GameSession::submit`].

use super::{
    GradeError, LetterSet, MaxScoreRule, Rejection, WordBank, grade, max_score, score, validate,
};
use tracing::info;

/// State of one puzzle being played
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    letters: LetterSet,
    bank: &'a WordBank,
    accepted: Vec<String>,
    score: u32,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub letters: LetterSet,
    pub score: u32,
    pub accepted: Vec<String>,
    pub max_score: u32,
    pub grade: Result<u32, GradeError>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub const fn new(letters: LetterSet, bank: &'a WordBank) -> Self {
        Self {
            letters,
            bank,
            accepted: Vec::new(),
            score: 0,
        }
    }

    /// Submit a word
    ///
    /// On success the word is recorded and its points are returned.
    ///
    /// # Errors
    /// Returns the `Rejection` from [`validate`]; the session is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{GameSession, LetterSet, Rejection, WordBank};
    ///
    /// let bank = WordBank::from_words(["word", "wordy"]);
    /// let mut session = GameSession::new(LetterSet::new("owrdxyz").unwrap(), &bank);
    ///
    /// assert_eq!(session.submit("wordy"), Ok(5));
    /// assert_eq!(session.submit("wordy"), Err(Rejection::DuplicateSubmission));
    /// assert_eq!(session.score(), 5);
    /// ```
    pub fn submit(&mut self, word: &str) -> Result<u32, Rejection> {
        validate(word, &self.letters, &self.accepted, self.bank)?;

        let points = score(word, &self.letters);
        self.score += points;
        self.accepted.push(word.to_string());
        Ok(points)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Words accepted so far, in submission order
    #[inline]
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Running total
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// End the game and grade it against the max score
    #[must_use]
    pub fn finish(self, rule: MaxScoreRule) -> GameReport {
        let max_score = max_score(&self.letters, self.bank, rule);
        let grade = grade(self.score, max_score);

        info!(
            letters = %self.letters,
            score = self.score,
            words = self.accepted.len(),
            max_score,
            "game finished"
        );

        GameReport {
            letters: self.letters,
            score: self.score,
            accepted: self.accepted,
            max_score,
            grade,
        }
    }
}

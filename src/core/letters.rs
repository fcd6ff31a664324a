//! Puzzle letter set
//!
//! A `LetterSet` holds the seven hive letters. Index 0 is the guaranteed vowel and
//! index 1 is the center letter every valid word must contain.

use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Number of letters in a puzzle
pub const LETTER_COUNT: usize = 7;

/// Vowels the first letter is drawn from
pub const VOWELS: [u8; 5] = *b"aeiou";

/// Seven distinct lowercase letters with a designated center letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
}

/// Error type for user-supplied letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("Puzzle must have exactly 7 letters, got {0}")]
    InvalidLength(usize),
    #[error("Puzzle letters must be lowercase a-z, got '{0}'")]
    InvalidCharacter(char),
    #[error("Puzzle letters must be unique, '{0}' appears more than once")]
    DuplicateLetter(char),
}

impl LetterSet {
    /// Create a letter set from text such as `"owrdxyz"`
    ///
    /// The second letter becomes the center letter. Unlike [`LetterSet::generate`],
    /// no vowel is required.
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - Length is not exactly 7
    /// - A character is not a lowercase ASCII letter
    /// - A letter appears twice
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::new("owrdxyz").unwrap();
    /// assert_eq!(letters.center(), b'w');
    ///
    /// assert!(LetterSet::new("abc").is_err());
    /// assert!(LetterSet::new("aabcdef").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, LetterSetError> {
        let count = text.chars().count();
        if count != LETTER_COUNT {
            return Err(LetterSetError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(LetterSetError::InvalidCharacter(bad));
        }

        let mut letters = [0u8; LETTER_COUNT];
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            if letters[..i].contains(&ch) {
                return Err(LetterSetError::DuplicateLetter(char::from(ch)));
            }
            letters[i] = ch;
        }

        Ok(Self { letters })
    }

    /// Generate a random puzzle
    ///
    /// The first letter is a vowel, the remaining six are drawn from the whole
    /// alphabet and redrawn on collision.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut letters = [0u8; LETTER_COUNT];
        letters[0] = VOWELS[rng.random_range(0..VOWELS.len())];

        let mut filled = 1;
        while filled < LETTER_COUNT {
            let candidate = b'a' + rng.random_range(0..26u8);
            if !letters[..filled].contains(&candidate) {
                letters[filled] = candidate;
                filled += 1;
            }
        }

        let set = Self { letters };
        debug!(letters = %set, center = %char::from(set.center()), "generated puzzle");
        set
    }

    /// All seven letters in generation order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; LETTER_COUNT] {
        &self.letters
    }

    /// The letter every word must contain
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.letters[1]
    }

    /// The first letter, a vowel for generated puzzles
    #[inline]
    #[must_use]
    pub const fn vowel(&self) -> u8 {
        self.letters[0]
    }

    /// Check if the puzzle contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Check if the puzzle contains a character
    #[inline]
    #[must_use]
    pub fn contains_char(&self, ch: char) -> bool {
        ch.is_ascii() && self.contains(ch as u8)
    }

    /// Letters in the order they are shown to the player
    ///
    /// Center letter first, then the other draws, with the vowel last.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::new("etrlaps").unwrap();
    /// assert_eq!(&letters.display_order(), b"trlapse");
    /// ```
    #[must_use]
    pub fn display_order(&self) -> [u8; LETTER_COUNT] {
        let mut order = [0u8; LETTER_COUNT];
        order[..LETTER_COUNT - 1].copy_from_slice(&self.letters[1..]);
        order[LETTER_COUNT - 1] = self.letters[0];
        order
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.letters {
            write!(f, "{}", char::from(ch))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn letter_set_from_text() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        assert_eq!(letters.letters(), b"owrdxyz");
        assert_eq!(letters.vowel(), b'o');
        assert_eq!(letters.center(), b'w');
        assert_eq!(letters.to_string(), "owrdxyz");
    }

    #[test]
    fn letter_set_invalid_length() {
        assert_eq!(LetterSet::new("abcdef"), Err(LetterSetError::InvalidLength(6)));
        assert_eq!(
            LetterSet::new("abcdefgh"),
            Err(LetterSetError::InvalidLength(8))
        );
        assert_eq!(LetterSet::new(""), Err(LetterSetError::InvalidLength(0)));
    }

    #[test]
    fn letter_set_invalid_characters() {
        assert_eq!(
            LetterSet::new("abcDefg"),
            Err(LetterSetError::InvalidCharacter('D'))
        );
        assert_eq!(
            LetterSet::new("abc1efg"),
            Err(LetterSetError::InvalidCharacter('1'))
        );
        assert_eq!(
            LetterSet::new("abcéefg"),
            Err(LetterSetError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn letter_set_duplicates_rejected() {
        assert_eq!(
            LetterSet::new("abcdefa"),
            Err(LetterSetError::DuplicateLetter('a'))
        );
    }

    #[test]
    fn letter_set_vowel_not_required_for_user_input() {
        assert!(LetterSet::new("bcdfghj").is_ok());
    }

    #[test]
    fn letter_set_contains() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        assert!(letters.contains(b'w'));
        assert!(letters.contains_char('z'));
        assert!(!letters.contains(b'a'));
        assert!(!letters.contains_char('é'));
    }

    #[test]
    fn display_order_center_first_vowel_last() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        let order = letters.display_order();
        assert_eq!(order[0], letters.center());
        assert_eq!(order[6], letters.vowel());
        assert_eq!(&order, b"wrdxyzo");
    }

    #[test]
    fn generated_sets_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let set = LetterSet::generate(&mut rng);
            let letters = set.letters();

            assert!(VOWELS.contains(&letters[0]));
            assert!(letters.iter().all(u8::is_ascii_lowercase));
            for (i, ch) in letters.iter().enumerate() {
                assert!(!letters[i + 1..].contains(ch), "duplicate in {set}");
            }
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let first = LetterSet::generate(&mut StdRng::seed_from_u64(42));
        let second = LetterSet::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn generated_set_round_trips_through_text() {
        let set = LetterSet::generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(LetterSet::new(&set.to_string()), Ok(set));
    }
}

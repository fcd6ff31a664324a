//! Word scoring and max-score calculation

use super::validator::MIN_LENGTH;
use super::{LETTER_COUNT, LetterSet, WordBank};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Extra points for using every puzzle letter
pub const PANGRAM_BONUS: u32 = 7;

/// Which bank words count toward the max score
///
/// The reference game only counted words longer than the minimum length when
/// totalling the max score, even though minimum-length words are accepted
/// during play. `Reference` keeps that behavior; `AllValid` counts every word
/// the validator would accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxScoreRule {
    #[default]
    Reference,
    AllValid,
}

impl MaxScoreRule {
    /// Check if a word of this length contributes to the max score
    #[must_use]
    pub const fn counts_length(self, length: usize) -> bool {
        match self {
            Self::Reference => length > MIN_LENGTH,
            Self::AllValid => length >= MIN_LENGTH,
        }
    }
}

/// Points for a word
///
/// Four-letter words score 1, longer words score one point per letter, and a
/// pangram adds [`PANGRAM_BONUS`]. Words shorter than four letters earn no base
/// points.
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, score};
///
/// let letters = LetterSet::new("abcdefg").unwrap();
/// assert_eq!(score("face", &letters), 1);
/// assert_eq!(score("faced", &letters), 5);
/// assert_eq!(score("abcdefg", &letters), 14);
/// ```
#[must_use]
pub fn score(word: &str, letters: &LetterSet) -> u32 {
    let length = word.chars().count();

    let base = match length {
        0..MIN_LENGTH => 0,
        MIN_LENGTH => 1,
        _ => length as u32,
    };

    if is_pangram(word, letters) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

/// Check if a word uses all seven puzzle letters at least once
#[must_use]
pub fn is_pangram(word: &str, letters: &LetterSet) -> bool {
    let used: FxHashSet<u8> = word.bytes().filter(|&b| letters.contains(b)).collect();
    used.len() == LETTER_COUNT
}

/// Check if a bank word counts toward the max score
///
/// The word must satisfy the length rule, contain the center letter, and use
/// only puzzle letters.
#[must_use]
pub fn qualifies(word: &str, letters: &LetterSet, rule: MaxScoreRule) -> bool {
    rule.counts_length(word.chars().count())
        && word.bytes().any(|b| b == letters.center())
        && word.chars().all(|c| letters.contains_char(c))
}

/// Words that make up the max score, sorted alphabetically
#[must_use]
pub fn qualifying_words<'a>(
    letters: &LetterSet,
    bank: &'a WordBank,
    rule: MaxScoreRule,
) -> Vec<&'a str> {
    let mut words: Vec<&str> = bank
        .iter()
        .filter(|word| qualifies(word, letters, rule))
        .collect();
    words.sort_unstable();
    words
}

/// Theoretical best total for a puzzle
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, MaxScoreRule, WordBank, max_score};
///
/// let letters = LetterSet::new("owrdxyz").unwrap();
/// let bank = WordBank::from_words(["word", "wordy", "rowdy", "ward"]);
///
/// assert_eq!(max_score(&letters, &bank, MaxScoreRule::Reference), 10);
/// assert_eq!(max_score(&letters, &bank, MaxScoreRule::AllValid), 11);
/// ```
#[must_use]
pub fn max_score(letters: &LetterSet, bank: &WordBank, rule: MaxScoreRule) -> u32 {
    let total: u32 = bank
        .iter()
        .filter(|word| qualifies(word, letters, rule))
        .map(|word| score(word, letters))
        .sum();

    debug!(letters = %letters, ?rule, total, "computed max score");
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_letter_word_scores_one() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        assert_eq!(score("word", &letters), 1);
    }

    #[test]
    fn longer_word_scores_its_length() {
        let letters = LetterSet::new("owrdyxz").unwrap();
        assert_eq!(score("wordy", &letters), 5);
        assert!(!is_pangram("wordy", &letters));
    }

    #[test]
    fn short_words_score_nothing() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        assert_eq!(score("", &letters), 0);
        assert_eq!(score("row", &letters), 0);
    }

    #[test]
    fn pangram_adds_bonus() {
        let letters = LetterSet::new("abcdefg").unwrap();
        assert!(is_pangram("abcdefg", &letters));
        assert_eq!(score("abcdefg", &letters), 14);
    }

    #[test]
    fn pangram_counts_distinct_letters() {
        let letters = LetterSet::new("abcdefg").unwrap();

        // Seven letters long but only six distinct
        assert!(!is_pangram("abcdefa", &letters));
        assert_eq!(score("abcdefa", &letters), 7);

        // Repeats do not stop a pangram
        assert!(is_pangram("gabbcdeeffa", &letters));
        assert_eq!(score("gabbcdeeffa", &letters), 11 + PANGRAM_BONUS);
    }

    #[test]
    fn pangram_ignores_foreign_letters() {
        let letters = LetterSet::new("abcdefg").unwrap();
        assert!(!is_pangram("abcdefxyz", &letters));
    }

    #[test]
    fn max_score_rule_lengths() {
        assert!(!MaxScoreRule::Reference.counts_length(4));
        assert!(MaxScoreRule::Reference.counts_length(5));
        assert!(MaxScoreRule::AllValid.counts_length(4));
        assert!(!MaxScoreRule::AllValid.counts_length(3));
    }

    #[test]
    fn max_score_reference_skips_four_letter_words() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        let bank = WordBank::from_words(["word", "wordy", "rowdy", "dowry", "ward", "dory"]);

        // wordy, rowdy, dowry at 5 points each; word is too short for the rule,
        // ward uses 'a', dory has no center letter
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::Reference), 15);
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::AllValid), 16);
    }

    #[test]
    fn max_score_includes_pangram_bonus() {
        let letters = LetterSet::new("abcdefg").unwrap();
        let bank = WordBank::from_words(["abcdefg", "faced", "cabbage"]);

        // abcdefg: 7 + 7, cabbage: 7 (no d or f), faced lacks the center 'b'
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::Reference), 21);
    }

    #[test]
    fn max_score_empty_bank() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        let bank = WordBank::default();
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::Reference), 0);
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::AllValid), 0);
    }

    #[test]
    fn qualifying_words_sorted() {
        let letters = LetterSet::new("owrdxyz").unwrap();
        let bank = WordBank::from_words(["wordy", "rowdy", "dowry", "word", "ward"]);

        assert_eq!(
            qualifying_words(&letters, &bank, MaxScoreRule::Reference),
            ["dowry", "rowdy", "wordy"]
        );
        assert_eq!(
            qualifying_words(&letters, &bank, MaxScoreRule::AllValid),
            ["dowry", "rowdy", "word", "wordy"]
        );
    }
}

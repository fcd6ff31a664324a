//! Puzzle analysis command
//!
//! Lists every dictionary word that counts toward a puzzle's max score.

use crate::core::{
    LetterSet, MaxScoreRule, WordBank, is_pangram, max_score, qualifying_words, score,
};

/// A dictionary word with its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub points: u32,
    pub pangram: bool,
}

/// Result of analyzing a puzzle
pub struct AnalysisResult {
    pub letters: LetterSet,
    pub rule: MaxScoreRule,
    pub words: Vec<ScoredWord>,
    pub pangrams: usize,
    pub max_score: u32,
}

/// Score every qualifying word for a puzzle
///
/// Words are ordered by points (highest first), then alphabetically.
#[must_use]
pub fn analyze_letters(letters: &LetterSet, bank: &WordBank, rule: MaxScoreRule) -> AnalysisResult {
    let mut words: Vec<ScoredWord> = qualifying_words(letters, bank, rule)
        .into_iter()
        .map(|word| ScoredWord {
            word: word.to_string(),
            points: score(word, letters),
            pangram: is_pangram(word, letters),
        })
        .collect();

    words.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));

    let pangrams = words.iter().filter(|w| w.pangram).count();

    AnalysisResult {
        letters: *letters,
        rule,
        words,
        pangrams,
        max_score: max_score(letters, bank, rule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_orders_by_points() {
        let letters = LetterSet::new("abcdefg").unwrap();
        let bank = WordBank::from_words(["abcdefg", "cabbage", "badge", "bead", "bade", "fish"]);

        let result = analyze_letters(&letters, &bank, MaxScoreRule::Reference);
        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();

        assert_eq!(words, ["abcdefg", "cabbage", "badge"]);
        assert_eq!(result.words[0].points, 14);
        assert!(result.words[0].pangram);
        assert_eq!(result.pangrams, 1);
    }

    #[test]
    fn analyze_total_matches_max_score() {
        let letters = LetterSet::new("abcdefg").unwrap();
        let bank = WordBank::from_words(["abcdefg", "cabbage", "badge", "bead", "bade"]);

        for rule in [MaxScoreRule::Reference, MaxScoreRule::AllValid] {
            let result = analyze_letters(&letters, &bank, rule);
            let total: u32 = result.words.iter().map(|w| w.points).sum();
            assert_eq!(total, result.max_score);
        }
    }

    #[test]
    fn analyze_all_valid_includes_four_letter_words() {
        let letters = LetterSet::new("abcdefg").unwrap();
        let bank = WordBank::from_words(["bead", "bade", "badge"]);

        let result = analyze_letters(&letters, &bank, MaxScoreRule::AllValid);
        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["badge", "bade", "bead"]);
        assert_eq!(result.max_score, 7);
    }

    #[test]
    fn analyze_empty_bank() {
        let letters = LetterSet::new("abcdefg").unwrap();
        let result = analyze_letters(&letters, &WordBank::default(), MaxScoreRule::Reference);
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
        assert_eq!(result.pangrams, 0);
    }
}

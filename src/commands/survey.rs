//! Survey command
//!
//! Generates many random puzzles and summarizes how playable they are.

use crate::core::{LetterSet, MaxScoreRule, WordBank, is_pangram, qualifying_words, score};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Width of a max-score histogram bucket
pub const BUCKET_WIDTH: u32 = 25;

/// Result of a survey run
pub struct SurveyResult {
    pub total_puzzles: usize,
    pub average_max_score: f64,
    pub min_max_score: u32,
    pub max_max_score: u32,
    pub empty_puzzles: usize,
    pub pangram_puzzles: usize,
    pub best_puzzle: Option<(LetterSet, u32)>,
    /// Puzzle counts keyed by the lower bound of their max-score bucket
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles and collect max-score statistics
pub fn run_survey<R: Rng>(
    bank: &WordBank,
    count: usize,
    rng: &mut R,
    rule: MaxScoreRule,
) -> SurveyResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |style| style.progress_chars("█▓▒░"),
            ),
    );

    let start = Instant::now();
    let mut total = 0u64;
    let mut min_max_score = u32::MAX;
    let mut max_max_score = 0;
    let mut empty_puzzles = 0;
    let mut pangram_puzzles = 0;
    let mut best_puzzle: Option<(LetterSet, u32)> = None;
    let mut distribution: HashMap<u32, usize> = HashMap::new();

    for _ in 0..count {
        let letters = LetterSet::generate(rng);
        let words = qualifying_words(&letters, bank, rule);
        let puzzle_max: u32 = words.iter().map(|word| score(word, &letters)).sum();

        total += u64::from(puzzle_max);
        min_max_score = min_max_score.min(puzzle_max);
        max_max_score = max_max_score.max(puzzle_max);
        if puzzle_max == 0 {
            empty_puzzles += 1;
        }
        if words.iter().any(|word| is_pangram(word, &letters)) {
            pangram_puzzles += 1;
        }
        if best_puzzle.is_none_or(|(_, best)| puzzle_max > best) {
            best_puzzle = Some((letters, puzzle_max));
        }
        *distribution
            .entry(puzzle_max / BUCKET_WIDTH * BUCKET_WIDTH)
            .or_insert(0) += 1;

        debug!(%letters, max_score = puzzle_max, words = words.len(), "surveyed puzzle");
        pb.set_message(format!("{letters}: {puzzle_max}"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();

    SurveyResult {
        total_puzzles: count,
        average_max_score: if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        },
        min_max_score: if count == 0 { 0 } else { min_max_score },
        max_max_score,
        empty_puzzles,
        pangram_puzzles,
        best_puzzle,
        distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::max_score;
    use crate::wordlists::embedded_bank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn survey_runs() {
        let bank = embedded_bank();
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_survey(&bank, 20, &mut rng, MaxScoreRule::Reference);

        assert_eq!(result.total_puzzles, 20);
        assert!(result.min_max_score <= result.max_max_score);
        assert!(result.average_max_score >= f64::from(result.min_max_score));
        assert!(result.average_max_score <= f64::from(result.max_max_score));
        assert!(result.empty_puzzles <= 20);
        assert!(result.pangram_puzzles <= 20);
    }

    #[test]
    fn survey_distribution_sums_correctly() {
        let bank = embedded_bank();
        let mut rng = StdRng::seed_from_u64(5);
        let result = run_survey(&bank, 15, &mut rng, MaxScoreRule::AllValid);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_puzzles);
        for &bucket in result.distribution.keys() {
            assert_eq!(bucket % BUCKET_WIDTH, 0);
        }
    }

    #[test]
    fn survey_best_puzzle_matches_max_score() {
        let bank = embedded_bank();
        let mut rng = StdRng::seed_from_u64(9);
        let result = run_survey(&bank, 10, &mut rng, MaxScoreRule::Reference);

        let (letters, best) = result.best_puzzle.unwrap();
        assert_eq!(best, result.max_max_score);
        assert_eq!(max_score(&letters, &bank, MaxScoreRule::Reference), best);
    }

    #[test]
    fn survey_of_zero_puzzles() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_survey(&bank, 0, &mut rng, MaxScoreRule::Reference);

        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.min_max_score, 0);
        assert!(result.best_puzzle.is_none());
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn survey_with_empty_bank_counts_empty_puzzles() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(2);
        let result = run_survey(&bank, 4, &mut rng, MaxScoreRule::Reference);

        assert_eq!(result.empty_puzzles, 4);
        assert_eq!(result.max_max_score, 0);
        assert_eq!(result.distribution.get(&0), Some(&4));
    }
}

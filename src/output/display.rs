//! Display functions for game feedback and command results

use super::formatters::{create_progress_bar, format_grade, hive_line, rank_title};
use crate::commands::{AnalysisResult, SurveyResult};
use crate::core::{GameReport, LetterSet, MaxScoreRule, PANGRAM_BONUS, Rejection};
use colored::Colorize;
use std::io::{self, Write};

/// Print the game rules
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Create words using letters from the hive.")?;
    writeln!(out, "Words must contain at least 4 letters.")?;
    writeln!(out, "Words must include the first letter.")?;
    writeln!(out, "Letters can be used more than once.")?;
    writeln!(out, "4-letter words are worth 1 point each.")?;
    writeln!(out, "Longer words earn 1 point per letter.")?;
    writeln!(
        out,
        "Puzzles may include a \u{201c}pangram\u{201d} which uses every letter. \
         These are worth {PANGRAM_BONUS} extra points!"
    )
}

/// Print the hive letters, center letter first
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_hive<W: Write>(out: &mut W, letters: &LetterSet) -> io::Result<()> {
    writeln!(out, "\n   {}\n", hive_line(letters).bright_yellow().bold())
}

/// Print the outcome of one submission followed by the running score
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_feedback<W: Write>(
    out: &mut W,
    outcome: Result<(u32, bool), Rejection>,
    score: u32,
) -> io::Result<()> {
    match outcome {
        Ok((points, true)) => writeln!(
            out,
            "{} +{points}",
            "Pangram!".bright_magenta().bold()
        )?,
        Ok((points, false)) => writeln!(out, "{} +{points}", "Nice!".green())?,
        Err(rejection) => writeln!(out, "{}", rejection.to_string().red())?,
    }
    writeln!(out, "Score: {score}")
}

/// Print the end-of-game report
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_report<W: Write>(out: &mut W, report: &GameReport) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "Final score: {}", report.score)?;
    for word in &report.accepted {
        writeln!(out, "{word}")?;
    }
    writeln!(out, "Max score: {}", report.max_score)?;
    writeln!(out, "Your grade: {}", format_grade(&report.grade))?;

    if let Ok(percent) = report.grade {
        let bar = create_progress_bar(f64::from(percent), 100.0, 30);
        writeln!(out, "[{}] {}", bar.green(), rank_title(percent).bright_yellow().bold())?;
    }
    writeln!(out, "{}", "═".repeat(60).cyan())
}

/// Print the result of puzzle analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE ANALYSIS:".bright_cyan().bold(),
        hive_line(&result.letters).to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let rule = match result.rule {
        MaxScoreRule::Reference => "words longer than 4 letters",
        MaxScoreRule::AllValid => "all valid words",
    };

    println!("\n📊 Counting {rule}:");
    for word in &result.words {
        let points = format!("{:>3}", word.points);
        if word.pangram {
            println!(
                "   {} {} {}",
                points.bright_yellow(),
                word.word.bright_magenta().bold(),
                "(pangram)".bright_black()
            );
        } else {
            println!("   {} {}", points.bright_yellow(), word.word);
        }
    }

    println!("\n   Words:      {}", result.words.len());
    println!("   Pangrams:   {}", result.pangrams);
    println!(
        "   Max score:  {}",
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Max scores:".bright_cyan().bold());
    println!("   Puzzles generated: {}", result.total_puzzles);
    println!(
        "   Average:           {}",
        format!("{:.1}", result.average_max_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Lowest:            {}",
        format!("{}", result.min_max_score).yellow()
    );
    println!(
        "   Highest:           {}",
        format!("{}", result.max_max_score).green()
    );
    if let Some((letters, best)) = &result.best_puzzle {
        println!("   Best puzzle:       {} ({best})", hive_line(letters));
    }
    println!("   Unplayable:        {}", result.empty_puzzles);
    println!("   With a pangram:    {}", result.pangram_puzzles);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut buckets: Vec<_> = result.distribution.iter().collect();
    buckets.sort_unstable_by_key(|&(bucket, _)| *bucket);
    for (bucket, &count) in buckets {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {bucket:>4}+: {bar} {count:4} ({pct:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GradeError;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rules_mention_pangram_bonus() {
        let text = render(|out| write_rules(out));
        assert!(text.contains("at least 4 letters"));
        assert!(text.contains("worth 7 extra points"));
    }

    #[test]
    fn feedback_reports_rejection_and_score() {
        let text = render(|out| write_feedback(out, Err(Rejection::NotInDictionary), 12));
        assert!(text.contains("Sorry, entry not a word. Try again."));
        assert!(text.contains("Score: 12"));
    }

    #[test]
    fn feedback_reports_points() {
        let text = render(|out| write_feedback(out, Ok((14, true)), 20));
        assert!(text.contains("+14"));
        assert!(text.contains("Score: 20"));
    }

    #[test]
    fn report_lists_words_in_order() {
        let report = GameReport {
            letters: LetterSet::new("owrdxyz").unwrap(),
            score: 6,
            accepted: vec!["wordy".to_string(), "word".to_string()],
            max_score: 15,
            grade: Ok(40),
        };

        let text = render(|out| write_report(out, &report));
        assert!(text.contains("Final score: 6"));
        assert!(text.contains("Max score: 15"));
        assert!(text.contains("Your grade: 40%"));

        let wordy = text.find("wordy\n").unwrap();
        let word = text.find("word\n").unwrap();
        assert!(wordy < word);
    }

    #[test]
    fn report_with_degenerate_grade() {
        let report = GameReport {
            letters: LetterSet::new("owrdxyz").unwrap(),
            score: 3,
            accepted: vec!["word".to_string()],
            max_score: 0,
            grade: Err(GradeError::DegenerateMaxScore { score: 3 }),
        };

        let text = render(|out| write_report(out, &report));
        assert!(text.contains("Your grade: n/a"));
    }
}

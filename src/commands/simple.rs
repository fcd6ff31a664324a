//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: ask about the rules, then read words until
//! an empty line.

use crate::core::{GameReport, GameSession, MaxScoreRule, is_pangram};
use crate::output::{write_feedback, write_hive, write_report, write_rules};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Play one game over the given input and output streams
///
/// End of input behaves like an empty line.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    mut session: GameSession<'_>,
    rule: MaxScoreRule,
    input: &mut R,
    output: &mut W,
) -> Result<GameReport> {
    if ask_for_rules(input, output)? {
        write_rules(output)?;
    }

    write_hive(output, session.letters())?;

    while let Some(word) = get_user_input("Enter a word (in lower case)", input, output)?
        && !word.is_empty()
    {
        let outcome = session
            .submit(&word)
            .map(|points| (points, is_pangram(&word, session.letters())));
        write_feedback(output, outcome, session.score())?;
    }

    let report = session.finish(rule);
    write_report(output, &report)?;
    output.flush()?;

    Ok(report)
}

/// Ask whether to show the rules until the player answers Y or N
fn ask_for_rules<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let mut prompt = "Welcome to the Spelling Bee! Do you want to read the rules? (Enter Y or N)";

    loop {
        match get_user_input(prompt, input, output)?.as_deref() {
            Some("Y") => return Ok(true),
            Some("N") | None => return Ok(false),
            Some(_) => prompt = "Please enter Y or N",
        }
    }
}

/// Get user input with a prompt
///
/// Only the line terminator is removed. Returns `None` at end of input.
fn get_user_input<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

//! Spelling Bee - CLI
//!
//! Spelling Bee with TUI and plain CLI modes, plus puzzle analysis tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::{
    commands::{analyze_letters, run_simple, run_survey},
    core::{GameSession, LetterSet, MaxScoreRule, WordBank},
    output::{print_analysis_result, print_survey_result},
    wordlists::{embedded_bank, load_from_file},
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee: make words from seven letters, always using the center letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "SPELLING_BEE_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Seed for puzzle generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play a specific puzzle: 7 distinct letters, the second is the center letter
    #[arg(short, long, global = true)]
    letters: Option<String>,

    /// Count 4-letter words toward the max score
    #[arg(long, global = true)]
    count_four_letter_words: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line prompts without TUI)
    Simple,

    /// List every word that counts toward a puzzle's max score
    Analyze {
        /// Puzzle letters (falls back to --letters, then a random puzzle)
        letters: Option<String>,
    },

    /// Generate many puzzles and summarize their max scores
    Survey {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the word bank based on the -w flag
fn load_word_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => {
            let bank = embedded_bank();
            info!(words = bank.len(), "using embedded word list");
            Ok(bank)
        }
        path => load_from_file(path).context("could not load word list"),
    }
}

/// Use the requested letters, or generate a puzzle
fn puzzle_letters(letters: Option<&str>, rng: &mut StdRng) -> Result<LetterSet> {
    match letters {
        Some(text) => LetterSet::new(text).with_context(|| format!("invalid letters '{text}'")),
        None => Ok(LetterSet::generate(rng)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bank = load_word_bank(&cli.wordlist)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let rule = if cli.count_four_letter_words {
        MaxScoreRule::AllValid
    } else {
        MaxScoreRule::Reference
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let letters = puzzle_letters(cli.letters.as_deref(), &mut rng)?;
            run_play_command(&bank, letters, rng, rule)
        }
        Commands::Simple => {
            let letters = puzzle_letters(cli.letters.as_deref(), &mut rng)?;
            run_simple_command(&bank, letters, rule)
        }
        Commands::Analyze { letters } => {
            let requested = letters.as_deref().or(cli.letters.as_deref());
            let letters = puzzle_letters(requested, &mut rng)?;
            print_analysis_result(&analyze_letters(&letters, &bank, rule));
            Ok(())
        }
        Commands::Survey { count } => {
            println!("🎯 Surveying {count} random puzzles...");
            let result = run_survey(&bank, count, &mut rng, rule);
            print_survey_result(&result);
            Ok(())
        }
    }
}

fn run_simple_command(bank: &WordBank, letters: LetterSet, rule: MaxScoreRule) -> Result<()> {
    let session = GameSession::new(letters, bank);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_simple(session, rule, &mut stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_play_command(
    bank: &WordBank,
    letters: LetterSet,
    rng: StdRng,
    rule: MaxScoreRule,
) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let app = App::new(bank, letters, rng, rule);
    run_tui(app)
}

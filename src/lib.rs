//! Spelling Bee
//!
//! A terminal Spelling Bee: seven letters, one required center letter, and a final
//! grade against the best score the dictionary allows.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::{GameSession, LetterSet, MaxScoreRule, WordBank};
//!
//! let bank = WordBank::from_words(["word", "wordy", "rowdy"]);
//! let mut session = GameSession::new(LetterSet::new("owrdxyz").unwrap(), &bank);
//!
//! session.submit("wordy").unwrap();
//! let report = session.finish(MaxScoreRule::Reference);
//! assert_eq!(report.grade, Ok(50));
//! ```

// Core game rules
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

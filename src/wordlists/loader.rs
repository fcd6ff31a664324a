//! Word list loading utilities
//!
//! Provides functions to load a word bank from a file or from the embedded list.

use super::WORDS;
use crate::core::WordBank;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word list {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// Load a word bank from a newline-delimited file
///
/// Each line is trimmed; blank lines and duplicates are ignored.
///
/// # Errors
///
/// Returns `WordBankError::Read` if the file cannot be read and
/// `WordBankError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/word_list.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, WordBankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordBankError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = WordBank::from_words(content.lines());
    if bank.is_empty() {
        return Err(WordBankError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), words = bank.len(), "loaded word list");
    Ok(bank)
}

/// Word bank built from the embedded dictionary
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::embedded_bank;
///
/// let bank = embedded_bank();
/// assert!(bank.contains("honey"));
/// ```
#[must_use]
pub fn embedded_bank() -> WordBank {
    WordBank::from_words(WORDS)
}

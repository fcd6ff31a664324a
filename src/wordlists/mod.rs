//! Word lists for Spelling Bee
//!
//! Provides the embedded dictionary compiled into the binary and a file loader.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordBankError, embedded_bank, load_from_file};

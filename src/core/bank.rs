//! Dictionary of acceptable words

use rustc_hash::FxHashSet;

/// Read-only set of dictionary words
///
/// Membership is exact string equality. Duplicate entries collapse into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: FxHashSet<String>,
}

impl WordBank {
    /// Build a bank from any iterator of words
    ///
    /// Entries are trimmed and blank entries dropped.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::WordBank;
    ///
    /// let bank = WordBank::from_words(["word", " wordy ", "word", ""]);
    /// assert_eq!(bank.len(), 2);
    /// assert!(bank.contains("wordy"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        Self { words }
    }

    /// Check if a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordBank {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

use std::collections::HashSet;

use crate::constants::stop_words::DEFAULT_STOP_WORDS;
use crate::types::StopWord;

/// Set of modifier tokens that carry no ingredient identity.
///
/// Fixed once constructed; the default holds the built-in freshness,
/// preparation, and size modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<StopWord>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl StopWordSet {
    /// Create an empty set (no token is ever dropped).
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Add extra words on top of the current set.
    ///
    /// Words are lowercased and trimmed; blank entries are ignored.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        self
    }

    /// True if `token` is a stopword (exact match).
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no token is ever dropped.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

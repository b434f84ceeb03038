use std::path::PathBuf;

use crate::constants::config::{
    DEFAULT_SYNONYMS_FILENAME, ENV_EXTRA_STOP_WORDS, ENV_LIST_DELIMITER, ENV_SYNONYMS_PATH,
};
use crate::errors::NormalizerError;
use crate::normalizer::IngredientNormalizer;
use crate::stopwords::StopWordSet;
use crate::synonyms::SynonymTable;
use crate::types::StopWord;

/// Startup configuration for building an [`IngredientNormalizer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Synonym definitions source; `None` means an empty (identity) table.
    pub synonyms_path: Option<PathBuf>,
    /// Stopwords added on top of the built-in set.
    pub extra_stop_words: Vec<StopWord>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            synonyms_path: Some(PathBuf::from(DEFAULT_SYNONYMS_FILENAME)),
            extra_stop_words: Vec::new(),
        }
    }
}

impl NormalizerConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, NormalizerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults for unset keys.
    ///
    /// A synonyms path that is set but blank is rejected rather than treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NormalizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_SYNONYMS_PATH) {
            let path = path.trim();
            if path.is_empty() {
                return Err(NormalizerError::Configuration(format!(
                    "{ENV_SYNONYMS_PATH} is set but empty"
                )));
            }
            config.synonyms_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_EXTRA_STOP_WORDS) {
            config.extra_stop_words = raw
                .split(ENV_LIST_DELIMITER)
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect();
        }
        Ok(config)
    }

    /// Override the synonym definitions path.
    pub fn with_synonyms_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.synonyms_path = Some(path.into());
        self
    }

    /// Use an empty synonym table regardless of what is on disk.
    pub fn without_synonyms(mut self) -> Self {
        self.synonyms_path = None;
        self
    }

    /// Append extra stopwords.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopWord>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Load the synonym table and assemble a normalizer.
    ///
    /// Fails only when the definitions source exists but cannot be read or parsed.
    pub fn build(&self) -> Result<IngredientNormalizer, NormalizerError> {
        let synonyms = match &self.synonyms_path {
            Some(path) => SynonymTable::load(path)?,
            None => SynonymTable::default(),
        };
        let stop_words = StopWordSet::default().with_extra(&self.extra_stop_words);
        Ok(IngredientNormalizer::new(synonyms).with_stop_words(stop_words))
    }
}

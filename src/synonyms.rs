use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::NormalizerError;
use crate::types::{CanonicalTerm, SynonymKey};

/// Immutable noisy-term to canonical-term mapping.
///
/// Built once (usually at startup) and then shared read-only; it is `Send + Sync`
/// and safe to hand to any number of concurrent callers behind an `Arc` or `&`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<SynonymKey, CanonicalTerm>,
}

impl SynonymTable {
    /// Load definitions from a JSON object of `"term": "canonical"` pairs.
    ///
    /// A missing file yields an empty table. Any other read failure, or content
    /// that is not a string-to-string JSON object, is returned as an error and
    /// should abort startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NormalizerError> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    path = %path.display(),
                    "synonym definitions not found; using identity mapping"
                );
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let table = Self::from_json_str(&raw).map_err(|err| NormalizerError::MalformedSynonyms {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        info!(
            path = %path.display(),
            entries = table.len(),
            "loaded synonym definitions"
        );
        debug!(keys = ?table.sorted_keys(), "synonym keys");
        Ok(table)
    }

    /// Parse definitions from a JSON object string.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<SynonymKey, CanonicalTerm> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// Build a table from in-memory pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SynonymKey>,
        V: Into<CanonicalTerm>,
    {
        pairs.into_iter().collect()
    }

    /// Mapped canonical term, or `term` itself when no entry exists.
    ///
    /// Single pass: the replacement is never looked up again.
    pub fn lookup<'a>(&'a self, term: &'a str) -> &'a str {
        self.get(term).unwrap_or(term)
    }

    /// Mapped canonical term if an entry exists.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every term maps to itself.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(term, canonical)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Keys in lexical order, for stable log output.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.iter().map(|(key, _)| key).collect();
        keys.sort_unstable();
        keys
    }
}

impl<K, V> FromIterator<(K, V)> for SynonymTable
where
    K: Into<SynonymKey>,
    V: Into<CanonicalTerm>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

//! Ingredient-name canonicalization pipeline.
//!
//! Each raw item goes through case-folding, punctuation stripping, whitespace
//! collapsing, stopword removal, heuristic singularization, and one synonym
//! lookup. Results are deduplicated in first-seen order.

use indexmap::IndexSet;
use tracing::debug;

use crate::report::NormalizationReport;
use crate::stopwords::StopWordSet;
use crate::synonyms::SynonymTable;
use crate::types::{CanonicalTerm, NormalizedList};
use crate::utils::{clean_term, singularize};

/// What the pipeline produced for a single raw item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermOutcome {
    /// Empty or whitespace-only input.
    Blank,
    /// Nothing identifying survived cleanup (pure punctuation, only stopwords).
    Emptied,
    /// A canonical term; `substituted` is true when a synonym entry replaced it.
    Canonical {
        /// The canonical term.
        term: CanonicalTerm,
        /// Whether a synonym entry replaced the singularized term.
        substituted: bool,
    },
}

/// Owns the synonym table and stopword set used to canonicalize ingredient lists.
///
/// Holds no mutable state; one instance can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct IngredientNormalizer {
    synonyms: SynonymTable,
    stop_words: StopWordSet,
}

impl IngredientNormalizer {
    /// Create a normalizer using `synonyms` and the built-in stopwords.
    pub fn new(synonyms: SynonymTable) -> Self {
        Self {
            synonyms,
            stop_words: StopWordSet::default(),
        }
    }

    /// Replace the stopword set.
    pub fn with_stop_words(mut self, stop_words: StopWordSet) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Synonym table used for canonicalization.
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Stopwords dropped before singularization.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Run the per-item pipeline (everything except deduplication).
    pub fn canonicalize(&self, raw: &str) -> TermOutcome {
        canonicalize_item(raw, &self.synonyms, &self.stop_words)
    }

    /// Canonical term for one item, or `None` when the item contributes nothing.
    pub fn canonical_term(&self, raw: &str) -> Option<CanonicalTerm> {
        match self.canonicalize(raw) {
            TermOutcome::Canonical { term, .. } => Some(term),
            TermOutcome::Blank | TermOutcome::Emptied => None,
        }
    }

    /// Canonicalize and deduplicate `raw`, preserving first-seen order.
    pub fn normalize<I, S>(&self, raw: I) -> NormalizedList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.normalize_with_report(raw).0
    }

    /// Same as [`normalize`](Self::normalize), also returning per-call counters.
    pub fn normalize_with_report<I, S>(&self, raw: I) -> (NormalizedList, NormalizationReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        run_pipeline(raw, &self.synonyms, &self.stop_words)
    }
}

/// Normalize `raw` against `table` using the built-in stopwords.
///
/// Convenience wrapper for callers that do not keep an [`IngredientNormalizer`].
pub fn normalize<I, S>(raw: I, table: &SynonymTable) -> NormalizedList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_pipeline(raw, table, &StopWordSet::default()).0
}

fn canonicalize_item(raw: &str, synonyms: &SynonymTable, stop_words: &StopWordSet) -> TermOutcome {
    if raw.trim().is_empty() {
        return TermOutcome::Blank;
    }
    let cleaned = clean_term(raw, stop_words);
    if cleaned.is_empty() {
        return TermOutcome::Emptied;
    }
    let singular = singularize(&cleaned);
    match synonyms.get(&singular) {
        Some(mapped) => TermOutcome::Canonical {
            term: mapped.to_string(),
            substituted: true,
        },
        None => TermOutcome::Canonical {
            term: singular,
            substituted: false,
        },
    }
}

fn run_pipeline<I, S>(
    raw: I,
    synonyms: &SynonymTable,
    stop_words: &StopWordSet,
) -> (NormalizedList, NormalizationReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: IndexSet<CanonicalTerm> = IndexSet::new();
    let mut report = NormalizationReport::default();

    for item in raw {
        report.inputs += 1;
        match canonicalize_item(item.as_ref(), synonyms, stop_words) {
            TermOutcome::Blank => report.blank += 1,
            TermOutcome::Emptied => report.emptied += 1,
            TermOutcome::Canonical { term, substituted } => {
                if substituted {
                    report.substituted += 1;
                }
                if seen.insert(term) {
                    report.emitted += 1;
                } else {
                    report.duplicates += 1;
                }
            }
        }
    }

    debug!(
        inputs = report.inputs,
        blank = report.blank,
        emptied = report.emptied,
        substituted = report.substituted,
        duplicates = report.duplicates,
        emitted = report.emitted,
        "normalized ingredient list"
    );
    (seen.into_iter().collect(), report)
}

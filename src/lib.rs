#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner used by the `ingredient-canon` binary.
pub mod cli;
/// Normalizer configuration and startup wiring.
pub mod config;
/// Centralized constants used across the pipeline.
pub mod constants;
/// Vision-detection response helpers.
pub mod detection;
/// The canonicalization pipeline.
pub mod normalizer;
/// Per-call normalization counters.
pub mod report;
/// Built-in and configurable stopwords.
pub mod stopwords;
/// Synonym definitions loading and lookup.
pub mod synonyms;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers, one per pipeline stage.
pub mod utils;

mod errors;

pub use config::NormalizerConfig;
pub use detection::{DetectionPayload, raw_terms_from_json, raw_terms_from_value};
pub use errors::NormalizerError;
pub use normalizer::{IngredientNormalizer, TermOutcome, normalize};
pub use report::NormalizationReport;
pub use stopwords::StopWordSet;
pub use synonyms::SynonymTable;
pub use types::{CanonicalTerm, NormalizedList, RawTerm, StopWord, SynonymKey};

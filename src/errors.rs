use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for synonym loading, configuration, and collaborator payload failures.
///
/// Normalization itself never fails; every variant here is raised either at
/// startup or at the boundary where raw terms enter the crate.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// Definitions source exists but is not a string-to-string JSON object.
    #[error("synonym definitions at '{}' are malformed: {reason}", path.display())]
    MalformedSynonyms {
        /// Path of the rejected source.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
    /// Definitions source exists but could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Detector response lacks a usable ingredient list.
    #[error("detection payload is invalid: {0}")]
    InvalidDetectionPayload(String),
    /// A configuration value is present but unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

//! Boundary helpers for the vision-detection collaborator.
//!
//! The detector answers with a JSON object carrying an `ingredients_detected`
//! list. Only that list is consumed here; transport is the caller's business.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::detection::INGREDIENTS_FIELD;
use crate::errors::NormalizerError;
use crate::types::{CanonicalTerm, RawTerm};

/// Response shape returned to callers after normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionPayload {
    /// Canonical terms, kept under the detector's field name.
    pub ingredients_detected: Vec<CanonicalTerm>,
}

impl DetectionPayload {
    /// Wrap a normalized list.
    pub fn new(ingredients_detected: Vec<CanonicalTerm>) -> Self {
        Self {
            ingredients_detected,
        }
    }
}

/// Extract raw terms from a detector response body.
pub fn raw_terms_from_json(body: &str) -> Result<Vec<RawTerm>, NormalizerError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        NormalizerError::InvalidDetectionPayload(format!("response is not JSON: {err}"))
    })?;
    raw_terms_from_value(&value)
}

/// Extract raw terms from an already-parsed detector response.
///
/// The field must exist and be a list. Non-string entries are skipped the same
/// way blank items are skipped by the normalizer.
pub fn raw_terms_from_value(value: &Value) -> Result<Vec<RawTerm>, NormalizerError> {
    let field = value.get(INGREDIENTS_FIELD).ok_or_else(|| {
        NormalizerError::InvalidDetectionPayload(format!("missing '{INGREDIENTS_FIELD}'"))
    })?;
    let items = field.as_array().ok_or_else(|| {
        NormalizerError::InvalidDetectionPayload(format!("'{INGREDIENTS_FIELD}' is not a list"))
    })?;
    Ok(items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect())
}

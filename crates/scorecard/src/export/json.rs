//! Overrides export.

use serde_json::Value;

use crate::ScorecardError;

/// File name offered for downloaded overrides.
pub const EXPORT_FILE_NAME: &str = "scorecard.json";

/// Serializes overrides as pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Returns [`ScorecardError::Json`] if serialization fails.
pub fn to_pretty_json(overrides: &Value) -> Result<String, ScorecardError> {
    Ok(serde_json::to_string_pretty(overrides)?)
}

//! Share-link tokens.
//!
//! A token carries a complete overrides tree in a URL-safe string: compact
//! JSON, raw DEFLATE, then unpadded URL-safe base64. Decoding fails open so a
//! mangled link starts from defaults instead of failing.

use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use flate2::{Compression, read::DeflateDecoder, write::DeflateEncoder};
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::ScorecardError;

/// Encodes overrides as a share token.
///
/// # Errors
///
/// Returns an error if serialization or compression fails.
pub fn encode(overrides: &Value) -> Result<String, ScorecardError> {
    let json = serde_json::to_vec(overrides)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    let token = URL_SAFE_NO_PAD.encode(compressed);
    debug!(json_bytes = json.len(), token_len = token.len(); "Encoded share token");
    Ok(token)
}

/// Decodes a share token, returning the underlying failure.
///
/// # Errors
///
/// Returns [`ScorecardError::InvalidConfig`] for malformed base64 or a
/// non-record payload, [`ScorecardError::Io`] if inflation fails, and
/// [`ScorecardError::Json`] if the payload is not JSON.
pub fn try_decode(token: &str) -> Result<Value, ScorecardError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|err| ScorecardError::InvalidConfig(format!("share token: {err}")))?;

    let mut json = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut json)?;

    let overrides: Value = serde_json::from_str(&json)?;
    if !overrides.is_object() {
        return Err(ScorecardError::InvalidConfig(
            "share token does not contain a record".to_string(),
        ));
    }
    Ok(overrides)
}

/// Decodes a share token, falling back to empty overrides on any failure.
pub fn decode(token: &str) -> Value {
    try_decode(token).unwrap_or_else(|err| {
        warn!(err:%; "Ignoring invalid share token");
        Value::Object(Map::new())
    })
}

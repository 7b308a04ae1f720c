//! Scorecard - printable baseball scorecards from sparse configuration.
//!
//! A scorecard is described by a configuration tree. The canonical defaults
//! supply every field; a user's edits are kept as a sparse *overrides* tree
//! and merged on top to produce the *effective* configuration, which renders
//! to a self-contained HTML document ready to print.
//!
//! # Overview
//!
//! - [`compose`] - merge, diff and path addressing of configuration trees
//! - [`defaults`] - the embedded defaults tree
//! - [`layout`] - print-fit estimation
//! - [`export`] - HTML rendering and overrides export
//! - [`session`] - an editing session that persists through a [`store`]
//! - [`preset`] - built-in themes
//! - [`share`] - compact share-link tokens
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let overrides = json!({"name": "Game 7", "grid": {"innings": 10}});
//! let html = scorecard::render_html(&overrides).unwrap();
//! assert!(html.contains(r#"<th class="col-inning">10</th>"#));
//! ```

pub mod compose;
pub mod config;
pub mod defaults;
pub mod export;
pub mod layout;
pub mod preset;
pub mod session;
pub mod share;
pub mod store;

mod error;

pub use scorecard_core::{color, geometry, model, palette};

pub use error::ScorecardError;

use log::trace;
use serde_json::Value;

use compose::deep_merge;
use model::ScorecardConfig;

/// Merges `overrides` onto the defaults.
pub fn effective_tree(overrides: &Value) -> Value {
    let effective = deep_merge(defaults::defaults(), overrides);
    trace!(effective:%; "Merged effective configuration");
    effective
}

/// Merges `overrides` onto the defaults and reads the result as typed settings.
///
/// # Errors
///
/// Returns [`ScorecardError::InvalidConfig`] if an override gives a field a
/// shape the configuration does not accept, such as a string row count.
pub fn effective_config(overrides: &Value) -> Result<ScorecardConfig, ScorecardError> {
    serde_json::from_value(effective_tree(overrides))
        .map_err(|err| ScorecardError::InvalidConfig(err.to_string()))
}

/// Renders the HTML document for `overrides` applied to the defaults.
///
/// # Errors
///
/// Returns [`ScorecardError::InvalidConfig`] if the overrides do not fit the
/// configuration shape.
pub fn render_html(overrides: &Value) -> Result<String, ScorecardError> {
    let config = effective_config(overrides)?;
    Ok(export::html::generate_page(&config))
}

//! The canonical defaults tree.
//!
//! Defaults supply a value for every leaf of a scorecard configuration. They
//! are embedded at compile time, parsed once, and never mutated.

use std::sync::LazyLock;

use serde_json::Value;

use scorecard_core::model::ScorecardConfig;

const DEFAULTS_JSON: &str = include_str!("../defaults.json");

static DEFAULTS: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(DEFAULTS_JSON).expect("embedded defaults.json is valid JSON")
});

/// Returns the process-wide defaults tree.
pub fn defaults() -> &'static Value {
    &DEFAULTS
}

/// Returns the defaults as a typed configuration.
pub fn default_config() -> ScorecardConfig {
    serde_json::from_value(DEFAULTS.clone())
        .expect("embedded defaults.json matches the configuration schema")
}

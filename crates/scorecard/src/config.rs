//! Application settings.
//!
//! These configure the tool, not the scorecard: where overrides persist and
//! where output files go. All types implement [`serde::Deserialize`] so they
//! can be loaded from a TOML file, and every field has a default.
//!
//! # Example
//!
//! ```
//! # use scorecard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.storage().key(), "scorecard-overrides");
//! assert_eq!(config.output().export().to_str(), Some("scorecard.json"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::export::json::EXPORT_FILE_NAME;

const DEFAULT_STORE_KEY: &str = "scorecard-overrides";
const DEFAULT_HTML_FILE: &str = "scorecard.html";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Override persistence section.
    #[serde(default)]
    storage: StorageConfig,

    /// Output file section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(storage: StorageConfig, output: OutputConfig) -> Self {
        Self { storage, output }
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Where the live overrides are persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Store directory. When unset the caller picks a platform location.
    #[serde(default)]
    directory: Option<PathBuf>,

    /// Key the overrides are stored under.
    #[serde(default = "default_store_key")]
    key: String,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: None,
            key: default_store_key(),
        }
    }
}

impl StorageConfig {
    pub fn new(directory: Option<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            directory,
            key: key.into(),
        }
    }

    /// Returns the configured store directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Default output file names.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Rendered document path.
    #[serde(default = "default_html_file")]
    html: PathBuf,

    /// Exported overrides path.
    #[serde(default = "default_export_file")]
    export: PathBuf,
}

fn default_html_file() -> PathBuf {
    PathBuf::from(DEFAULT_HTML_FILE)
}

fn default_export_file() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html: default_html_file(),
            export: default_export_file(),
        }
    }
}

impl OutputConfig {
    pub fn html(&self) -> &Path {
        &self.html
    }

    pub fn export(&self) -> &Path {
        &self.export
    }
}

//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and resolving where the overrides store lives.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use scorecard::{ScorecardError, config::AppConfig};

const FALLBACK_STORE_DIR: &str = ".scorecard";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ScorecardError {
    fn from(err: ConfigError) -> Self {
        ScorecardError::ConfigFile(err.to_string())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "scorecard", "scorecard")
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (scorecard/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ScorecardError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("scorecard/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = project_dirs() {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ScorecardError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

/// Resolve the overrides store directory.
///
/// The configured directory wins, then the platform data directory, then a
/// `.scorecard` directory under the working directory.
pub fn store_directory(config: &AppConfig) -> PathBuf {
    if let Some(directory) = config.storage().directory() {
        return directory.to_path_buf();
    }

    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.toml")));
        match result {
            Err(ScorecardError::ConfigFile(message)) => {
                assert!(message.contains("absent.toml"), "{message}");
            }
            other => panic!("expected a configuration file error, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[storage]\ndirectory = \"cards\"\nkey = \"league\"\n\n[output]\nhtml = \"card.html\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.storage().key(), "league");
        assert_eq!(store_directory(&config), PathBuf::from("cards"));
        assert_eq!(config.output().html(), Path::new("card.html"));
        assert_eq!(config.output().export(), Path::new("scorecard.json"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ScorecardError::ConfigFile(_)));
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }
}

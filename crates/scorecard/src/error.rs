//! Error types for scorecard operations.
//!
//! This module provides the main error type [`ScorecardError`], which wraps
//! every failure a caller can observe: malformed external input, rejected
//! path mutations, and storage problems.

use std::io;

use thiserror::Error;

use scorecard_core::color::ColorError;

use crate::{compose::ComposeError, store::StoreError};

/// The main error type for scorecard operations.
///
/// Every variant is a rejection of caller-supplied input or an environment
/// failure; rendering itself never fails.
#[derive(Debug, Error)]
pub enum ScorecardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The application settings file is missing or malformed.
    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown preset `{0}`")]
    UnknownPreset(String),
}

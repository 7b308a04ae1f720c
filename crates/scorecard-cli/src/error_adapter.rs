//! Error adapter for converting ScorecardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use scorecard::{ScorecardError, compose::ComposeError};

/// Adapter giving a [`ScorecardError`] a stable code and, where one helps, a hint.
pub struct ErrorAdapter<'a>(pub &'a ScorecardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ScorecardError::Io(_) => "scorecard::io",
            ScorecardError::Json(_) => "scorecard::json",
            ScorecardError::Compose(_) => "scorecard::path",
            ScorecardError::InvalidConfig(_) => "scorecard::config",
            ScorecardError::ConfigFile(_) => "scorecard::config-file",
            ScorecardError::Color(_) => "scorecard::color",
            ScorecardError::Store(_) => "scorecard::store",
            ScorecardError::UnknownPreset(_) => "scorecard::preset",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ScorecardError::Compose(ComposeError::UnknownPath { .. }) => {
                "paths name fields of the defaults, e.g. `theme.colors.primary`"
            }
            ScorecardError::Compose(ComposeError::NotARecord { .. }) => {
                "arrays and values are set as a whole; address their parent instead"
            }
            ScorecardError::Color(_) => "use a hex color such as `#1f5fa8`",
            ScorecardError::ConfigFile(_) => {
                "check the `--config` path and its TOML syntax; the file takes `[storage]` and `[output]` tables"
            }
            ScorecardError::UnknownPreset(_) => "run `scorecard presets` to list the presets",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = ScorecardError::UnknownPreset("neon".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "scorecard::preset");
        assert!(adapter.help().is_some());
        assert_eq!(adapter.to_string(), "Unknown preset `neon`");
    }

    #[test]
    fn test_no_help_for_io() {
        let err = ScorecardError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "scorecard::io");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_config_file_code_and_help() {
        let err = ScorecardError::ConfigFile("Missing configuration file: card.toml".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "scorecard::config-file");
        assert!(adapter.help().unwrap().to_string().contains("--config"));
        assert!(adapter.to_string().contains("card.toml"));
    }

    #[test]
    fn test_path_help() {
        let err = ScorecardError::Compose(ComposeError::UnknownPath {
            path: "grid.colour".to_string(),
        });
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "scorecard::path");
        assert!(adapter.help().unwrap().to_string().contains("theme.colors.primary"));
    }
}

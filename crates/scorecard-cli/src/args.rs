//! Command-line argument definitions for the scorecard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each [`Command`] maps to one editing or rendering operation.

use clap::{Parser, Subcommand};

/// Command-line arguments for the scorecard tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the scorecard to an HTML file
    Render {
        /// Output path (defaults to the configured HTML path)
        #[arg(short, long)]
        output: Option<String>,

        /// Render these overrides instead of the saved ones
        #[arg(long)]
        overrides: Option<String>,

        /// Render the overrides carried by a share token
        #[arg(long, conflicts_with = "overrides")]
        share: Option<String>,
    },

    /// Set a field by dotted path, e.g. `grid.rows 12`
    Set {
        path: String,
        /// JSON value; anything that is not JSON is taken as a string
        value: String,
    },

    /// Print a field of the effective configuration
    Get { path: String },

    /// Discard every override
    Reset,

    /// Replace the overrides with a JSON file
    Import { file: String },

    /// Write the overrides to a JSON file
    Export {
        /// Output path (defaults to the configured export path)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List built-in presets
    Presets,

    /// Replace the overrides with a preset
    Preset {
        /// Preset slug or name
        name: String,
    },

    /// Derive a theme palette from a primary color
    Palette {
        /// Primary color, e.g. `#1f5fa8`
        primary: String,

        /// Apply the derived palette to the theme
        #[arg(long)]
        apply: bool,
    },

    /// Print a share token for the current overrides
    Share,

    /// Print the current overrides
    Show,
}

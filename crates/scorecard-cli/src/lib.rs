//! CLI logic for the scorecard tool.
//!
//! Each subcommand opens an [`Editor`] over the file-backed overrides store,
//! performs one operation, and reports the result on the given writer.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::info;
use serde_json::Value;

use scorecard::{
    ScorecardError,
    compose::ComposeError,
    config::AppConfig,
    palette::Palette,
    preset,
    session::Editor,
    store::{FileStore, MemoryStore},
};

/// Run the scorecard CLI application
///
/// Informational output (values, listings, tokens) is written to `out`;
/// documents are written to files.
///
/// # Errors
///
/// Returns `ScorecardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON, paths, colors, or preset names
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), ScorecardError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let store_dir = config::store_directory(&app_config);
    info!(store_dir:?; "Opening overrides store");
    let mut editor = Editor::open(FileStore::new(store_dir), app_config.storage().key());

    match &args.command {
        Command::Render {
            output,
            overrides,
            share,
        } => {
            let html = match (overrides, share) {
                (Some(file), _) => {
                    let mut scratch = Editor::open(MemoryStore::new(), "render");
                    scratch.import_json(&fs::read_to_string(file)?)?;
                    scratch.render()?
                }
                (None, Some(token)) => {
                    let mut scratch = Editor::open(MemoryStore::new(), "render");
                    scratch.import_share_token(token);
                    scratch.render()?
                }
                (None, None) => editor.render()?,
            };

            let path = output_path(output.as_deref(), app_config.output().html());
            fs::write(&path, html)?;
            info!(output_file:? = path; "Scorecard rendered");
            writeln!(out, "{}", path.display())?;
        }
        Command::Set { path, value } => {
            editor.update(path, parse_value(value))?;
        }
        Command::Get { path } => {
            let value = editor.get(path)?.ok_or_else(|| ComposeError::UnknownPath {
                path: path.clone(),
            })?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        Command::Reset => editor.reset(),
        Command::Import { file } => {
            editor.import_json(&fs::read_to_string(file)?)?;
        }
        Command::Export { output } => {
            let (_, text) = editor.export()?;
            let path = output_path(output.as_deref(), app_config.output().export());
            fs::write(&path, text)?;
            info!(output_file:? = path; "Overrides exported");
            writeln!(out, "{}", path.display())?;
        }
        Command::Presets => {
            for preset in preset::presets() {
                writeln!(
                    out,
                    "{:<14}{} - {}",
                    preset.slug(),
                    preset.name(),
                    preset.description()
                )?;
            }
        }
        Command::Preset { name } => {
            editor.apply_preset(name)?;
        }
        Command::Palette { primary, apply } => {
            let palette = if *apply {
                editor.apply_primary(primary)?
            } else {
                Palette::derive(primary)?
            };
            for (key, color) in palette.entries() {
                writeln!(out, "{key:<16}{color}")?;
            }
        }
        Command::Share => {
            writeln!(out, "{}", editor.share_token()?)?;
        }
        Command::Show => {
            writeln!(out, "{}", editor.overrides_json()?)?;
        }
    }

    Ok(())
}

/// Parses a command-line value as JSON, falling back to a plain string.
fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn output_path(explicit: Option<&str>, configured: &Path) -> PathBuf {
    explicit.map_or_else(|| configured.to_path_buf(), PathBuf::from)
}

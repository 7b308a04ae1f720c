//! End-to-end tests driving the CLI with a temporary store.

use std::{fs, path::Path};

use clap::Parser;
use tempfile::{TempDir, tempdir};

use scorecard::ScorecardError;
use scorecard_cli::Args;

/// Writes a config file that points the store into `dir`.
fn write_config(dir: &Path) -> String {
    let store = dir.join("store");
    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!("[storage]\ndirectory = {:?}\n", store.display().to_string()),
    )
    .expect("Failed to write config");
    config.display().to_string()
}

struct Session {
    dir: TempDir,
    config: String,
}

impl Session {
    fn new() -> Self {
        let dir = tempdir().expect("Failed to create temp directory");
        let config = write_config(dir.path());
        Self { dir, config }
    }

    fn run(&self, command: &[&str]) -> Result<String, ScorecardError> {
        let mut argv = vec!["scorecard", "--log-level", "off", "--config", self.config.as_str()];
        argv.extend_from_slice(command);
        let args = Args::parse_from(argv);

        let mut out = Vec::new();
        scorecard_cli::run(&args, &mut out)?;
        Ok(String::from_utf8(out).expect("CLI output is UTF-8"))
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }
}

#[test]
fn test_set_get_show() {
    let session = Session::new();
    session.run(&["set", "grid.rows", "12"]).unwrap();
    session.run(&["set", "name", "Home Opener"]).unwrap();

    assert_eq!(session.run(&["get", "grid.rows"]).unwrap().trim(), "12");
    let shown = session.run(&["show"]).unwrap();
    assert!(shown.contains("\"rows\": 12"));
    assert!(shown.contains("\"name\": \"Home Opener\""));

    session.run(&["reset"]).unwrap();
    assert_eq!(session.run(&["show"]).unwrap().trim(), "{}");
}

#[test]
fn test_render_to_file() {
    let session = Session::new();
    session.run(&["set", "pages", "home"]).unwrap();

    let output = session.path("card.html");
    session.run(&["render", "-o", &output]).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches(r#"<div class="print-page">"#).count(), 1);
}

#[test]
fn test_render_with_overrides_file_leaves_store_alone() {
    let session = Session::new();
    let overrides = session.path("overrides.json");
    fs::write(&overrides, r#"{"grid": {"innings": 6}}"#).unwrap();

    let output = session.path("card.html");
    session
        .run(&["render", "-o", &output, "--overrides", &overrides])
        .unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<th class="col-inning">6</th>"#));
    assert!(!html.contains(r#"<th class="col-inning">7</th>"#));
    assert_eq!(session.run(&["show"]).unwrap().trim(), "{}");
}

#[test]
fn test_export_import_roundtrip() {
    let session = Session::new();
    session.run(&["preset", "retro-green"]).unwrap();
    let exported = session.path("exported.json");
    session.run(&["export", "-o", &exported]).unwrap();
    let before = session.run(&["show"]).unwrap();

    session.run(&["reset"]).unwrap();
    session.run(&["import", &exported]).unwrap();
    assert_eq!(session.run(&["show"]).unwrap(), before);
}

#[test]
fn test_share_roundtrip() {
    let session = Session::new();
    session.run(&["set", "cell.count.strikes", "3"]).unwrap();
    let token = session.run(&["share"]).unwrap();

    let output = session.path("shared.html");
    session
        .run(&["render", "-o", &output, "--share", token.trim()])
        .unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<div class="count-box"></div><div class="count-box"></div><div class="count-box"></div></div><div class="count-group"><span class="count-label">B</span>"#));
}

#[test]
fn test_palette_apply() {
    let session = Session::new();
    let printed = session.run(&["palette", "#2e7d32", "--apply"]).unwrap();
    assert_eq!(printed.lines().count(), 11);
    assert!(printed.contains("primary"));
    assert_eq!(
        session.run(&["get", "theme.colors.primary"]).unwrap().trim(),
        "\"#2e7d32\""
    );
}

#[test]
fn test_presets_listing() {
    let session = Session::new();
    let listing = session.run(&["presets"]).unwrap();
    assert_eq!(listing.lines().count(), 4);
    assert!(listing.starts_with("classic-blue"));
}

#[test]
fn test_errors() {
    let session = Session::new();
    assert!(matches!(
        session.run(&["set", "grid.colour", "1"]),
        Err(ScorecardError::Compose(_))
    ));
    assert!(matches!(
        session.run(&["preset", "neon"]),
        Err(ScorecardError::UnknownPreset(_))
    ));
    assert!(matches!(
        session.run(&["palette", "not-a-color"]),
        Err(ScorecardError::Color(_))
    ));

    let bad = session.path("bad.json");
    fs::write(&bad, "{ nope").unwrap();
    assert!(matches!(
        session.run(&["import", &bad]),
        Err(ScorecardError::Json(_))
    ));
}

#[test]
fn test_missing_config_file_is_reported_as_config_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let missing = dir.path().join("nowhere.toml").display().to_string();
    let args = Args::parse_from(["scorecard", "--log-level", "off", "--config", missing.as_str(), "show"]);

    let mut out = Vec::new();
    let err = scorecard_cli::run(&args, &mut out).unwrap_err();
    assert!(matches!(err, ScorecardError::ConfigFile(_)));
    assert!(err.to_string().contains("nowhere.toml"));
}

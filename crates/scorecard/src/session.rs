//! The editing session.
//!
//! An [`Editor`] owns the live overrides and the [`Store`] they persist to.
//! Every operation that changes state validates first and commits second, so
//! a rejected edit or import leaves the previous overrides in place.

use log::{debug, info, trace, warn};
use serde_json::{Map, Value};

use scorecard_core::{model::ScorecardConfig, palette::Palette};

use crate::{
    ScorecardError,
    compose::{ConfigPath, compute_overrides, get_by_path, set_by_path},
    defaults::defaults,
    export::json::{EXPORT_FILE_NAME, to_pretty_json},
    preset::{self, Preset},
    share,
    store::Store,
};

fn empty_overrides() -> Value {
    Value::Object(Map::new())
}

/// A live scorecard configuration backed by a store.
///
/// # Examples
///
/// ```
/// use scorecard::{session::Editor, store::MemoryStore};
/// use serde_json::json;
///
/// let mut editor = Editor::open(MemoryStore::new(), "overrides");
/// editor.update("grid.rows", json!(12)).unwrap();
/// assert_eq!(editor.overrides(), &json!({"grid": {"rows": 12}}));
///
/// editor.update("grid.rows", json!(11)).unwrap();
/// assert_eq!(editor.overrides(), &json!({}));
/// ```
#[derive(Debug)]
pub struct Editor<S: Store> {
    store: S,
    key: String,
    overrides: Value,
}

impl<S: Store> Editor<S> {
    /// Opens a session, loading any overrides persisted under `key`.
    ///
    /// Missing, unreadable, or malformed stored data starts the session from
    /// empty overrides.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let overrides = match store.get(&key) {
            Ok(Some(text)) => match serde_json::from_str::<Value>(&text) {
                Ok(value) if value.is_object() => value,
                Ok(_) => {
                    warn!(key:%; "Stored overrides are not a record, starting from defaults");
                    empty_overrides()
                }
                Err(err) => {
                    warn!(key:%, err:%; "Stored overrides are corrupt, starting from defaults");
                    empty_overrides()
                }
            },
            Ok(None) => empty_overrides(),
            Err(err) => {
                warn!(key:%, err:%; "Cannot read stored overrides, starting from defaults");
                empty_overrides()
            }
        };
        trace!(overrides:%; "Opened session");

        Self {
            store,
            key,
            overrides,
        }
    }

    /// The sparse overrides tree
    pub fn overrides(&self) -> &Value {
        &self.overrides
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Defaults with the overrides merged on top.
    pub fn effective(&self) -> Value {
        crate::effective_tree(&self.overrides)
    }

    /// The effective configuration as typed settings.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::InvalidConfig`] if the overrides give a field
    /// the wrong shape.
    pub fn config(&self) -> Result<ScorecardConfig, ScorecardError> {
        crate::effective_config(&self.overrides)
    }

    /// Reads a field of the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is malformed.
    pub fn get(&self, path: &str) -> Result<Option<Value>, ScorecardError> {
        let path: ConfigPath = path.parse()?;
        Ok(get_by_path(&self.effective(), &path).cloned())
    }

    /// Sets a field and recomputes the minimal overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not name a default field, crosses a
    /// non-record value, or the new value gives the field the wrong shape.
    pub fn update(&mut self, path: &str, value: Value) -> Result<(), ScorecardError> {
        let path: ConfigPath = path.parse()?;
        path.validate(defaults())?;

        let updated = set_by_path(&self.effective(), &path, value)?;
        let overrides = compute_overrides(&updated, defaults()).unwrap_or_else(empty_overrides);
        crate::effective_config(&overrides)?;

        info!(path:%; "Updated configuration");
        self.commit(overrides);
        Ok(())
    }

    /// Drops every override.
    pub fn reset(&mut self) {
        info!("Reset configuration to defaults");
        self.commit(empty_overrides());
    }

    /// Replaces the overrides with a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::Json`] if `text` is not JSON, and
    /// [`ScorecardError::InvalidConfig`] if it is not a record or does not fit
    /// the configuration shape. The current overrides are kept on error.
    pub fn import_json(&mut self, text: &str) -> Result<(), ScorecardError> {
        let overrides: Value = serde_json::from_str(text)?;
        if !overrides.is_object() {
            return Err(ScorecardError::InvalidConfig(
                "imported overrides must be a JSON object".to_string(),
            ));
        }
        crate::effective_config(&overrides)?;

        info!("Imported overrides");
        self.commit(overrides);
        Ok(())
    }

    /// The overrides as pretty-printed JSON.
    pub fn overrides_json(&self) -> Result<String, ScorecardError> {
        to_pretty_json(&self.overrides)
    }

    /// The download file name and contents for the current overrides.
    pub fn export(&self) -> Result<(&'static str, String), ScorecardError> {
        Ok((EXPORT_FILE_NAME, self.overrides_json()?))
    }

    /// Replaces the overrides with a preset's.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::UnknownPreset`] if no preset matches.
    pub fn apply_preset(&mut self, query: &str) -> Result<&'static Preset, ScorecardError> {
        let preset =
            preset::find(query).ok_or_else(|| ScorecardError::UnknownPreset(query.to_string()))?;

        info!(preset = preset.slug(); "Applied preset");
        self.commit(preset.overrides().clone());
        Ok(preset)
    }

    /// Derives a palette from `primary` and applies it to every theme color.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::Color`] if `primary` is not a color.
    pub fn apply_primary(&mut self, primary: &str) -> Result<Palette, ScorecardError> {
        let palette = Palette::derive(primary)?;
        self.update("theme.colors", serde_json::to_value(&palette)?)?;
        Ok(palette)
    }

    /// Encodes the overrides as a share token.
    pub fn share_token(&self) -> Result<String, ScorecardError> {
        share::encode(&self.overrides)
    }

    /// Replaces the overrides with those carried by a share token.
    ///
    /// An unreadable token or one that does not fit the configuration shape
    /// resets to defaults.
    pub fn import_share_token(&mut self, token: &str) {
        let overrides = share::decode(token);
        let overrides = match crate::effective_config(&overrides) {
            Ok(_) => overrides,
            Err(err) => {
                warn!(err:%; "Shared overrides do not fit the configuration, ignoring");
                empty_overrides()
            }
        };

        info!("Imported shared overrides");
        self.commit(overrides);
    }

    /// Renders the effective configuration to HTML.
    pub fn render(&self) -> Result<String, ScorecardError> {
        crate::render_html(&self.overrides)
    }

    fn commit(&mut self, overrides: Value) {
        trace!(overrides:%; "Committing overrides");
        self.overrides = overrides;

        let text = self.overrides.to_string();
        match self.store.set(&self.key, &text) {
            Ok(()) => debug!(key = self.key.as_str(), bytes = text.len(); "Persisted overrides"),
            Err(err) => warn!(key = self.key.as_str(), err:%; "Failed to persist overrides"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{compose::ComposeError, store::MemoryStore};

    fn editor() -> Editor<MemoryStore> {
        Editor::open(MemoryStore::new(), "test")
    }

    #[test]
    fn test_update_keeps_overrides_minimal() {
        let mut editor = editor();
        editor.update("theme.colors.primary", json!("#ff0000")).unwrap();
        assert_eq!(
            editor.overrides(),
            &json!({ "theme": { "colors": { "primary": "#ff0000" } } })
        );
        assert_eq!(
            editor.get("theme.colors.primary").unwrap(),
            Some(json!("#ff0000"))
        );
    }

    #[test]
    fn test_update_rejects_unknown_path() {
        let mut editor = editor();
        let err = editor.update("grid.colour", json!(1)).unwrap_err();
        assert!(matches!(
            err,
            ScorecardError::Compose(ComposeError::UnknownPath { .. })
        ));
        assert_eq!(editor.overrides(), &json!({}));
    }

    #[test]
    fn test_update_rejects_wrong_shape() {
        let mut editor = editor();
        editor.update("grid.rows", json!(8)).unwrap();
        let err = editor.update("grid.rows", json!("eight")).unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidConfig(_)));
        assert_eq!(editor.overrides(), &json!({ "grid": { "rows": 8 } }));
    }

    #[test]
    fn test_array_is_replaced_whole() {
        let mut editor = editor();
        editor
            .update("cell.outcomes.items", json!(["1B", "HR"]))
            .unwrap();
        assert_eq!(
            editor.overrides(),
            &json!({ "cell": { "outcomes": { "items": ["1B", "HR"] } } })
        );
    }

    #[test]
    fn test_import_errors_keep_state() {
        let mut editor = editor();
        editor.import_json(r#"{"name": "Kept"}"#).unwrap();

        assert!(matches!(
            editor.import_json("{not json"),
            Err(ScorecardError::Json(_))
        ));
        assert!(matches!(
            editor.import_json("[1, 2]"),
            Err(ScorecardError::InvalidConfig(_))
        ));
        assert!(matches!(
            editor.import_json(r#"{"grid": {"rows": "many"}}"#),
            Err(ScorecardError::InvalidConfig(_))
        ));
        assert_eq!(editor.overrides(), &json!({ "name": "Kept" }));
    }

    #[test]
    fn test_mutations_persist() {
        let mut editor = editor();
        editor.update("name", json!("Persisted")).unwrap();
        let stored = editor.store().get("test").unwrap().unwrap();
        assert_eq!(stored, r#"{"name":"Persisted"}"#);

        editor.reset();
        assert_eq!(editor.store().get("test").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_corrupt_store_starts_empty() {
        let mut store = MemoryStore::new();
        store.set("test", "{oops").unwrap();
        let editor = Editor::open(store, "test");
        assert_eq!(editor.overrides(), &json!({}));
    }

    #[test]
    fn test_apply_primary_derives_all_colors() {
        let mut editor = editor();
        let palette = editor.apply_primary("#2e7d32").unwrap();
        let config = editor.config().unwrap();
        assert_eq!(config.theme().colors().primary(), palette.primary());
        assert_eq!(config.theme().colors().ink(), palette.ink());
    }

    #[test]
    fn test_apply_primary_stores_normalized_hex() {
        let mut editor = editor();
        editor.apply_primary(" Red ").unwrap();
        assert_eq!(
            editor.get("theme.colors.primary").unwrap(),
            Some(json!("#ff0000"))
        );
    }

    #[test]
    fn test_apply_unknown_preset() {
        let mut editor = editor();
        editor.update("name", json!("Kept")).unwrap();
        assert!(matches!(
            editor.apply_preset("neon"),
            Err(ScorecardError::UnknownPreset(_))
        ));
        assert_eq!(editor.overrides(), &json!({ "name": "Kept" }));
    }
}

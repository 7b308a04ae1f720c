//! Dotted-path addressing of configuration fields.
//!
//! Editors address fields with dotted paths such as `theme.colors.primary` or
//! `grid.statColumns`. A [`ConfigPath`] is the parsed, non-empty form of such
//! a path. Arrays are addressed as a whole; there is no index syntax.

use std::{fmt, str::FromStr};

use serde_json::{Map, Value};

use super::ComposeError;

/// A parsed dotted path into a configuration tree.
///
/// # Examples
///
/// ```
/// use scorecard::compose::ConfigPath;
///
/// let path: ConfigPath = "theme.colors.primary".parse().unwrap();
/// assert_eq!(path.segments(), ["theme", "colors", "primary"]);
/// assert_eq!(path.to_string(), "theme.colors.primary");
///
/// assert!("theme..primary".parse::<ConfigPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Returns the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Checks that the path names an existing field of `schema`.
    ///
    /// Every segment must be a key of a record; a path may stop at a record,
    /// an array, or a scalar, but may not continue past a non-record.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnknownPath`] when a segment is not a key, or
    /// [`ComposeError::NotARecord`] when the path continues past a leaf.
    pub fn validate(&self, schema: &Value) -> Result<(), ComposeError> {
        let mut node = schema;
        for (depth, segment) in self.segments.iter().enumerate() {
            let Value::Object(map) = node else {
                return Err(self.not_a_record(depth));
            };
            node = map.get(segment).ok_or_else(|| ComposeError::UnknownPath {
                path: self.to_string(),
            })?;
        }
        Ok(())
    }

    fn not_a_record(&self, depth: usize) -> ComposeError {
        let segment = if depth == 0 {
            "(root)".to_string()
        } else {
            self.segments[..depth].join(".")
        };
        ComposeError::NotARecord {
            path: self.to_string(),
            segment,
        }
    }
}

impl FromStr for ConfigPath {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ComposeError::EmptyPath);
        }

        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ComposeError::EmptySegment { path: s.to_string() });
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Returns the value at `path`, or `None` if any segment is missing.
pub fn get_by_path<'a>(tree: &'a Value, path: &ConfigPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Returns a copy of `tree` with the field at `path` set to `value`.
///
/// Only the records along the path are copied; missing intermediate records
/// are created.
///
/// # Errors
///
/// Returns [`ComposeError::NotARecord`] if an intermediate segment holds a
/// value that is not a record. The input is never modified.
///
/// # Examples
///
/// ```
/// use scorecard::compose::{set_by_path, ConfigPath};
/// use serde_json::json;
///
/// let tree = json!({"a": {"b": 1, "c": 2}});
/// let path: ConfigPath = "a.b".parse().unwrap();
///
/// let updated = set_by_path(&tree, &path, json!(99)).unwrap();
/// assert_eq!(updated, json!({"a": {"b": 99, "c": 2}}));
/// assert_eq!(tree, json!({"a": {"b": 1, "c": 2}}));
/// ```
pub fn set_by_path(tree: &Value, path: &ConfigPath, value: Value) -> Result<Value, ComposeError> {
    set_at(Some(tree), path, 0, value)
}

fn set_at(
    node: Option<&Value>,
    path: &ConfigPath,
    depth: usize,
    value: Value,
) -> Result<Value, ComposeError> {
    let Some(segment) = path.segments().get(depth) else {
        return Ok(value);
    };

    let mut map = match node {
        Some(Value::Object(map)) => map.clone(),
        None => Map::new(),
        Some(_) => return Err(path.not_a_record(depth)),
    };

    let child = set_at(map.get(segment), path, depth + 1, value)?;
    map.insert(segment.clone(), child);
    Ok(Value::Object(map))
}

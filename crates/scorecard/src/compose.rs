//! Configuration composition.
//!
//! A scorecard configuration is a tree of JSON values. The live state is kept
//! as a sparse *overrides* tree on top of the canonical defaults; the
//! *effective* configuration is their merge. This module provides the three
//! tree operations that move between those representations:
//!
//! - [`deep_merge`] - lay a patch over a base tree
//! - [`compute_overrides`] - the minimal patch that turns defaults into a tree
//! - [`set_by_path`] / [`get_by_path`] - address a single field by [`ConfigPath`]
//!
//! All operations take their inputs by reference and return new trees.
//!
//! # Round-trip law
//!
//! For any defaults `D` and any overrides `O` without redundant branches:
//!
//! ```
//! use scorecard::compose::{compute_overrides, deep_merge};
//! use serde_json::json;
//!
//! let defaults = json!({"a": 1, "b": {"c": 2, "d": 3}, "e": [1, 2]});
//! let overrides = json!({"b": {"c": 99}, "e": [3]});
//!
//! let effective = deep_merge(&defaults, &overrides);
//! assert_eq!(compute_overrides(&effective, &defaults), Some(overrides));
//! assert_eq!(deep_merge(&defaults, &json!({})), defaults);
//! ```

mod diff;
mod merge;
mod path;

pub use diff::compute_overrides;
pub use merge::deep_merge;
pub use path::{ConfigPath, get_by_path, set_by_path};

use thiserror::Error;

/// Errors raised while addressing or mutating a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("configuration path is empty")]
    EmptyPath,

    #[error("configuration path `{path}` has an empty segment")]
    EmptySegment { path: String },

    #[error("unknown configuration path `{path}`")]
    UnknownPath { path: String },

    #[error("cannot set `{path}`: `{segment}` is not a record")]
    NotARecord { path: String, segment: String },
}

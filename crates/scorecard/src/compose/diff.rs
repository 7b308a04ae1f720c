//! Minimal override computation.

use serde_json::{Map, Value};

/// Computes the sparse overrides that turn `defaults` into `config`.
///
/// Returns `None` when there is no difference. Records are compared key by key
/// over `config`'s keys only, so keys removed relative to `defaults` are not
/// represented. Arrays and scalars are compared by deep equality and returned
/// whole when they differ. A record whose children all match yields `None`,
/// never an empty record.
///
/// This is the inverse of [`deep_merge`](super::deep_merge): for overrides `O`
/// with no branches equal to the defaults,
/// `compute_overrides(&deep_merge(&d, &o), &d) == Some(o)`.
///
/// # Examples
///
/// ```
/// use scorecard::compose::compute_overrides;
/// use serde_json::json;
///
/// let defaults = json!({"a": 1, "b": 2, "c": [1, 2]});
/// assert_eq!(compute_overrides(&json!({"a": 1, "b": 99, "c": [1, 2]}), &defaults), Some(json!({"b": 99})));
/// assert_eq!(compute_overrides(&defaults, &defaults), None);
/// ```
pub fn compute_overrides(config: &Value, defaults: &Value) -> Option<Value> {
    match (config, defaults) {
        (Value::Object(config_map), Value::Object(defaults_map)) => {
            let diff: Map<String, Value> = config_map
                .iter()
                .filter_map(|(key, value)| {
                    let sub = match defaults_map.get(key) {
                        Some(default) => compute_overrides(value, default),
                        None => Some(value.clone()),
                    };
                    sub.map(|sub| (key.clone(), sub))
                })
                .collect();

            (!diff.is_empty()).then_some(Value::Object(diff))
        }
        _ if config == defaults => None,
        _ => Some(config.clone()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_same_tree_has_no_difference() {
        let tree = json!({"a": 1});
        assert_eq!(compute_overrides(&tree, &tree), None);
    }

    #[test]
    fn test_deep_equal_trees_have_no_difference() {
        let defaults = json!({"a": 1, "b": {"c": 2}});
        let config = json!({"a": 1, "b": {"c": 2}});
        assert_eq!(compute_overrides(&config, &defaults), None);
    }

    #[test]
    fn test_returns_only_changed_fields() {
        let defaults = json!({"a": 1, "b": 2, "c": 3});
        let config = json!({"a": 1, "b": 99, "c": 3});
        assert_eq!(compute_overrides(&config, &defaults), Some(json!({"b": 99})));
    }

    #[test]
    fn test_nested_changes() {
        let defaults = json!({"theme": {"colors": {"primary": "blue", "ink": "black"}}});
        let config = json!({"theme": {"colors": {"primary": "red", "ink": "black"}}});
        assert_eq!(
            compute_overrides(&config, &defaults),
            Some(json!({"theme": {"colors": {"primary": "red"}}}))
        );
    }

    #[test]
    fn test_identical_arrays() {
        let defaults = json!({"items": [1, 2, 3]});
        let config = json!({"items": [1, 2, 3]});
        assert_eq!(compute_overrides(&config, &defaults), None);
    }

    #[test]
    fn test_changed_arrays_are_returned_whole() {
        let defaults = json!({"items": [{"key": "ab", "label": "AB"}, {"key": "r", "label": "R"}]});
        let config = json!({"items": [{"key": "ab", "label": "AB"}, {"key": "r", "label": "Runs"}]});
        assert_eq!(compute_overrides(&config, &defaults), Some(config.clone()));
    }

    #[test]
    fn test_keys_missing_from_defaults_are_returned_whole() {
        let defaults = json!({"a": 1});
        let config = json!({"a": 1, "extra": {"x": 1}});
        assert_eq!(
            compute_overrides(&config, &defaults),
            Some(json!({"extra": {"x": 1}}))
        );
    }

    #[test]
    fn test_removed_keys_are_not_represented() {
        let defaults = json!({"a": 1, "b": 2});
        let config = json!({"a": 1});
        assert_eq!(compute_overrides(&config, &defaults), None);
    }

    #[test]
    fn test_record_replacing_scalar_is_returned_whole() {
        let defaults = json!({"a": "flat"});
        let config = json!({"a": {}});
        assert_eq!(compute_overrides(&config, &defaults), Some(json!({"a": {}})));
    }
}

//! Structural merge of configuration trees.

use serde_json::Value;

/// Merges `patch` onto `base`, returning a new tree.
///
/// For each key in `patch`, when both sides hold records the merge recurses;
/// otherwise the patch value replaces the base value wholesale. Arrays are
/// never merged element-wise. Keys only present in `base` are kept. A non-record
/// `patch` replaces `base` entirely.
///
/// # Examples
///
/// ```
/// use scorecard::compose::deep_merge;
/// use serde_json::json;
///
/// let base = json!({"theme": {"colors": {"primary": "blue", "ink": "black"}}, "items": [1, 2, 3]});
/// let patch = json!({"theme": {"colors": {"primary": "red"}}, "items": [4]});
///
/// assert_eq!(
///     deep_merge(&base, &patch),
///     json!({"theme": {"colors": {"primary": "red", "ink": "black"}}, "items": [4]}),
/// );
/// ```
pub fn deep_merge(base: &Value, patch: &Value) -> Value {
    let (Value::Object(base_map), Value::Object(patch_map)) = (base, patch) else {
        return patch.clone();
    };

    let mut merged = base_map.clone();
    for (key, patch_value) in patch_map {
        let value = match (merged.get(key), patch_value) {
            (Some(base_value @ Value::Object(_)), Value::Object(_)) => {
                deep_merge(base_value, patch_value)
            }
            _ => patch_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    Value::Object(merged)
}

//! Read-only path lookup.

use serde_json::Value;

use crate::{Path, PathStep};

/// Borrow the value at `path` inside `value`.
///
/// Returns `None` when any step cannot be resolved: a missing key, an
/// out-of-range index, or traversal into a scalar. The empty path borrows the
/// root.
///
/// # Example
///
/// ```
/// use immutable_path::{get, Path};
/// use serde_json::json;
///
/// let doc = json!({"item": {"quantity": 4}});
/// assert_eq!(get(&doc, &Path::parse("item.quantity")), Some(&json!(4)));
/// assert_eq!(get(&doc, &Path::parse("item.missing")), None);
/// ```
pub fn get<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = value;
    for step in path.steps() {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(map)) => map.get(key)?,
            (PathStep::Index(index), Value::Object(map)) => map.get(&index.to_string())?,
            (PathStep::Index(index), Value::Array(arr)) => arr.get(*index)?,
            (PathStep::Key(key), Value::Array(arr)) => arr.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

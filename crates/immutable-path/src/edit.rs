//! Immutable set and unset.
//!
//! Both operations leave their input untouched and return a new top-level
//! value with the edit applied.

use serde_json::{Map, Value};

use crate::{Path, PathError, PathStep};

/// Return a new value equal to `value` with the location at `path` replaced
/// by `new_value`.
///
/// The empty path replaces the whole value. Missing object keys along the
/// path are created as empty objects. An array index `< len` replaces the
/// element, `== len` appends, anything larger is [`PathError::InvalidIndex`].
/// Traversing a scalar is [`PathError::NotTraversable`].
///
/// # Example
///
/// ```
/// use immutable_path::{set, Path};
/// use serde_json::json;
///
/// let doc = json!({"quantity": 4, "unitPrice": 12.3});
/// let next = set(&doc, &Path::parse("quantity"), json!(5)).unwrap();
/// assert_eq!(next, json!({"quantity": 5, "unitPrice": 12.3}));
/// assert_eq!(doc, json!({"quantity": 4, "unitPrice": 12.3}));
/// ```
pub fn set(value: &Value, path: &Path, new_value: Value) -> Result<Value, PathError> {
    let Some((leaf, parents)) = path.steps().split_last() else {
        return Ok(new_value);
    };
    let mut next = value.clone();
    place_at(&mut next, parents, leaf, new_value)?;
    Ok(next)
}

/// Return a new value equal to `value` with the key or element at `path`
/// removed entirely.
///
/// The key is absent afterwards, not present-with-null. Removing an already
/// missing location is a no-op returning an unchanged copy. The empty path is
/// [`PathError::NoParent`]; traversing a scalar is
/// [`PathError::NotTraversable`].
///
/// # Example
///
/// ```
/// use immutable_path::{unset, Path};
/// use serde_json::json;
///
/// let doc = json!({"quantity": 4, "unitPrice": 12.3});
/// let next = unset(&doc, &Path::parse("unitPrice")).unwrap();
/// assert_eq!(next, json!({"quantity": 4}));
/// ```
pub fn unset(value: &Value, path: &Path) -> Result<Value, PathError> {
    let Some((leaf, parents)) = path.steps().split_last() else {
        return Err(PathError::NoParent);
    };
    let mut next = value.clone();
    remove_at(&mut next, parents, leaf)?;
    Ok(next)
}

// ── In-place editors over the cloned value ───────────────────────────────

fn place_at(
    mut current: &mut Value,
    parents: &[PathStep],
    leaf: &PathStep,
    new_value: Value,
) -> Result<(), PathError> {
    for step in parents {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(map)) => map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            (PathStep::Index(index), Value::Object(map)) => map
                .entry(index.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            (PathStep::Index(index), Value::Array(arr)) => {
                arr.get_mut(*index).ok_or(PathError::InvalidIndex)?
            }
            (PathStep::Key(key), Value::Array(arr)) => {
                let index: usize = key.parse().map_err(|_| PathError::InvalidIndex)?;
                arr.get_mut(index).ok_or(PathError::InvalidIndex)?
            }
            _ => return Err(PathError::NotTraversable),
        };
    }
    match (leaf, current) {
        (PathStep::Key(key), Value::Object(map)) => {
            map.insert(key.clone(), new_value);
        }
        (PathStep::Index(index), Value::Object(map)) => {
            map.insert(index.to_string(), new_value);
        }
        (step, Value::Array(arr)) => {
            let index = array_index(step)?;
            if index < arr.len() {
                arr[index] = new_value;
            } else if index == arr.len() {
                arr.push(new_value);
            } else {
                return Err(PathError::InvalidIndex);
            }
        }
        _ => return Err(PathError::NotTraversable),
    }
    Ok(())
}

fn remove_at(
    mut current: &mut Value,
    parents: &[PathStep],
    leaf: &PathStep,
) -> Result<(), PathError> {
    for step in parents {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(map)) => match map.get_mut(key) {
                Some(next) => next,
                None => return Ok(()),
            },
            (PathStep::Index(index), Value::Object(map)) => {
                match map.get_mut(&index.to_string()) {
                    Some(next) => next,
                    None => return Ok(()),
                }
            }
            (PathStep::Index(index), Value::Array(arr)) => match arr.get_mut(*index) {
                Some(next) => next,
                None => return Ok(()),
            },
            (PathStep::Key(key), Value::Array(arr)) => {
                let index: usize = key.parse().map_err(|_| PathError::InvalidIndex)?;
                match arr.get_mut(index) {
                    Some(next) => next,
                    None => return Ok(()),
                }
            }
            _ => return Err(PathError::NotTraversable),
        };
    }
    match (leaf, current) {
        (PathStep::Key(key), Value::Object(map)) => {
            map.remove(key);
        }
        (PathStep::Index(index), Value::Object(map)) => {
            map.remove(&index.to_string());
        }
        (step, Value::Array(arr)) => {
            let index = array_index(step)?;
            if index < arr.len() {
                arr.remove(index);
            }
        }
        _ => return Err(PathError::NotTraversable),
    }
    Ok(())
}

fn array_index(step: &PathStep) -> Result<usize, PathError> {
    match step {
        PathStep::Index(index) => Ok(*index),
        PathStep::Key(key) => key.parse().map_err(|_| PathError::InvalidIndex),
    }
}

//! Path access and mutation for nested documents.

use serde_json::{Map, Value};

use crate::numeric::add_values;
use crate::MapError;

/// Get a reference to the value at `path`.
///
/// Objects descend by key and arrays by decimal index; any miss, or a step
/// into a scalar, yields `None`. The empty path is the document itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::get_nested;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// assert_eq!(get_nested(&doc, &["a", "b", "1"]), Some(&json!(20)));
/// assert_eq!(get_nested(&doc, &["a", "x"]), None);
/// assert_eq!(get_nested(&doc, &[]), Some(&doc));
/// ```
pub fn get_nested<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        match current {
            Value::Object(map) => current = map.get(*step)?,
            Value::Array(items) => {
                let index: usize = step.parse().ok()?;
                current = items.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to the value at `path`.
///
/// Traversal rules match [`get_nested`].
pub fn get_nested_mut<'a>(doc: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in path {
        match current {
            Value::Object(map) => current = map.get_mut(*step)?,
            Value::Array(items) => {
                let index: usize = step.parse().ok()?;
                current = items.get_mut(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Whether a value exists at `path`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::contains_nested;
///
/// let doc = json!({"a": {"b": 7}});
/// assert!(contains_nested(&doc, &["a", "b"]));
/// assert!(!contains_nested(&doc, &["a", "c"]));
/// ```
pub fn contains_nested(doc: &Value, path: &[&str]) -> bool {
    get_nested(doc, path).is_some()
}

/// Resolve a path where every step lists alternative keys.
///
/// Alternatives are tried in order, descending into deeper steps before
/// falling back to the next alternative, so the first complete branch wins.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::get_nested_alt;
///
/// let doc = json!({"report": {"total": 19}});
/// let path: &[&[&str]] = &[&["summary", "report"], &["count", "total"]];
/// assert_eq!(get_nested_alt(&doc, path), Some(&json!(19)));
/// ```
pub fn get_nested_alt<'a>(doc: &'a Value, steps: &[&[&str]]) -> Option<&'a Value> {
    let (first, rest) = match steps.split_first() {
        Some(split) => split,
        None => return Some(doc),
    };
    for key in *first {
        if let Some(next) = get_nested(doc, &[key]) {
            if let Some(found) = get_nested_alt(next, rest) {
                return Some(found);
            }
        }
    }
    None
}

/// Whether [`get_nested_alt`] resolves for `steps`.
pub fn contains_nested_alt(doc: &Value, steps: &[&[&str]]) -> bool {
    get_nested_alt(doc, steps).is_some()
}

/// Set the value at `path`, creating missing intermediate objects.
///
/// # Errors
///
/// - [`MapError::EmptyPath`] for an empty path
/// - [`MapError::NotAnObject`] when a step lands on an existing non-object
///   value (arrays are not created or descended here)
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::put_nested;
///
/// let mut doc = json!({"a": {"b": 7}});
/// put_nested(&mut doc, &["a", "c", "d"], json!(1))?;
/// assert_eq!(doc, json!({"a": {"b": 7, "c": {"d": 1}}}));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn put_nested(doc: &mut Value, path: &[&str], value: Value) -> Result<(), MapError> {
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => return Err(MapError::EmptyPath),
    };
    let mut current = doc;
    for step in parents {
        let map = match current {
            Value::Object(map) => map,
            _ => {
                return Err(MapError::NotAnObject {
                    step: (*step).to_owned(),
                })
            }
        };
        current = map
            .entry((*step).to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    match current {
        Value::Object(map) => {
            map.insert((*last).to_owned(), value);
            Ok(())
        }
        _ => Err(MapError::NotAnObject {
            step: (*last).to_owned(),
        }),
    }
}

/// Add `by` to the number at `path`, treating a missing value as zero and
/// creating intermediate objects as needed.
///
/// Integer additions that overflow `i64` continue in floating point.
///
/// # Errors
///
/// - [`MapError::NotANumber`] when the existing value is not numeric
/// - everything [`put_nested`] produces
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::increment_nested;
///
/// let mut doc = json!({"a": {"b": 5}});
/// increment_nested(&mut doc, &["a", "b"], 12)?;
/// increment_nested(&mut doc, &["a", "z"], 17)?;
/// assert_eq!(doc, json!({"a": {"b": 17, "z": 17}}));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn increment_nested(doc: &mut Value, path: &[&str], by: i64) -> Result<(), MapError> {
    let next = match get_nested(doc, path) {
        Some(existing) => {
            add_values(existing, &Value::from(by)).ok_or_else(|| MapError::NotANumber {
                key: path.join("."),
            })?
        }
        None => Value::from(by),
    };
    put_nested(doc, path, next)
}

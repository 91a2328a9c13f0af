//! Key selection helpers.

use serde_json::{Map, Value};

/// First value among `keys` present in `map`, in candidate order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::first_value;
///
/// let doc = json!({"fallback": 2, "preferred": 1});
/// let map = doc.as_object().unwrap();
/// assert_eq!(first_value(map, &["preferred", "fallback"]), Some(&json!(1)));
/// assert_eq!(first_value(map, &["missing", "fallback"]), Some(&json!(2)));
/// assert_eq!(first_value(map, &["missing"]), None);
/// ```
pub fn first_value<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

/// Whether any of `keys` is present in `map`.
pub fn contains_any_key(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| map.contains_key(*key))
}

/// Copy of `map` restricted to `keys`; missing keys are skipped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::submap_by_keys;
///
/// let doc = json!({"a": 1, "b": 2, "c": 3});
/// let sub = submap_by_keys(doc.as_object().unwrap(), &["c", "a", "x"]);
/// assert_eq!(serde_json::Value::Object(sub), json!({"c": 3, "a": 1}));
/// ```
pub fn submap_by_keys(map: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for key in keys {
        if let Some(value) = map.get(*key) {
            out.insert((*key).to_owned(), value.clone());
        }
    }
    out
}

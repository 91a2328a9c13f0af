//! Flattening nested documents into single-level maps.

use serde_json::{Map, Value};

/// Flatten a nested object into a single-level map keyed by joined paths.
///
/// Objects recurse by key and arrays by decimal index; strings and other
/// scalars are leaves. Empty containers contribute nothing. When a joined
/// path collides with another key, the later entry wins.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::flatten;
///
/// let doc = json!({"a": 1, "b": {"g": 4}, "x": [18, 23]});
/// let flat = flatten(doc.as_object().unwrap(), ".");
/// assert_eq!(
///     serde_json::Value::Object(flat),
///     json!({"a": 1, "b.g": 4, "x.0": 18, "x.1": 23})
/// );
/// ```
pub fn flatten(map: &Map<String, Value>, separator: &str) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_object(&mut out, map, separator, "");
    out
}

fn flatten_object(
    out: &mut Map<String, Value>,
    map: &Map<String, Value>,
    separator: &str,
    prefix: &str,
) {
    for (key, value) in map {
        flatten_value(out, value, separator, join_key(prefix, key, separator));
    }
}

fn flatten_value(out: &mut Map<String, Value>, value: &Value, separator: &str, path: String) {
    match value {
        Value::Object(inner) => flatten_object(out, inner, separator, &path),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let child = join_key(&path, &index.to_string(), separator);
                flatten_value(out, item, separator, child);
            }
        }
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}

fn join_key(prefix: &str, key: &str, separator: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}

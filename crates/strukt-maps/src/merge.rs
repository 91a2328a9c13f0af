//! Shallow and deep map merging.

use serde_json::{Map, Value};

/// Shallow union of maps; later maps win on shared keys.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::unite_maps;
///
/// let a = json!({"x": 1, "y": 1});
/// let b = json!({"y": 2});
/// let united = unite_maps(&[a.as_object().unwrap(), b.as_object().unwrap()]);
/// assert_eq!(united["x"], json!(1));
/// assert_eq!(united["y"], json!(2));
/// ```
pub fn unite_maps(maps: &[&Map<String, Value>]) -> Map<String, Value> {
    let mut out = Map::new();
    for map in maps {
        for (key, value) in map.iter() {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

/// Recursive merge of `priority` over `base`.
///
/// Where both sides are objects their keys unite and shared keys merge
/// recursively; anywhere else the priority side wins, so priority leaves
/// always survive.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::deep_merge;
///
/// let base = json!({"a": {"x": 1, "y": 2}, "keep": true});
/// let priority = json!({"a": {"y": 20, "z": 30}});
/// assert_eq!(
///     deep_merge(&base, &priority),
///     json!({"a": {"x": 1, "y": 20, "z": 30}, "keep": true})
/// );
/// ```
pub fn deep_merge(base: &Value, priority: &Value) -> Value {
    match (base, priority) {
        (Value::Object(base_map), Value::Object(priority_map)) => {
            let mut out = base_map.clone();
            for (key, value) in priority_map {
                let merged = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ => priority.clone(),
    }
}

//! Map reversal: values become keys.

use serde_json::{Map, Value};

use crate::MapError;

/// Reverse a map of scalar values into value token to sorted key list.
///
/// Value tokens are the JSON renderings of the scalars: `1`, `2.5`, `true`,
/// `null`, and the raw text of strings.
///
/// # Errors
///
/// [`MapError::UnkeyableValue`] for object or array values.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::reverse_map;
///
/// let doc = json!({"c": 1, "a": 2, "b": 1});
/// let reversed = reverse_map(doc.as_object().unwrap())?;
/// assert_eq!(reversed["1"], json!(["b", "c"]));
/// assert_eq!(reversed["2"], json!(["a"]));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn reverse_map(map: &Map<String, Value>) -> Result<Map<String, Value>, MapError> {
    let mut out = Map::new();
    for (key, value) in map {
        let bucket = out
            .entry(scalar_token(value)?)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(keys) = bucket {
            keys.push(Value::from(key.as_str()));
        }
    }
    for bucket in out.values_mut() {
        if let Value::Array(keys) = bucket {
            keys.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
        }
    }
    Ok(out)
}

/// Reverse a map keeping one key per value token; later keys win.
///
/// # Errors
///
/// [`MapError::UnkeyableValue`] for object or array values.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::reverse_map_partial;
///
/// let doc = json!({"c": 1, "a": 2, "b": 1});
/// let reversed = reverse_map_partial(doc.as_object().unwrap())?;
/// assert_eq!(reversed["1"], json!("b"));
/// assert_eq!(reversed["2"], json!("a"));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn reverse_map_partial(map: &Map<String, Value>) -> Result<Map<String, Value>, MapError> {
    let mut out = Map::new();
    for (key, value) in map {
        out.insert(scalar_token(value)?, Value::from(key.as_str()));
    }
    Ok(out)
}

/// Reverse an array-valued map into element token to key; later keys win on
/// shared elements.
///
/// # Errors
///
/// - [`MapError::ExpectedArray`] for a non-array value
/// - [`MapError::UnkeyableValue`] for an element without a scalar token
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::reverse_list_valued_map;
///
/// let doc = json!({"odd": [1, 3], "small": [1, 2]});
/// let reversed = reverse_list_valued_map(doc.as_object().unwrap())?;
/// assert_eq!(reversed["1"], json!("small"));
/// assert_eq!(reversed["2"], json!("small"));
/// assert_eq!(reversed["3"], json!("odd"));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn reverse_list_valued_map(map: &Map<String, Value>) -> Result<Map<String, Value>, MapError> {
    let mut out = Map::new();
    for (key, value) in map {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return Err(MapError::ExpectedArray {
                    key: key.clone(),
                })
            }
        };
        for item in items {
            out.insert(scalar_token(item)?, Value::from(key.as_str()));
        }
    }
    Ok(out)
}

// Object key token of a scalar value.
fn scalar_token(value: &Value) -> Result<String, MapError> {
    match value {
        Value::Null => Ok("null".to_owned()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) => Err(MapError::UnkeyableValue { kind: "array" }),
        Value::Object(_) => Err(MapError::UnkeyableValue { kind: "object" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(doc: Value) -> Map<String, Value> {
        doc.as_object().unwrap().clone()
    }

    #[test]
    fn reverse_groups_and_sorts_keys() {
        let map = object(json!({"z": "x", "a": "x", "m": "y"}));
        let reversed = reverse_map(&map).unwrap();
        assert_eq!(reversed["x"], json!(["a", "z"]));
        assert_eq!(reversed["y"], json!(["m"]));
    }

    #[test]
    fn reverse_renders_scalar_tokens() {
        let map = object(json!({"a": null, "b": true, "c": 2.5}));
        let reversed = reverse_map(&map).unwrap();
        assert_eq!(reversed["null"], json!(["a"]));
        assert_eq!(reversed["true"], json!(["b"]));
        assert_eq!(reversed["2.5"], json!(["c"]));
    }

    #[test]
    fn reverse_rejects_containers() {
        let map = object(json!({"a": [1]}));
        assert_eq!(
            reverse_map(&map),
            Err(MapError::UnkeyableValue { kind: "array" })
        );
        let map = object(json!({"a": {}}));
        assert_eq!(
            reverse_map_partial(&map),
            Err(MapError::UnkeyableValue { kind: "object" })
        );
    }

    #[test]
    fn partial_reverse_keeps_last_key() {
        let map = object(json!({"first": 1, "last": 1}));
        let reversed = reverse_map_partial(&map).unwrap();
        assert_eq!(reversed["1"], json!("last"));
    }

    #[test]
    fn list_valued_reverse_later_key_wins() {
        let map = object(json!({"one": ["a", "b"], "two": ["b", "c"]}));
        let reversed = reverse_list_valued_map(&map).unwrap();
        assert_eq!(reversed["a"], json!("one"));
        assert_eq!(reversed["b"], json!("two"));
        assert_eq!(reversed["c"], json!("two"));
    }

    #[test]
    fn list_valued_reverse_requires_arrays() {
        let map = object(json!({"one": 1}));
        assert_eq!(
            reverse_list_valued_map(&map),
            Err(MapError::ExpectedArray { key: "one".into() })
        );
    }
}

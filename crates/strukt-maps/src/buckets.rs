//! Array-valued accumulation: object entries treated as buckets.

use serde_json::{Map, Value};

use crate::MapError;

/// Append `value` to the array at `key` unless an equal element is already
/// there, creating the array when missing.
///
/// Equality is deep value equality, and insertion order is kept, so the
/// bucket behaves as a set with deterministic iteration.
///
/// # Errors
///
/// [`MapError::ExpectedArray`] when the existing value is not an array.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::insert_unique;
///
/// let mut doc = json!({});
/// let map = doc.as_object_mut().unwrap();
/// insert_unique(map, "tags", json!("a"))?;
/// insert_unique(map, "tags", json!("b"))?;
/// insert_unique(map, "tags", json!("a"))?;
/// assert_eq!(map["tags"], json!(["a", "b"]));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn insert_unique(
    map: &mut Map<String, Value>,
    key: &str,
    value: Value,
) -> Result<(), MapError> {
    let bucket = bucket_mut(map, key)?;
    if !bucket.iter().any(|existing| *existing == value) {
        bucket.push(value);
    }
    Ok(())
}

/// Append many values with [`insert_unique`] semantics.
///
/// # Errors
///
/// [`MapError::ExpectedArray`] when the existing value is not an array.
pub fn extend_unique(
    map: &mut Map<String, Value>,
    key: &str,
    values: impl IntoIterator<Item = Value>,
) -> Result<(), MapError> {
    let bucket = bucket_mut(map, key)?;
    for value in values {
        if !bucket.iter().any(|existing| *existing == value) {
            bucket.push(value);
        }
    }
    Ok(())
}

/// Append `value` to the array at `key`, creating the array when missing.
///
/// # Errors
///
/// [`MapError::ExpectedArray`] when the existing value is not an array.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::push_value;
///
/// let mut doc = json!({"log": [1]});
/// let map = doc.as_object_mut().unwrap();
/// push_value(map, "log", json!(1))?;
/// assert_eq!(map["log"], json!([1, 1]));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn push_value(map: &mut Map<String, Value>, key: &str, value: Value) -> Result<(), MapError> {
    bucket_mut(map, key)?.push(value);
    Ok(())
}

/// Append many values to the array at `key`, creating it when missing.
///
/// # Errors
///
/// [`MapError::ExpectedArray`] when the existing value is not an array.
pub fn extend_values(
    map: &mut Map<String, Value>,
    key: &str,
    values: impl IntoIterator<Item = Value>,
) -> Result<(), MapError> {
    bucket_mut(map, key)?.extend(values);
    Ok(())
}

fn bucket_mut<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Vec<Value>, MapError> {
    let slot = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    match slot {
        Value::Array(items) => Ok(items),
        _ => Err(MapError::ExpectedArray {
            key: key.to_owned(),
        }),
    }
}

//! Numeric object algebra: increments, extrema, normalization and sums.

use serde_json::{Map, Value};

use crate::MapError;

// Numeric addition keeping the integer representation where both sides are
// integral; i64 overflow spills into floating point. None when either side
// is not a number.
pub(crate) fn add_values(a: &Value, b: &Value) -> Option<Value> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(match x.checked_add(y) {
            Some(sum) => Value::from(sum),
            None => Value::from(x as f64 + y as f64),
        });
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Some(Value::from(x + y)),
        _ => None,
    }
}

/// Add `by` to the number at `key`, starting from zero when missing.
///
/// # Errors
///
/// [`MapError::NotANumber`] when the existing value is not numeric.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::increment_key;
///
/// let mut doc = json!({"hits": 2});
/// let map = doc.as_object_mut().unwrap();
/// increment_key(map, "hits", 1)?;
/// increment_key(map, "misses", 1)?;
/// assert_eq!(map["hits"], json!(3));
/// assert_eq!(map["misses"], json!(1));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn increment_key(map: &mut Map<String, Value>, key: &str, by: i64) -> Result<(), MapError> {
    let next = match map.get(key) {
        Some(existing) => {
            add_values(existing, &Value::from(by)).ok_or_else(|| MapError::NotANumber {
                key: key.to_owned(),
            })?
        }
        None => Value::from(by),
    };
    map.insert(key.to_owned(), next);
    Ok(())
}

/// Key of the first maximal numeric value, in insertion order.
///
/// Non-numeric values are skipped; `None` when nothing numeric is present.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::key_of_max;
///
/// let doc = json!({"a": 1, "b": 7, "c": 7});
/// assert_eq!(key_of_max(doc.as_object().unwrap()), Some("b"));
/// ```
pub fn key_of_max(map: &Map<String, Value>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (key, value) in map {
        if let Some(num) = value.as_f64() {
            let better = match best {
                Some((_, max)) => num > max,
                None => true,
            };
            if better {
                best = Some((key.as_str(), num));
            }
        }
    }
    best.map(|(key, _)| key)
}

/// Key of the first minimal numeric value, in insertion order.
///
/// Non-numeric values are skipped; `None` when nothing numeric is present.
pub fn key_of_min(map: &Map<String, Value>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (key, value) in map {
        if let Some(num) = value.as_f64() {
            let better = match best {
                Some((_, min)) => num < min,
                None => true,
            };
            if better {
                best = Some((key.as_str(), num));
            }
        }
    }
    best.map(|(key, _)| key)
}

/// Keys of the `n` largest numeric values, returned in ascending key order.
///
/// Ties at the cutoff resolve to the earlier entries. Asking for more keys
/// than there are numeric entries returns them all.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::keys_of_max_n;
///
/// let doc = json!({"d": 1, "c": 9, "a": 7, "b": 0});
/// assert_eq!(keys_of_max_n(doc.as_object().unwrap(), 2), vec!["a", "c"]);
/// ```
pub fn keys_of_max_n<'a>(map: &'a Map<String, Value>, n: usize) -> Vec<&'a str> {
    let mut entries: Vec<(&str, f64)> = map
        .iter()
        .filter_map(|(key, value)| value.as_f64().map(|num| (key.as_str(), num)))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut keys: Vec<&str> = entries.into_iter().take(n).map(|(key, _)| key).collect();
    keys.sort_unstable();
    keys
}

/// Copy of `map` with its numeric values scaled to sum to one.
///
/// Non-numeric entries are kept as they are and excluded from the sum.
///
/// # Errors
///
/// [`MapError::ZeroSum`] when the numeric values sum to zero (including the
/// case of no numeric values at all), since no scaling exists.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::normalize_num_map;
///
/// let doc = json!({"a": 1, "b": 3});
/// let normalized = normalize_num_map(doc.as_object().unwrap())?;
/// assert_eq!(normalized["a"], json!(0.25));
/// assert_eq!(normalized["b"], json!(0.75));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn normalize_num_map(map: &Map<String, Value>) -> Result<Map<String, Value>, MapError> {
    let total: f64 = map.values().filter_map(Value::as_f64).sum();
    if total == 0.0 {
        return Err(MapError::ZeroSum);
    }
    let mut out = map.clone();
    for value in out.values_mut() {
        if let Some(num) = value.as_f64() {
            *value = Value::from(num / total);
        }
    }
    Ok(out)
}

/// Key-wise sum of numeric values across maps.
///
/// With `normalize` the summed values are scaled to sum to one.
///
/// # Errors
///
/// - [`MapError::NotANumber`] when any input value is not numeric
/// - [`MapError::ZeroSum`] when normalizing a zero total
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::sum_num_maps;
///
/// let a = json!({"x": 1, "y": 2});
/// let b = json!({"y": 10, "z": 3});
/// let total = sum_num_maps(
///     &[a.as_object().unwrap(), b.as_object().unwrap()],
///     false,
/// )?;
/// assert_eq!(total["x"], json!(1));
/// assert_eq!(total["y"], json!(12));
/// assert_eq!(total["z"], json!(3));
/// # Ok::<(), strukt_maps::MapError>(())
/// ```
pub fn sum_num_maps(
    maps: &[&Map<String, Value>],
    normalize: bool,
) -> Result<Map<String, Value>, MapError> {
    let mut totals = Map::new();
    for map in maps {
        for (key, value) in map.iter() {
            let current = totals.get(key).cloned().unwrap_or_else(|| Value::from(0));
            let sum = add_values(&current, value).ok_or_else(|| MapError::NotANumber {
                key: key.clone(),
            })?;
            totals.insert(key.clone(), sum);
        }
    }
    if normalize {
        return normalize_num_map(&totals);
    }
    Ok(totals)
}

/// Key-wise sum across maps where numbers add and any other value replaces
/// the accumulator for its key, so the last non-numeric value prevails and
/// a later number starts counting afresh.
///
/// # Errors
///
/// [`MapError::ZeroSum`] when normalizing a zero total.
pub fn sum_maps(
    maps: &[&Map<String, Value>],
    normalize: bool,
) -> Result<Map<String, Value>, MapError> {
    let mut totals = Map::new();
    for map in maps {
        for (key, value) in map.iter() {
            let summed = match totals.get(key) {
                Some(current) => add_values(current, value),
                None => add_values(&Value::from(0), value),
            };
            totals.insert(key.clone(), summed.unwrap_or_else(|| value.clone()));
        }
    }
    if normalize {
        return normalize_num_map(&totals);
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(doc: Value) -> Map<String, Value> {
        doc.as_object().unwrap().clone()
    }

    #[test]
    fn add_values_keeps_integers_integral() {
        assert_eq!(add_values(&json!(2), &json!(3)), Some(json!(5)));
        assert_eq!(add_values(&json!(2.5), &json!(3)), Some(json!(5.5)));
        assert_eq!(add_values(&json!("x"), &json!(3)), None);
    }

    #[test]
    fn add_values_overflow_spills_to_float() {
        let sum = add_values(&json!(i64::MAX), &json!(1)).unwrap();
        assert!(sum.is_f64());
    }

    #[test]
    fn increment_key_counts() {
        let mut map = object(json!({}));
        increment_key(&mut map, "n", 1).unwrap();
        increment_key(&mut map, "n", 1).unwrap();
        increment_key(&mut map, "n", -3).unwrap();
        assert_eq!(map["n"], json!(-1));
    }

    #[test]
    fn increment_key_rejects_non_numbers() {
        let mut map = object(json!({"n": [1]}));
        assert_eq!(
            increment_key(&mut map, "n", 1),
            Err(MapError::NotANumber { key: "n".into() })
        );
    }

    #[test]
    fn extrema_pick_first_winner() {
        let map = object(json!({"a": 2, "b": 9, "c": 9, "d": -4}));
        assert_eq!(key_of_max(&map), Some("b"));
        assert_eq!(key_of_min(&map), Some("d"));
    }

    #[test]
    fn extrema_skip_non_numeric_values() {
        let map = object(json!({"a": "big", "b": 1}));
        assert_eq!(key_of_max(&map), Some("b"));
        assert_eq!(key_of_min(&map), Some("b"));

        let none = object(json!({"a": "big"}));
        assert_eq!(key_of_max(&none), None);
    }

    #[test]
    fn max_n_sorts_selected_keys() {
        let map = object(json!({"d": 1, "c": 9, "a": 7, "b": 0}));
        assert_eq!(keys_of_max_n(&map, 1), vec!["c"]);
        assert_eq!(keys_of_max_n(&map, 2), vec!["a", "c"]);
        assert_eq!(keys_of_max_n(&map, 10), vec!["a", "b", "c", "d"]);
        assert_eq!(keys_of_max_n(&map, 0), Vec::<&str>::new());
    }

    #[test]
    fn max_n_tie_prefers_earlier_entries() {
        let map = object(json!({"z": 5, "a": 5, "m": 1}));
        assert_eq!(keys_of_max_n(&map, 1), vec!["z"]);
    }

    #[test]
    fn normalization_scales_to_one() {
        let map = object(json!({"a": 2, "b": 2}));
        let normalized = normalize_num_map(&map).unwrap();
        assert_eq!(normalized["a"], json!(0.5));
        assert_eq!(normalized["b"], json!(0.5));
    }

    #[test]
    fn normalization_rejects_zero_totals() {
        assert_eq!(
            normalize_num_map(&object(json!({"a": 1, "b": -1}))),
            Err(MapError::ZeroSum)
        );
        assert_eq!(normalize_num_map(&object(json!({}))), Err(MapError::ZeroSum));
    }

    #[test]
    fn sum_num_maps_adds_by_key() {
        let a = object(json!({"x": 1, "y": 2.5}));
        let b = object(json!({"y": 0.5, "z": 3}));
        let total = sum_num_maps(&[&a, &b], false).unwrap();
        assert_eq!(total["x"], json!(1));
        assert_eq!(total["y"], json!(3.0));
        assert_eq!(total["z"], json!(3));
    }

    #[test]
    fn sum_num_maps_can_normalize() {
        let a = object(json!({"x": 1}));
        let b = object(json!({"x": 1, "y": 2}));
        let total = sum_num_maps(&[&a, &b], true).unwrap();
        assert_eq!(total["x"], json!(0.5));
        assert_eq!(total["y"], json!(0.5));
    }

    #[test]
    fn sum_num_maps_rejects_non_numbers() {
        let a = object(json!({"x": "oops"}));
        assert_eq!(
            sum_num_maps(&[&a], false),
            Err(MapError::NotANumber { key: "x".into() })
        );
    }

    #[test]
    fn sum_maps_lets_later_values_replace() {
        let a = object(json!({"x": 1, "note": "first"}));
        let b = object(json!({"x": 2, "note": "last"}));
        let c = object(json!({"x": 4}));
        let total = sum_maps(&[&a, &b, &c], false).unwrap();
        assert_eq!(total["x"], json!(7));
        assert_eq!(total["note"], json!("last"));
    }

    #[test]
    fn sum_maps_resumes_counting_after_replacement() {
        let a = object(json!({"x": "reset"}));
        let b = object(json!({"x": 5}));
        let total = sum_maps(&[&a, &b], false).unwrap();
        assert_eq!(total["x"], json!(5));
    }
}

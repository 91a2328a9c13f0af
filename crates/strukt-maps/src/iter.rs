//! Iteration over the leaves of a nested object tree.

use serde_json::{map, Map, Value};

/// Iterator over the `(path, leaf)` entries of an object tree, created by
/// [`nested_entries`].
///
/// Only objects are descended; arrays and scalars are leaves. Entries come
/// out depth-first in insertion order, and empty objects contribute
/// nothing.
pub struct NestedEntries<'a> {
    stack: Vec<(Vec<&'a str>, map::Iter<'a>)>,
}

/// Iterate every non-object leaf of `map` together with its key path.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_maps::nested_entries;
///
/// let doc = json!({"a": 1, "b": {"c": 2, "d": {"e": [3, 4]}}});
/// let map = doc.as_object().unwrap();
/// let entries: Vec<String> = nested_entries(map)
///     .map(|(path, leaf)| format!("{}={}", path.join("."), leaf))
///     .collect();
/// assert_eq!(entries, vec!["a=1", "b.c=2", "b.d.e=[3,4]"]);
/// ```
pub fn nested_entries(map: &Map<String, Value>) -> NestedEntries<'_> {
    NestedEntries {
        stack: vec![(Vec::new(), map.iter())],
    }
}

impl<'a> Iterator for NestedEntries<'a> {
    type Item = (Vec<&'a str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, entries) = self.stack.last_mut()?;
            match entries.next() {
                Some((key, Value::Object(inner))) => {
                    let mut path = prefix.clone();
                    path.push(key.as_str());
                    self.stack.push((path, inner.iter()));
                }
                Some((key, leaf)) => {
                    let mut path = prefix.clone();
                    path.push(key.as_str());
                    return Some((path, leaf));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

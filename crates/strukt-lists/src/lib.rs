//! List utilities: removal by index, in-place reordering and priority picks.
//!
//! # Example
//!
//! ```
//! use strukt_lists::{all_but, shift_element, shift_index};
//!
//! assert_eq!(all_but(&[1, 2, 3, 4], 2), vec![1, 2, 4]);
//!
//! let mut letters = vec!['a', 'b', 'c', 'd'];
//! shift_index(&mut letters, 3, 0);
//! assert_eq!(letters, vec!['d', 'a', 'b', 'c']);
//!
//! shift_element(&mut letters, &'a', 3)?;
//! assert_eq!(letters, vec!['d', 'b', 'c', 'a']);
//! # Ok::<(), strukt_lists::ListError>(())
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

/// Copy of `items` without the element at `index`.
///
/// An out-of-range index yields a copy of the whole slice.
///
/// # Examples
///
/// ```
/// use strukt_lists::all_but;
///
/// assert_eq!(all_but(&["a", "b", "c"], 1), vec!["a", "c"]);
/// assert_eq!(all_but(&["a", "b", "c"], 9), vec!["a", "b", "c"]);
/// ```
pub fn all_but<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let split = index.min(items.len());
    let rest = index.saturating_add(1).min(items.len());
    let mut out = Vec::with_capacity(items.len());
    out.extend_from_slice(&items[..split]);
    out.extend_from_slice(&items[rest..]);
    out
}

/// Move the element at `from` to position `to`, keeping the relative order
/// of everything else.
///
/// A `to` past the end places the element last.
///
/// # Panics
///
/// Panics when `from` is out of range.
///
/// # Examples
///
/// ```
/// use strukt_lists::shift_index;
///
/// let mut items = vec![1, 2, 3, 4];
/// shift_index(&mut items, 0, 2);
/// assert_eq!(items, vec![2, 3, 1, 4]);
/// ```
pub fn shift_index<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let element = items.remove(from);
    items.insert(to.min(items.len()), element);
}

/// Move the first element equal to `value` to position `to`.
///
/// # Errors
///
/// [`ListError::ElementNotFound`] when no element equals `value`.
///
/// # Examples
///
/// ```
/// use strukt_lists::shift_element;
///
/// let mut items = vec!["x", "y", "z"];
/// shift_element(&mut items, &"z", 0)?;
/// assert_eq!(items, vec!["z", "x", "y"]);
/// # Ok::<(), strukt_lists::ListError>(())
/// ```
pub fn shift_element<T: PartialEq>(items: &mut Vec<T>, value: &T, to: usize) -> Result<(), ListError> {
    let from = items
        .iter()
        .position(|item| item == value)
        .ok_or(ListError::ElementNotFound)?;
    shift_index(items, from, to);
    Ok(())
}

/// First element of `priority` that is contained in `pool`.
///
/// # Examples
///
/// ```
/// use strukt_lists::first_by_priority;
///
/// let pool = ["yaml", "json"];
/// assert_eq!(first_by_priority(&pool, &["toml", "json", "yaml"]), Some(&"json"));
/// assert_eq!(first_by_priority(&pool, &["toml"]), None);
/// ```
pub fn first_by_priority<'a, T: PartialEq>(pool: &[T], priority: &'a [T]) -> Option<&'a T> {
    priority.iter().find(|&candidate| pool.contains(candidate))
}

/// [`first_by_priority`] for a [`HashSet`] pool.
pub fn first_by_priority_hashed<'a, T: Eq + Hash>(
    pool: &HashSet<T>,
    priority: &'a [T],
) -> Option<&'a T> {
    priority.iter().find(|&candidate| pool.contains(candidate))
}

/// Error produced by list operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A lookup by equality found no matching element.
    #[error("element not found in list")]
    ElementNotFound,
}

//! Utilities for nested JSON-shaped maps.
//!
//! Everything operates on [`serde_json::Value`] documents and
//! [`serde_json::Map`] objects: path access and mutation, leaf iteration,
//! bucket accumulation, numeric algebra, merging, reversal and flattening.
//! The `preserve_order` feature keeps object iteration in insertion order,
//! so every function here is deterministic.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strukt_maps::{get_nested, increment_nested, put_nested};
//!
//! let mut doc = json!({"a": {"b": 7}});
//! assert_eq!(get_nested(&doc, &["a", "b"]), Some(&json!(7)));
//!
//! put_nested(&mut doc, &["a", "c"], json!(1))?;
//! increment_nested(&mut doc, &["a", "c"], 4)?;
//! assert_eq!(get_nested(&doc, &["a", "c"]), Some(&json!(5)));
//! # Ok::<(), strukt_maps::MapError>(())
//! ```

use thiserror::Error;

pub mod buckets;
pub mod flatten;
pub mod iter;
pub mod merge;
pub mod nested;
pub mod numeric;
pub mod reverse;
pub mod select;

pub use buckets::{extend_unique, extend_values, insert_unique, push_value};
pub use flatten::flatten;
pub use iter::{nested_entries, NestedEntries};
pub use merge::{deep_merge, unite_maps};
pub use nested::{
    contains_nested, contains_nested_alt, get_nested, get_nested_alt, get_nested_mut,
    increment_nested, put_nested,
};
pub use numeric::{
    increment_key, key_of_max, key_of_min, keys_of_max_n, normalize_num_map, sum_maps,
    sum_num_maps,
};
pub use reverse::{reverse_list_valued_map, reverse_map, reverse_map_partial};
pub use select::{contains_any_key, first_value, submap_by_keys};

/// Error produced by map operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A path-taking operation received an empty path.
    #[error("path must have at least one step")]
    EmptyPath,
    /// A path step landed on a value that is not an object.
    #[error("cannot descend into non-object value at step '{step}'")]
    NotAnObject { step: String },
    /// An arithmetic operation met a non-numeric value.
    #[error("value at '{key}' is not a number")]
    NotANumber { key: String },
    /// A bucket operation met a non-array value.
    #[error("value at '{key}' is not an array")]
    ExpectedArray { key: String },
    /// A reversal met a value that cannot become an object key.
    #[error("cannot use {kind} value as a key")]
    UnkeyableValue { kind: &'static str },
    /// Normalization over numeric values summing to zero.
    #[error("numeric values sum to zero")]
    ZeroSum,
}

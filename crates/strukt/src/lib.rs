//! strukt — deterministic hashing and search utilities for nested data.
//!
//! Four components, usable through the module aliases below or the flat
//! re-exports:
//!
//! - [`hash`]: structural hashing ([`stable_hash`]) and canonical JSON
//!   digests ([`json_based_stable_hash`])
//! - [`sections`]: point and range lookups over ascending boundary lists
//! - [`maps`]: nested JSON object access, mutation and algebra
//! - [`lists`]: list reordering and priority picks
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strukt::{find_point_in_section, stable_hash, Value};
//!
//! // The structural hash ignores how mapping entries are ordered.
//! let a = Value::from(json!({"user": "ann", "roles": [1, 2]}));
//! let b = Value::from(json!({"roles": [2, 1], "user": "ann"}));
//! assert_eq!(stable_hash(&a)?, stable_hash(&b)?);
//!
//! // Route the document to a shard of the u64 keyspace.
//! let shards = [0u64, 1 << 62, 2 << 62, 3 << 62, u64::MAX];
//! assert!(find_point_in_section(stable_hash(&a)?, &shards).is_some());
//! # Ok::<(), strukt::HashError>(())
//! ```

pub use strukt_hash as hash;
pub use strukt_lists as lists;
pub use strukt_maps as maps;
pub use strukt_sections as sections;

pub use strukt_hash::{
    json_based_stable_hash, json_based_stable_hash_with, stable_hash, stable_hash_with,
    to_canonical_json, to_canonical_json_with, CanonicalJsonError, CanonicalJsonOptions, HashError,
    HashOptions, Value, ValueKind,
};
pub use strukt_sections::{
    find_point_in_section, find_range_in_sections, find_range_index_in_points,
    find_range_index_in_sections,
};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

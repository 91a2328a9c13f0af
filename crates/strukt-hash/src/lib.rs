//! Stable structural hashing for nested heterogeneous values.
//!
//! Two entry points share one [`Value`] model:
//!
//! - [`stable_hash`] computes the historical structural hash: a `u64` that
//!   ignores mapping entry order (and, by default, sequence order and
//!   duplicates), truncates numbers to their integer part and digests text
//!   through SHA-256.
//! - [`json_based_stable_hash`] computes the canonical-JSON digest: the
//!   SHA-256 hex of a deterministic JSON rendering with sorted keys. It is
//!   order-sensitive and precision-preserving, and is the variant to prefer
//!   when legacy hash compatibility is not needed.
//!
//! # Example
//!
//! ```
//! use strukt_hash::{json_based_stable_hash, stable_hash, Value};
//!
//! let doc = Value::Map(vec![
//!     (Value::Text("name".into()), Value::Text("strukt".into())),
//!     (Value::Int(4), Value::Seq(vec![Value::Int(1), Value::Int(2)])),
//! ]);
//!
//! let word = stable_hash(&doc)?;
//! assert_eq!(word, stable_hash(&doc)?);
//!
//! let digest = json_based_stable_hash(&doc)?;
//! assert_eq!(digest.len(), 64);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod digest;

pub mod canonical;
pub mod hash;
pub mod value;

pub use canonical::{
    json_based_stable_hash, json_based_stable_hash_with, to_canonical_json, to_canonical_json_with,
    CanonicalJsonError, CanonicalJsonOptions,
};
pub use hash::{stable_hash, stable_hash_with, HashError, HashOptions};
pub use value::{Value, ValueKind};

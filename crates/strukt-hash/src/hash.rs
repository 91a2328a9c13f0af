//! The stable structural hash.

use thiserror::Error;

use crate::digest;
use crate::value::{Value, ValueKind};

/// Options for [`stable_hash_with`].
#[derive(Debug, Clone)]
pub struct HashOptions {
    /// Treat sequence order and element multiplicity as significant.
    ///
    /// Off by default: the historical hash aggregates sequence elements as a
    /// set, so permutations and duplicates of a sequence collide.
    pub ordered: bool,
    /// Number of container levels a value may nest before hashing fails
    /// with [`HashError::TooDeep`].
    pub max_depth: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        HashOptions {
            ordered: false,
            max_depth: 128,
        }
    }
}

/// Error produced by the structural hash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The value, or one nested inside a container, has no hashable
    /// primitive form.
    #[error("unhashable value of kind {0}")]
    UnhashableValue(ValueKind),
    /// A mapping key does not reduce to a hashable primitive.
    #[error("unhashable mapping key of kind {0}")]
    UnhashableKey(ValueKind),
    /// Container nesting exceeded the configured depth limit.
    #[error("value nesting exceeds the depth limit of {0}")]
    TooDeep(usize),
}

/// Hash a value with the default options.
///
/// The result is stable across processes and runs. Mapping entries are
/// hashed as a set, so key order never matters. Under the default options
/// sequences are hashed as sets too: element order and duplicates are
/// ignored. Pass [`HashOptions`] with `ordered` set to
/// [`stable_hash_with`] to make sequence order significant.
///
/// Numbers contribute their integer part only, so `2`, `2.2` and the
/// complex number `2.5 + 3i` all hash alike; text contributes a SHA-256
/// digest of its UTF-8 bytes. A bare primitive hashes to its own
/// contribution, without any extra mixing.
///
/// # Errors
///
/// - [`HashError::UnhashableValue`] for a `Null` or `Bytes` leaf
/// - [`HashError::UnhashableKey`] for a mapping key that is not a primitive
/// - [`HashError::TooDeep`] past the nesting limit
///
/// # Examples
///
/// ```
/// use strukt_hash::{stable_hash, Value};
///
/// let ab = Value::Map(vec![
///     (Value::Text("a".into()), Value::Int(1)),
///     (Value::Text("b".into()), Value::Int(2)),
/// ]);
/// let ba = Value::Map(vec![
///     (Value::Text("b".into()), Value::Int(2)),
///     (Value::Text("a".into()), Value::Int(1)),
/// ]);
/// assert_eq!(stable_hash(&ab)?, stable_hash(&ba)?);
///
/// assert_eq!(stable_hash(&Value::Float(2.2))?, 2);
/// # Ok::<(), strukt_hash::HashError>(())
/// ```
pub fn stable_hash(value: &Value) -> Result<u64, HashError> {
    stable_hash_with(value, &HashOptions::default())
}

/// Hash a value under explicit [`HashOptions`].
///
/// # Errors
///
/// As for [`stable_hash`].
///
/// # Examples
///
/// ```
/// use strukt_hash::{stable_hash_with, HashOptions, Value};
///
/// let options = HashOptions {
///     ordered: true,
///     ..HashOptions::default()
/// };
/// let one_two = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
/// let two_one = Value::Seq(vec![Value::Int(2), Value::Int(1)]);
/// assert_ne!(
///     stable_hash_with(&one_two, &options)?,
///     stable_hash_with(&two_one, &options)?,
/// );
/// # Ok::<(), strukt_hash::HashError>(())
/// ```
pub fn stable_hash_with(value: &Value, options: &HashOptions) -> Result<u64, HashError> {
    hash_value(value, options, 0)
}

fn hash_value(value: &Value, options: &HashOptions, depth: usize) -> Result<u64, HashError> {
    match value {
        Value::Map(_) | Value::Seq(_) if depth >= options.max_depth => {
            Err(HashError::TooDeep(options.max_depth))
        }
        Value::Map(pairs) => {
            let mut pair_words = Vec::with_capacity(pairs.len());
            for (key, val) in pairs {
                let key_word =
                    primitive_word(key).map_err(|_| HashError::UnhashableKey(key.kind()))?;
                let val_word = hash_value(val, options, depth + 1)?;
                pair_words.push(combine(vec![key_word, val_word], options.ordered));
            }
            // Entry hashes always aggregate as a set, whatever the mode
            Ok(combine(pair_words, false))
        }
        Value::Seq(items) => {
            let mut words = Vec::with_capacity(items.len());
            for item in items {
                words.push(hash_value(item, options, depth + 1)?);
            }
            Ok(combine(words, options.ordered))
        }
        primitive => primitive_word(primitive),
    }
}

// Contribution of a leaf. Numbers truncate toward zero; the imaginary part
// of a complex number is dropped entirely (historical behaviour). Non-finite
// floats follow Rust's saturating float-to-int cast.
fn primitive_word(value: &Value) -> Result<u64, HashError> {
    match value {
        Value::Text(s) => Ok(digest::text_word(s)),
        Value::Int(i) => Ok(*i as u64),
        Value::Bool(b) => Ok(u64::from(*b)),
        Value::Float(f) => Ok(*f as i64 as u64),
        Value::Complex(re, _) => Ok(*re as i64 as u64),
        other => Err(HashError::UnhashableValue(other.kind())),
    }
}

// Aggregate child words. Unordered aggregation sorts and deduplicates
// first, so permutations and duplicates collide.
fn combine(mut words: Vec<u64>, ordered: bool) -> u64 {
    if !ordered {
        words.sort_unstable();
        words.dedup();
    }
    digest::fold_words(&words)
}

//! Canonical JSON rendering and the digest hash built on it.

use serde_json::Number;
use thiserror::Error;

use crate::digest;
use crate::value::{Value, ValueKind};

/// Options for [`to_canonical_json_with`] and [`json_based_stable_hash_with`].
#[derive(Debug, Clone)]
pub struct CanonicalJsonOptions {
    /// Serialize non-finite floats as the tokens `NaN`, `Infinity` and
    /// `-Infinity` (on by default). When disabled they fail with
    /// [`CanonicalJsonError::NonFiniteNumber`].
    pub allow_non_finite: bool,
    /// Number of container levels a value may nest before serialization
    /// fails with [`CanonicalJsonError::TooDeep`].
    pub max_depth: usize,
}

impl Default for CanonicalJsonOptions {
    fn default() -> Self {
        CanonicalJsonOptions {
            allow_non_finite: true,
            max_depth: 128,
        }
    }
}

/// Error produced by canonical JSON rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanonicalJsonError {
    /// The value has no JSON representation.
    #[error("cannot serialize value of kind {0}")]
    UnsupportedValue(ValueKind),
    /// A mapping key does not render to a JSON object key.
    #[error("cannot serialize mapping key of kind {0}")]
    UnsupportedKey(ValueKind),
    /// A non-finite float with `allow_non_finite` disabled.
    #[error("non-finite number {0} is not allowed")]
    NonFiniteNumber(f64),
    /// Container nesting exceeded the configured depth limit.
    #[error("value nesting exceeds the depth limit of {0}")]
    TooDeep(usize),
}

/// Render a value as canonical JSON with the default options.
///
/// The canonical form carries no whitespace, sorts object keys by the UTF-8
/// bytes of their rendered tokens and keeps the shortest round-trip text of
/// every float, so `2.0` stays distinct from `2`. Sequences serialize in
/// element order: unlike [the structural hash](crate::stable_hash), this
/// form is order-sensitive and precision-preserving.
///
/// `Null` serializes as `null`, while `Complex` and `Bytes` have no JSON
/// form and fail. Non-text primitive keys render as their value tokens.
///
/// # Errors
///
/// - [`CanonicalJsonError::UnsupportedValue`] for `Complex` or `Bytes`
/// - [`CanonicalJsonError::UnsupportedKey`] for a non-primitive mapping key
/// - [`CanonicalJsonError::NonFiniteNumber`] for a non-finite float when
///   `allow_non_finite` is off
/// - [`CanonicalJsonError::TooDeep`] past the nesting limit
///
/// # Examples
///
/// ```
/// use strukt_hash::{to_canonical_json, Value};
///
/// let val = Value::Map(vec![
///     (Value::Text("b".into()), Value::Int(2)),
///     (
///         Value::Text("a".into()),
///         Value::Seq(vec![Value::Int(1), Value::Float(2.5)]),
///     ),
/// ]);
/// assert_eq!(to_canonical_json(&val)?, r#"{"a":[1,2.5],"b":2}"#);
/// # Ok::<(), strukt_hash::CanonicalJsonError>(())
/// ```
pub fn to_canonical_json(value: &Value) -> Result<String, CanonicalJsonError> {
    to_canonical_json_with(value, &CanonicalJsonOptions::default())
}

/// Render a value as canonical JSON under explicit [`CanonicalJsonOptions`].
///
/// # Errors
///
/// As for [`to_canonical_json`].
pub fn to_canonical_json_with(
    value: &Value,
    options: &CanonicalJsonOptions,
) -> Result<String, CanonicalJsonError> {
    let mut out = String::new();
    write_value(&mut out, value, options, 0)?;
    Ok(out)
}

/// SHA-256 digest of the canonical JSON form, as lowercase hex.
///
/// Two values receive the same digest exactly when their canonical forms
/// coincide: mapping entry order never matters, sequence order and numeric
/// precision always do.
///
/// # Errors
///
/// As for [`to_canonical_json`].
///
/// # Examples
///
/// ```
/// use strukt_hash::{json_based_stable_hash, Value};
///
/// let forward = Value::Map(vec![
///     (Value::Text("a".into()), Value::Int(1)),
///     (Value::Text("b".into()), Value::Int(2)),
/// ]);
/// let backward = Value::Map(vec![
///     (Value::Text("b".into()), Value::Int(2)),
///     (Value::Text("a".into()), Value::Int(1)),
/// ]);
/// let digest = json_based_stable_hash(&forward)?;
/// assert_eq!(digest, json_based_stable_hash(&backward)?);
/// assert_eq!(digest.len(), 64);
/// # Ok::<(), strukt_hash::CanonicalJsonError>(())
/// ```
pub fn json_based_stable_hash(value: &Value) -> Result<String, CanonicalJsonError> {
    json_based_stable_hash_with(value, &CanonicalJsonOptions::default())
}

/// [`json_based_stable_hash`] under explicit [`CanonicalJsonOptions`].
///
/// # Errors
///
/// As for [`to_canonical_json`].
pub fn json_based_stable_hash_with(
    value: &Value,
    options: &CanonicalJsonOptions,
) -> Result<String, CanonicalJsonError> {
    let canonical = to_canonical_json_with(value, options)?;
    Ok(digest::hex_digest(canonical.as_bytes()))
}

fn write_value(
    out: &mut String,
    value: &Value,
    options: &CanonicalJsonOptions,
    depth: usize,
) -> Result<(), CanonicalJsonError> {
    match value {
        Value::Map(_) | Value::Seq(_) if depth >= options.max_depth => {
            Err(CanonicalJsonError::TooDeep(options.max_depth))
        }
        Value::Null => {
            out.push_str("null");
            Ok(())
        }
        Value::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
            Ok(())
        }
        Value::Int(i) => {
            out.push_str(&i.to_string());
            Ok(())
        }
        Value::Float(f) => {
            out.push_str(&float_token(*f, options)?);
            Ok(())
        }
        Value::Text(s) => {
            out.push('"');
            out.push_str(&escape_text(s));
            out.push('"');
            Ok(())
        }
        Value::Seq(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return Ok(());
            }
            out.push('[');
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                write_value(out, item, options, depth + 1)?;
                if i < last {
                    out.push(',');
                }
            }
            out.push(']');
            Ok(())
        }
        Value::Map(pairs) => {
            if pairs.is_empty() {
                out.push_str("{}");
                return Ok(());
            }
            // Render keys up front so entries can be emitted sorted
            let mut entries = Vec::with_capacity(pairs.len());
            for (key, val) in pairs {
                entries.push((key_token(key, options)?, val));
            }
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            out.push('{');
            let last = entries.len() - 1;
            for (i, (key, val)) in entries.iter().enumerate() {
                out.push('"');
                out.push_str(&escape_text(key));
                out.push_str("\":");
                write_value(out, val, options, depth + 1)?;
                if i < last {
                    out.push(',');
                }
            }
            out.push('}');
            Ok(())
        }
        unsupported @ (Value::Complex(..) | Value::Bytes(_)) => {
            Err(CanonicalJsonError::UnsupportedValue(unsupported.kind()))
        }
    }
}

// Object key token of a mapping key. Keys sort by the UTF-8 bytes of this
// token, so mixed-kind keys interleave by their renderings.
fn key_token(key: &Value, options: &CanonicalJsonOptions) -> Result<String, CanonicalJsonError> {
    match key {
        Value::Text(s) => Ok(s.clone()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => float_token(*f, options),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_owned()),
        Value::Null => Ok("null".to_owned()),
        other => Err(CanonicalJsonError::UnsupportedKey(other.kind())),
    }
}

// Shortest round-trip token for a float. Integral floats keep a trailing
// `.0`, keeping them distinct from the matching int.
fn float_token(f: f64, options: &CanonicalJsonOptions) -> Result<String, CanonicalJsonError> {
    match Number::from_f64(f) {
        Some(n) => Ok(n.to_string()),
        None if options.allow_non_finite => Ok(if f.is_nan() {
            "NaN".to_owned()
        } else if f > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }),
        None => Err(CanonicalJsonError::NonFiniteNumber(f)),
    }
}

// JSON string escaping: named escapes where they exist, lowercase `\u00xx`
// for the remaining control characters.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            control if (control as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", control as u32));
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.into())
    }

    #[test]
    fn scalars_render_as_json_tokens() {
        assert_eq!(to_canonical_json(&Value::Null).unwrap(), "null");
        assert_eq!(to_canonical_json(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(to_canonical_json(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(to_canonical_json(&Value::Int(-42)).unwrap(), "-42");
        assert_eq!(to_canonical_json(&text("hi")).unwrap(), r#""hi""#);
    }

    #[test]
    fn floats_keep_their_precision() {
        assert_eq!(to_canonical_json(&Value::Float(2.0)).unwrap(), "2.0");
        assert_eq!(to_canonical_json(&Value::Float(2.5)).unwrap(), "2.5");
        assert_ne!(
            to_canonical_json(&Value::Float(2.0)).unwrap(),
            to_canonical_json(&Value::Int(2)).unwrap()
        );
    }

    #[test]
    fn non_finite_tokens_by_default() {
        assert_eq!(to_canonical_json(&Value::Float(f64::NAN)).unwrap(), "NaN");
        assert_eq!(
            to_canonical_json(&Value::Float(f64::INFINITY)).unwrap(),
            "Infinity"
        );
        assert_eq!(
            to_canonical_json(&Value::Float(f64::NEG_INFINITY)).unwrap(),
            "-Infinity"
        );
    }

    #[test]
    fn non_finite_rejected_when_disallowed() {
        let options = CanonicalJsonOptions {
            allow_non_finite: false,
            ..CanonicalJsonOptions::default()
        };
        assert!(matches!(
            to_canonical_json_with(&Value::Float(f64::NAN), &options),
            Err(CanonicalJsonError::NonFiniteNumber(_))
        ));
        assert!(matches!(
            to_canonical_json_with(&Value::Float(f64::INFINITY), &options),
            Err(CanonicalJsonError::NonFiniteNumber(_))
        ));
    }

    #[test]
    fn empty_containers() {
        assert_eq!(to_canonical_json(&Value::Seq(vec![])).unwrap(), "[]");
        assert_eq!(to_canonical_json(&Value::Map(vec![])).unwrap(), "{}");
    }

    #[test]
    fn sequences_keep_order() {
        let one_two = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        let two_one = Value::Seq(vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(to_canonical_json(&one_two).unwrap(), "[1,2]");
        assert_eq!(to_canonical_json(&two_one).unwrap(), "[2,1]");
    }

    #[test]
    fn keys_sort_by_rendered_token() {
        let val = Value::Map(vec![
            (text("a"), Value::Int(0)),
            (Value::Int(2), Value::Int(0)),
            (Value::Int(10), Value::Int(0)),
        ]);
        // "10" < "2" < "a" in byte order
        assert_eq!(
            to_canonical_json(&val).unwrap(),
            r#"{"10":0,"2":0,"a":0}"#
        );
    }

    #[test]
    fn primitive_keys_render_as_tokens() {
        let val = Value::Map(vec![
            (Value::Bool(true), Value::Int(1)),
            (Value::Null, Value::Int(2)),
            (Value::Float(2.5), Value::Int(3)),
        ]);
        assert_eq!(
            to_canonical_json(&val).unwrap(),
            r#"{"2.5":3,"null":2,"true":1}"#
        );
    }

    #[test]
    fn mapping_entry_order_is_irrelevant() {
        let forward = Value::Map(vec![(text("a"), Value::Int(1)), (text("b"), Value::Int(2))]);
        let backward = Value::Map(vec![(text("b"), Value::Int(2)), (text("a"), Value::Int(1))]);
        assert_eq!(
            to_canonical_json(&forward).unwrap(),
            to_canonical_json(&backward).unwrap()
        );
    }

    #[test]
    fn strings_escape() {
        assert_eq!(
            to_canonical_json(&text("say \"hi\"\n")).unwrap(),
            r#""say \"hi\"\n""#
        );
        assert_eq!(
            to_canonical_json(&text("null\u{0}byte")).unwrap(),
            r#""null\u0000byte""#
        );
        assert_eq!(
            to_canonical_json(&text("hello 日本語")).unwrap(),
            r#""hello 日本語""#
        );
    }

    #[test]
    fn complex_and_bytes_are_unsupported() {
        assert_eq!(
            to_canonical_json(&Value::Complex(1.0, 2.0)),
            Err(CanonicalJsonError::UnsupportedValue(ValueKind::Complex))
        );
        assert_eq!(
            to_canonical_json(&Value::Bytes(vec![1])),
            Err(CanonicalJsonError::UnsupportedValue(ValueKind::Bytes))
        );
        let nested = Value::Seq(vec![Value::Complex(0.0, 0.0)]);
        assert_eq!(
            to_canonical_json(&nested),
            Err(CanonicalJsonError::UnsupportedValue(ValueKind::Complex))
        );
    }

    #[test]
    fn container_keys_are_unsupported() {
        let val = Value::Map(vec![(Value::Seq(vec![]), Value::Int(1))]);
        assert_eq!(
            to_canonical_json(&val),
            Err(CanonicalJsonError::UnsupportedKey(ValueKind::Seq))
        );
    }

    #[test]
    fn nested_golden_form() {
        let val = Value::Map(vec![
            (text("z"), Value::Map(vec![
                (text("b"), Value::Int(2)),
                (text("a"), Value::Int(1)),
            ])),
            (text("a"), Value::Seq(vec![Value::Int(3), Value::Int(1), Value::Int(2)])),
        ]);
        assert_eq!(
            to_canonical_json(&val).unwrap(),
            r#"{"a":[3,1,2],"z":{"a":1,"b":2}}"#
        );
    }

    fn nested_seq(levels: usize) -> Value {
        (0..levels).fold(Value::Int(1), |inner, _| Value::Seq(vec![inner]))
    }

    #[test]
    fn depth_limit_guards_recursion() {
        assert!(to_canonical_json(&nested_seq(128)).is_ok());
        assert_eq!(
            to_canonical_json(&nested_seq(129)),
            Err(CanonicalJsonError::TooDeep(128))
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_canonical_text() {
        let digest = json_based_stable_hash(&Value::Null).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn digest_distinguishes_order_and_precision() {
        let one_two = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        let two_one = Value::Seq(vec![Value::Int(2), Value::Int(1)]);
        assert_ne!(
            json_based_stable_hash(&one_two).unwrap(),
            json_based_stable_hash(&two_one).unwrap()
        );
        assert_ne!(
            json_based_stable_hash(&Value::Float(2.0)).unwrap(),
            json_based_stable_hash(&Value::Int(2)).unwrap()
        );
    }
}

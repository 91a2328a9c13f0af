//! The structural value model shared by the hash and canonical-form entry
//! points.

use std::fmt;

use serde_json::Value as JsonValue;

/// A nested structural value.
///
/// This is the closed set of shapes the crate understands: five hashable
/// primitives (`Bool`, `Int`, `Float`, `Complex`, `Text`), two leaves that
/// only some operations accept (`Null`, `Bytes`) and two containers. Text
/// and bytes are always leaves, never sequences of characters.
///
/// Mappings are pair lists so keys are not limited to strings. Key
/// uniqueness is the caller's responsibility; duplicate pairs coalesce under
/// the orderless hash anyway.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Complex number as `(re, im)`.
    Complex(f64, f64),
    Text(String),
    Bytes(Vec<u8>),
    Seq(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Classify this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use strukt_hash::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Int(3).kind(), ValueKind::Int);
    /// assert_eq!(Value::Seq(vec![]).kind(), ValueKind::Seq);
    /// ```
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Complex(..) => ValueKind::Complex,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Whether this value is a hashable primitive (`Bool`, `Int`, `Float`,
    /// `Complex` or `Text`).
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Complex(..) | Value::Text(_)
        )
    }
}

/// The kind of a [`Value`], used for classification and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Complex,
    Text,
    Bytes,
    Seq,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Complex => "complex",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "mapping",
        };
        f.write_str(name)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

/// Convert a JSON document into a structural value.
///
/// Object keys become `Text` keys in entry order. Numbers become `Int` when
/// they fit `i64` and `Float` otherwise, so integers above `2^63 - 1` lose
/// their exact value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strukt_hash::Value;
///
/// let val = Value::from(json!({"a": 1, "b": [true, null]}));
/// assert_eq!(
///     val,
///     Value::Map(vec![(
///         Value::Text("a".into()),
///         Value::Int(1),
///     ), (
///         Value::Text("b".into()),
///         Value::Seq(vec![Value::Bool(true), Value::Null]),
///     )])
/// );
/// ```
impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 and arbitrary-precision numbers fall through as floats
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, val)| (Value::Text(key), Value::from(val)))
                    .collect(),
            ),
        }
    }
}

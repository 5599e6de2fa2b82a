//! Tagged in-memory representation of one JSON datum.

use std::fmt;

use crate::array::Array;
use crate::object::Object;

/// Payload-free discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    Str,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// One JSON datum.
///
/// Exactly one variant is live at a time; assigning a new variant through a
/// `set_*` operation drops the prior payload first. A `Value` exclusively
/// owns its payload, and containers own their children transitively, so
/// dropping a value releases its whole subtree.
///
/// String payloads are raw bytes with an explicit length: they may contain
/// embedded zero bytes (`\u0000` decodes to one) and are not required to be
/// valid UTF-8, since the decoder passes bytes >= 0x20 through unvalidated.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(Vec<u8>),
    Array(Array),
    Object(Object),
}

impl Value {
    /// The discriminant of the live variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// String payload as `&str`, when it happens to be valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Boolean payload. Panics when the value is not a boolean.
    pub fn bool_value(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => panic!("expected boolean, found {}", other.kind()),
        }
    }

    /// Number payload. Panics when the value is not a number.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("expected number, found {}", other.kind()),
        }
    }

    /// String payload bytes. Panics when the value is not a string.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Value::Str(s) => s,
            other => panic!("expected string, found {}", other.kind()),
        }
    }

    /// Array payload. Panics when the value is not an array.
    pub fn array(&self) -> &Array {
        match self {
            Value::Array(a) => a,
            other => panic!("expected array, found {}", other.kind()),
        }
    }

    /// Mutable array payload. Panics when the value is not an array.
    pub fn array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(a) => a,
            other => panic!("expected array, found {}", other.kind()),
        }
    }

    /// Object payload. Panics when the value is not an object.
    pub fn object(&self) -> &Object {
        match self {
            Value::Object(o) => o,
            other => panic!("expected object, found {}", other.kind()),
        }
    }

    /// Mutable object payload. Panics when the value is not an object.
    pub fn object_mut(&mut self) -> &mut Object {
        match self {
            Value::Object(o) => o,
            other => panic!("expected object, found {}", other.kind()),
        }
    }

    /// Resets to `Null`, dropping the current payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Installs a string payload copied from `bytes`.
    pub fn set_str(&mut self, bytes: &[u8]) {
        *self = Value::Str(bytes.to_vec());
    }

    /// Installs an empty array with backing storage for exactly `capacity`
    /// elements (0 means no backing storage).
    pub fn set_array(&mut self, capacity: usize) {
        *self = Value::Array(Array::with_capacity(capacity));
    }

    /// Installs an empty object with backing storage for exactly `capacity`
    /// members (0 means no backing storage).
    pub fn set_object(&mut self, capacity: usize) {
        *self = Value::Object(Object::with_capacity(capacity));
    }

    /// Moves the representation out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Str(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_null() {
        let value = Value::default();
        assert!(value.is_null());
        assert_eq!(value.kind(), Kind::Null);
    }

    #[test]
    fn test_set_replaces_payload() {
        let mut value = Value::from("old string");
        value.set_number(1.5);
        assert_eq!(value.kind(), Kind::Number);
        assert_eq!(value.number(), 1.5);
        value.set_bool(false);
        assert!(!value.bool_value());
        value.set_null();
        assert!(value.is_null());
    }

    #[test]
    fn test_string_with_embedded_nul() {
        let mut value = Value::Null;
        value.set_str(b"Hello\0World");
        assert_eq!(value.bytes(), b"Hello\0World");
        assert_eq!(value.bytes().len(), 11);
    }

    #[test]
    fn test_as_str_requires_utf8() {
        let value = Value::Str(vec![0xFF, 0xFE]);
        assert!(value.as_str().is_none());
        assert_eq!(value.as_bytes(), Some(&[0xFF, 0xFE][..]));
    }

    #[test]
    fn test_take_leaves_null() {
        let mut value = Value::from(42.0);
        let taken = value.take();
        assert_eq!(taken.number(), 42.0);
        assert!(value.is_null());
    }

    #[test]
    #[should_panic(expected = "expected number, found string")]
    fn test_wrong_kind_access_panics() {
        Value::from("abc").number();
    }
}

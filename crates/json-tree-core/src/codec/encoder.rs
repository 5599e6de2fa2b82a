//! `JsonEncoder` — compact JSON text encoder over [`Value`] trees.
//!
//! Output is emitted into a [`Scratch`] buffer and copied out at the end;
//! no whitespace is inserted. Serializing a well-formed tree cannot fail.

use json_tree_buffers::Scratch;

use crate::value::Value;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub struct JsonEncoder {
    scratch: Scratch,
}

/// Serializes `value` to compact JSON text. The returned vector's length is
/// the exact output length.
pub fn stringify(value: &Value) -> Vec<u8> {
    JsonEncoder::new().encode(value)
}

/// [`stringify`] as a `String`; bytes that are not valid UTF-8 are replaced.
pub fn stringify_string(value: &Value) -> String {
    String::from_utf8_lossy(&stringify(value)).into_owned()
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {
            scratch: Scratch::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.write_any(value);
        let depth = self.scratch.depth();
        self.scratch.discard(depth).to_vec()
    }

    fn write_any(&mut self, value: &Value) {
        match value {
            Value::Null => self.scratch.extend(b"null"),
            Value::Bool(true) => self.scratch.extend(b"true"),
            Value::Bool(false) => self.scratch.extend(b"false"),
            Value::Number(n) => self.write_number(*n),
            Value::Str(s) => self.write_str(s),
            Value::Array(arr) => {
                self.scratch.push(b'[');
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        self.scratch.push(b',');
                    }
                    self.write_any(element);
                }
                self.scratch.push(b']');
            }
            Value::Object(obj) => {
                self.scratch.push(b'{');
                for (i, member) in obj.iter().enumerate() {
                    if i > 0 {
                        self.scratch.push(b',');
                    }
                    self.write_str(member.key());
                    self.scratch.push(b':');
                    self.write_any(member.value());
                }
                self.scratch.push(b'}');
            }
        }
    }

    fn write_number(&mut self, n: f64) {
        let text = format_float(n);
        self.scratch.extend(text.as_bytes());
    }

    /// Emits a quoted, escaped string. The worst case is six output bytes
    /// per input byte (`\u00XX`) plus the two quotes, reserved up front so
    /// the string never straddles a reallocation; the unused tail is
    /// discarded after writing.
    fn write_str(&mut self, bytes: &[u8]) {
        let reserved = bytes.len() * 6 + 2;
        let window = self.scratch.reserve(reserved);
        let mut p = 0;
        window[p] = b'"';
        p += 1;
        for &ch in bytes {
            match ch {
                b'"' | b'\\' => {
                    window[p] = b'\\';
                    window[p + 1] = ch;
                    p += 2;
                }
                0x08 => {
                    window[p] = b'\\';
                    window[p + 1] = b'b';
                    p += 2;
                }
                0x0C => {
                    window[p] = b'\\';
                    window[p + 1] = b'f';
                    p += 2;
                }
                b'\n' => {
                    window[p] = b'\\';
                    window[p + 1] = b'n';
                    p += 2;
                }
                b'\r' => {
                    window[p] = b'\\';
                    window[p + 1] = b'r';
                    p += 2;
                }
                b'\t' => {
                    window[p] = b'\\';
                    window[p + 1] = b't';
                    p += 2;
                }
                ch if ch < 0x20 => {
                    window[p..p + 4].copy_from_slice(b"\\u00");
                    window[p + 4] = HEX_DIGITS[usize::from(ch >> 4)];
                    window[p + 5] = HEX_DIGITS[usize::from(ch & 0x0F)];
                    p += 6;
                }
                // Bytes >= 0x20, multi-byte UTF-8 included, pass through
                // without re-validation.
                ch => {
                    window[p] = ch;
                    p += 1;
                }
            }
        }
        window[p] = b'"';
        p += 1;
        self.scratch.discard(reserved - p);
    }
}

/// Minimal, exactly round-trippable decimal text for a float.
///
/// Non-finite values cannot come out of the decoder (overflow is
/// `NumberTooBig`) but can be installed through `set_number`; they are
/// clamped so serialization stays infallible.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        "null".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "1e308".to_string()
        } else {
            "-1e308".to_string()
        }
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(stringify(&Value::Null), b"null");
        assert_eq!(stringify(&Value::Bool(true)), b"true");
        assert_eq!(stringify(&Value::Bool(false)), b"false");
    }

    #[test]
    fn test_number_text_is_minimal() {
        assert_eq!(stringify(&Value::Number(0.0)), b"0");
        assert_eq!(stringify(&Value::Number(123.0)), b"123");
        assert_eq!(stringify(&Value::Number(1.5)), b"1.5");
        assert_eq!(stringify(&Value::Number(-1.5)), b"-1.5");
    }

    #[test]
    fn test_string_escapes() {
        let value = Value::from("\" \\ \u{8} \u{c} \n \r \t");
        assert_eq!(stringify(&value), b"\"\\\" \\\\ \\b \\f \\n \\r \\t\"");
    }

    #[test]
    fn test_control_bytes_use_uppercase_hex() {
        let value = Value::Str(vec![0x01, 0x1F]);
        assert_eq!(stringify(&value), b"\"\\u0001\\u001F\"");
    }

    #[test]
    fn test_multibyte_utf8_passes_through() {
        let value = Value::from("Hello\u{20AC}");
        assert_eq!(stringify(&value), "\"Hello\u{20AC}\"".as_bytes());
    }

    #[test]
    fn test_nonfinite_clamped() {
        assert_eq!(stringify(&Value::Number(f64::NAN)), b"null");
        assert_eq!(stringify(&Value::Number(f64::INFINITY)), b"1e308");
        assert_eq!(stringify(&Value::Number(f64::NEG_INFINITY)), b"-1e308");
    }
}

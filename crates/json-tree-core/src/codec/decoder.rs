//! `JsonDecoder` — recursive-descent JSON text decoder producing [`Value`]
//! trees.
//!
//! Strings are staged byte by byte into a [`Scratch`] buffer while escapes
//! are resolved, then copied out once the closing quote fixes the length.
//! Arrays and objects are assembled all-or-nothing: any child failure drops
//! every element parsed so far and propagates the child's status unchanged.

use json_tree_buffers::Scratch;

use super::error::ParseError;
use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

pub struct JsonDecoder<'a> {
    data: &'a [u8],
    x: usize,
    scratch: Scratch,
}

/// Parses one JSON value from `input`.
///
/// Leading and trailing whitespace (space, tab, line feed, carriage return)
/// is permitted; anything else after the value is `RootNotSingular`. An
/// empty or whitespace-only input is `ExpectValue`. On error no partially
/// built tree escapes.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    JsonDecoder::new(input).decode()
}

/// [`parse`] over a `&str`.
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

impl<'a> JsonDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            x: 0,
            scratch: Scratch::new(),
        }
    }

    /// Decodes exactly one value spanning the whole input.
    pub fn decode(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x != self.data.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.data.get(self.x) {
            match ch {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn read_any(&mut self) -> Result<Value, ParseError> {
        match self.data.get(self.x) {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.read_literal(b"null", Value::Null),
            Some(b't') => self.read_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.read_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.read_str().map(Value::Str),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(_) => self.read_num(),
        }
    }

    fn read_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, ParseError> {
        let end = self.x + literal.len();
        if end > self.data.len() || &self.data[self.x..end] != literal {
            return Err(ParseError::InvalidValue);
        }
        self.x = end;
        Ok(value)
    }

    /// Validates the number grammar by hand, then converts the accepted
    /// substring with the platform float parser. A leading zero followed by
    /// more digits is not consumed (the token ends after the `0`), matching
    /// the grammar's `0 | [1-9][0-9]*` integer part.
    fn read_num(&mut self) -> Result<Value, ParseError> {
        let data = self.data;
        let start = self.x;
        let mut x = self.x;

        if x < data.len() && data[x] == b'-' {
            x += 1;
        }
        match data.get(x) {
            Some(b'0') => x += 1,
            Some(&ch) if (b'1'..=b'9').contains(&ch) => {
                while x < data.len() && data[x].is_ascii_digit() {
                    x += 1;
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if x < data.len() && data[x] == b'.' {
            x += 1;
            if x >= data.len() || !data[x].is_ascii_digit() {
                return Err(ParseError::InvalidValue);
            }
            while x < data.len() && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < data.len() && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < data.len() && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            if x >= data.len() || !data[x].is_ascii_digit() {
                return Err(ParseError::InvalidValue);
            }
            while x < data.len() && data[x].is_ascii_digit() {
                x += 1;
            }
        }

        // The accepted substring is pure ASCII.
        let text =
            std::str::from_utf8(&data[start..x]).map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.x = x;
        Ok(Value::Number(n))
    }

    /// Reads a quoted string into an owned byte buffer. Used for both string
    /// values and object keys.
    fn read_str(&mut self) -> Result<Vec<u8>, ParseError> {
        let head = self.scratch.depth();
        match self.read_str_body(head) {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                self.scratch.truncate(head);
                Err(err)
            }
        }
    }

    fn read_str_body(&mut self, head: usize) -> Result<Vec<u8>, ParseError> {
        self.x += 1; // opening quote, dispatched on by the caller
        loop {
            match self.data.get(self.x) {
                None => return Err(ParseError::MissQuotationMark),
                Some(b'"') => {
                    self.x += 1;
                    let len = self.scratch.depth() - head;
                    return Ok(self.scratch.discard(len).to_vec());
                }
                Some(b'\\') => {
                    self.x += 1;
                    self.read_escape()?;
                }
                Some(&ch) if ch < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(&ch) => {
                    self.scratch.push(ch);
                    self.x += 1;
                }
            }
        }
    }

    fn read_escape(&mut self) -> Result<(), ParseError> {
        let ch = match self.data.get(self.x) {
            Some(&ch) => ch,
            None => return Err(ParseError::InvalidStringEscape),
        };
        self.x += 1;
        match ch {
            b'"' => self.scratch.push(b'"'),
            b'\\' => self.scratch.push(b'\\'),
            b'/' => self.scratch.push(b'/'),
            b'b' => self.scratch.push(0x08),
            b'f' => self.scratch.push(0x0C),
            b'n' => self.scratch.push(b'\n'),
            b'r' => self.scratch.push(b'\r'),
            b't' => self.scratch.push(b'\t'),
            b'u' => {
                let mut u = self.read_hex4()?;
                if (0xD800..=0xDBFF).contains(&u) {
                    if self.data.get(self.x) != Some(&b'\\') {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    self.x += 1;
                    if self.data.get(self.x) != Some(&b'u') {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    self.x += 1;
                    let u2 = self.read_hex4()?;
                    if !(0xDC00..=0xDFFF).contains(&u2) {
                        return Err(ParseError::InvalidUnicodeSurrogate);
                    }
                    u = (((u - 0xD800) << 10) | (u2 - 0xDC00)) + 0x10000;
                }
                self.push_utf8(u);
            }
            _ => return Err(ParseError::InvalidStringEscape),
        }
        Ok(())
    }

    /// Four case-insensitive hex digits of a `\uXXXX` escape.
    fn read_hex4(&mut self) -> Result<u32, ParseError> {
        let mut u = 0u32;
        for _ in 0..4 {
            let ch = match self.data.get(self.x) {
                Some(&ch) => ch,
                None => return Err(ParseError::InvalidUnicodeHex),
            };
            u <<= 4;
            match ch {
                b'0'..=b'9' => u |= u32::from(ch - b'0'),
                b'A'..=b'F' => u |= u32::from(ch - b'A') + 10,
                b'a'..=b'f' => u |= u32::from(ch - b'a') + 10,
                _ => return Err(ParseError::InvalidUnicodeHex),
            }
            self.x += 1;
        }
        Ok(u)
    }

    /// UTF-8 encodes one code point into the scratch buffer.
    fn push_utf8(&mut self, u: u32) {
        if u <= 0x7F {
            self.scratch.push(u as u8);
        } else if u <= 0x07FF {
            self.scratch.push(0xC0 | ((u >> 6) as u8));
            self.scratch.push(0x80 | (u as u8 & 0x3F));
        } else if u <= 0xFFFF {
            self.scratch.push(0xE0 | ((u >> 12) as u8));
            self.scratch.push(0x80 | ((u >> 6) as u8 & 0x3F));
            self.scratch.push(0x80 | (u as u8 & 0x3F));
        } else {
            // Surrogate combination caps the code point at 0x10FFFF.
            self.scratch.push(0xF0 | ((u >> 18) as u8));
            self.scratch.push(0x80 | ((u >> 12) as u8 & 0x3F));
            self.scratch.push(0x80 | ((u >> 6) as u8 & 0x3F));
            self.scratch.push(0x80 | (u as u8 & 0x3F));
        }
    }

    fn read_arr(&mut self) -> Result<Value, ParseError> {
        self.x += 1; // '['
        self.skip_whitespace();
        let mut arr = Array::new();
        if self.data.get(self.x) == Some(&b']') {
            self.x += 1;
            return Ok(Value::Array(arr));
        }
        loop {
            // A child failure propagates here and drops `arr` whole.
            let element = self.read_any()?;
            *arr.push() = element;
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => {
                    self.x += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.x += 1;
                    arr.shrink_to_fit();
                    return Ok(Value::Array(arr));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn read_obj(&mut self) -> Result<Value, ParseError> {
        self.x += 1; // '{'
        self.skip_whitespace();
        let mut obj = Object::new();
        if self.data.get(self.x) == Some(&b'}') {
            self.x += 1;
            return Ok(Value::Object(obj));
        }
        loop {
            if self.data.get(self.x) != Some(&b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.data.get(self.x) != Some(&b':') {
                return Err(ParseError::MissColon);
            }
            self.x += 1;
            self.skip_whitespace();
            let value = self.read_any()?;
            // Duplicate keys are kept as-is; only Object::set deduplicates.
            obj.push_member(key, value);
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => {
                    self.x += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.x += 1;
                    obj.shrink_to_fit();
                    return Ok(Value::Object(obj));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}

//! Malformed-input matrix: every parse status class with the inputs that
//! must produce it, and nothing else.

use json_tree_core::{parse, ParseError};

fn assert_all(expected: ParseError, inputs: &[&str]) {
    for input in inputs {
        assert_eq!(
            parse(input.as_bytes()),
            Err(expected),
            "input {input:?} must fail with {expected:?}"
        );
    }
}

#[test]
fn expect_value() {
    assert_all(ParseError::ExpectValue, &["", " ", "\t", "\n \r "]);
}

#[test]
fn invalid_value() {
    assert_all(
        ParseError::InvalidValue,
        &[
            "nul", "?", "tru", "folse",
            // structural bytes with no value in front of them
            ",", ":", "]", "}",
            // numbers
            "+0", "+1", ".123", "1.", "INF", "inf", "NAN", "nan", "-",
            "1e", "1e+", "1.e1",
            // value position inside composites
            "[1,]", "[\"a\", nul]",
        ],
    );
}

#[test]
fn root_not_singular() {
    assert_all(
        ParseError::RootNotSingular,
        &["null x", "truex", "0123", "0x0", "0x123", "1 2", "{} []"],
    );
}

#[test]
fn number_too_big() {
    assert_all(ParseError::NumberTooBig, &["1e309", "-1e309", "1e10000"]);
}

#[test]
fn miss_quotation_mark() {
    assert_all(ParseError::MissQuotationMark, &["\"", "\"abc"]);
}

#[test]
fn invalid_string_escape() {
    assert_all(
        ParseError::InvalidStringEscape,
        &["\"\\v\"", "\"\\'\"", "\"\\0\"", "\"\\x12\""],
    );
}

#[test]
fn invalid_string_char() {
    assert_all(ParseError::InvalidStringChar, &["\"\x01\"", "\"\x1F\""]);
}

#[test]
fn invalid_string_char_raw_nul_byte() {
    assert_eq!(
        parse(b"\"a\x00b\""),
        Err(ParseError::InvalidStringChar)
    );
}

#[test]
fn invalid_unicode_hex() {
    assert_all(
        ParseError::InvalidUnicodeHex,
        &[
            "\"\\u\"", "\"\\u0\"", "\"\\u01\"", "\"\\u012\"", "\"\\u/000\"",
            "\"\\uG000\"", "\"\\u0/00\"", "\"\\u0G00\"", "\"\\u00/0\"",
            "\"\\u00G0\"", "\"\\u000/\"", "\"\\u000G\"", "\"\\u 123\"",
        ],
    );
}

#[test]
fn invalid_unicode_surrogate() {
    assert_all(
        ParseError::InvalidUnicodeSurrogate,
        &[
            "\"\\uD800\"",
            "\"\\uDBFF\"",
            "\"\\uD800\\\\\"",
            "\"\\uD800\\uDBFF\"",
            "\"\\uD800\\uE000\"",
        ],
    );
}

#[test]
fn miss_comma_or_square_bracket() {
    assert_all(
        ParseError::MissCommaOrSquareBracket,
        &["[1", "[1}", "[1 2", "[[]"],
    );
}

#[test]
fn miss_key() {
    assert_all(
        ParseError::MissKey,
        &[
            "{:1,", "{1:1,", "{true:1,", "{false:1,", "{null:1,", "{[]:1,",
            "{{}:1,", "{\"a\":1,",
        ],
    );
}

#[test]
fn miss_colon() {
    assert_all(ParseError::MissColon, &["{\"a\"}", "{\"a\",\"b\"}"]);
}

#[test]
fn miss_comma_or_curly_bracket() {
    assert_all(
        ParseError::MissCommaOrCurlyBracket,
        &["{\"a\":1", "{\"a\":1]", "{\"a\":1 \"b\"", "{\"a\":{}"],
    );
}

#[test]
fn child_failure_propagates_unchanged() {
    // The array's own separator errors must not mask the child status.
    assert_eq!(parse(b"[\"\\uD800\"]"), Err(ParseError::InvalidUnicodeSurrogate));
    assert_eq!(parse(b"{\"k\":1e309}"), Err(ParseError::NumberTooBig));
    assert_eq!(parse(b"[[[\"\\v\"]]]"), Err(ParseError::InvalidStringEscape));
}

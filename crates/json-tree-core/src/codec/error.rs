//! Parse status taxonomy.

use thiserror::Error;

/// Every way a parse can fail.
///
/// The taxonomy is closed: composite values propagate the first child
/// failure unchanged after dropping their own partial state, so a failed
/// parse never yields a partially built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a value")]
    ExpectValue,
    #[error("invalid value")]
    InvalidValue,
    #[error("root not singular")]
    RootNotSingular,
    #[error("number too big")]
    NumberTooBig,
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    #[error("invalid string escape")]
    InvalidStringEscape,
    #[error("invalid raw character in string")]
    InvalidStringChar,
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    #[error("missing comma or closing square bracket")]
    MissCommaOrSquareBracket,
    #[error("missing object key")]
    MissKey,
    #[error("missing colon after object key")]
    MissColon,
    #[error("missing comma or closing curly bracket")]
    MissCommaOrCurlyBracket,
}

//! json-tree-core - an in-memory JSON value tree.
//!
//! Parses JSON text into a mutable tagged [`Value`] tree, exposes a typed
//! mutation and query API over arrays and objects, and serializes trees back
//! to compact JSON text.
//!
//! # Example
//!
//! ```
//! use json_tree_core::{parse_str, stringify, Value};
//!
//! let mut value = parse_str(r#"{"greeting":"hello"}"#).unwrap();
//! value.object_mut().set(b"count").set_number(3.0);
//! assert_eq!(
//!     stringify(&value),
//!     br#"{"greeting":"hello","count":3}"#
//! );
//! ```

pub mod array;
pub mod codec;
pub mod object;
pub mod ops;
pub mod value;

pub use array::Array;
pub use codec::decoder::{parse, parse_str, JsonDecoder};
pub use codec::encoder::{stringify, stringify_string, JsonEncoder};
pub use codec::error::ParseError;
pub use object::{Member, Object};
pub use ops::deep_equal;
pub use value::{Kind, Value};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

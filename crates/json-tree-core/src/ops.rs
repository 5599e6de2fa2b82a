//! Deep structural operations over [`Value`] trees.
//!
//! Copying is `Clone` (containers clone with `capacity == size`), moving is
//! [`Value::take`] plus plain assignment, and swapping is `std::mem::swap`;
//! this module supplies the structural equality the derives cannot express.

use crate::array::Array;
use crate::object::Object;
use crate::value::Value;

/// Deep structural equality.
///
/// Type mismatch is unequal. Numbers compare by exact float equality,
/// strings by length and bytes, arrays by length and pairwise in-order
/// equality. Objects compare by member count and, for every member of `a`,
/// the existence in `b` of a first-match same-key member with an equal
/// value — order-independent, but not a multiset comparison: trees holding
/// duplicate keys (which the decoder accepts) may compare unequal even to
/// themselves.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y),
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => false,
    }
}

fn arrays_equal(a: &Array, b: &Array) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| deep_equal(x, y))
}

fn objects_equal(a: &Object, b: &Object) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|member| match b.get(member.key()) {
        Some(other) => deep_equal(member.value(), other),
        None => false,
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        arrays_equal(self, other)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        objects_equal(self, other)
    }
}

//! The comparison primitive shared by every membership operation.
//!
//! [`equals`] is the only equality used by the crate: deletes, unique adds
//! and key lookups all go through it with a [`Comparison`] mode.
//! [`total_cmp`] is the deterministic order used when values have to be
//! sorted.
//!
//! # Loose comparison rules
//!
//! | Left | Right | Rule |
//! |------|-------|------|
//! | null | string/bytes | right must be empty |
//! | null/bool | anything else | both sides as booleans |
//! | number | number | numeric |
//! | number | string/bytes | numeric if the text is numeric, else text of the number |
//! | string/bytes | string/bytes | numeric if both are numeric, else bytewise |
//! | container | container | same keys, loosely equal values, any order |
//! | container | other scalar | never equal |
//!
//! Falsy values: `null`, `false`, `0`, `0.0`, `""`, `"0"`, the empty container.

use std::cmp::Ordering;

use crate::container::Container;
use crate::key::Key;
use crate::value::{Number, Value};

/// Equality mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    /// Same type and same value. Containers must match entry by entry, in order.
    #[default]
    Strict,
    /// Type-coercive equality, see the module docs.
    Loose,
}

impl Comparison {
    /// Returns `true` for `Strict`.
    pub fn is_strict(self) -> bool {
        matches!(self, Comparison::Strict)
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::Strict => "strict",
            Comparison::Loose => "loose",
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `true` maps to `Strict`, `false` to `Loose`.
impl From<bool> for Comparison {
    fn from(strict: bool) -> Self {
        if strict {
            Comparison::Strict
        } else {
            Comparison::Loose
        }
    }
}

/// Compares two values under the given mode.
pub fn equals(a: &Value, b: &Value, mode: Comparison) -> bool {
    match mode {
        Comparison::Strict => strict_eq(a, b),
        Comparison::Loose => loose_eq(a, b),
    }
}

/// Compares two keys under the given mode.
///
/// Keys go through the same rules as values, with `Index` treated as an
/// integer and `Label` as a string. Strict comparison is on the canonical
/// form, so `Label("1")` matches `Index(1)`.
pub fn keys_equal(a: &Key, b: &Key, mode: Comparison) -> bool {
    match mode {
        Comparison::Strict => a.canonical() == b.canonical(),
        Comparison::Loose => loose_eq(&a.to_value(), &b.to_value()),
    }
}

fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bytes(x), Value::Bytes(y)) => x == y,
        (Value::Container(x), Value::Container(y)) => x == y,
        _ => false,
    }
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::String(_) | Value::Bytes(_)) => {
            text_bytes(b).is_some_and(|t| t.is_empty())
        }
        (Value::String(_) | Value::Bytes(_), Value::Null) => {
            text_bytes(a).is_some_and(|t| t.is_empty())
        }
        (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
            truthy(a) == truthy(b)
        }
        (Value::Number(x), Value::Number(y)) => x.compare(*y) == Some(Ordering::Equal),
        (Value::Container(x), Value::Container(y)) => containers_loose_eq(x, y),
        (Value::Number(n), _) => text_bytes(b).is_some_and(|t| number_text_eq(*n, t)),
        (_, Value::Number(n)) => text_bytes(a).is_some_and(|t| number_text_eq(*n, t)),
        _ => match (text_bytes(a), text_bytes(b)) {
            (Some(x), Some(y)) => text_eq(x, y),
            _ => false,
        },
    }
}

fn text_bytes(value: &Value) -> Option<&[u8]> {
    match value {
        Value::String(s) => Some(s.as_bytes()),
        Value::Bytes(b) => Some(b),
        _ => None,
    }
}

fn numeric(text: &[u8]) -> Option<Number> {
    std::str::from_utf8(text).ok().and_then(Number::parse)
}

fn number_text_eq(n: Number, text: &[u8]) -> bool {
    match numeric(text) {
        Some(parsed) => n.compare(parsed) == Some(Ordering::Equal),
        None => n.to_string().as_bytes() == text,
    }
}

fn text_eq(a: &[u8], b: &[u8]) -> bool {
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.compare(y) == Some(Ordering::Equal),
        _ => a == b,
    }
}

fn containers_loose_eq(a: &Container, b: &Container) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| loose_eq(value, other)))
}

/// Boolean interpretation of a value under loose comparison.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Bytes(b) => !(b.is_empty() || b.as_slice() == b"0"),
        Value::Container(c) => !c.is_empty(),
    }
}

/// Deterministic total order over all values.
///
/// Values of different types order by type:
/// `null < bool < number < string < bytes < container`. Numbers order by
/// value with integers before an equal float and NaN after every other
/// number; text orders bytewise; containers order entry by entry (key, then
/// value) and then by length.
///
/// Two values compare `Equal` exactly when they are strictly equal, NaN
/// aside.
pub fn total_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => number_total_cmp(*x, *y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
        (Value::Container(x), Value::Container(y)) => container_total_cmp(x, y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Bytes(_) => 4,
        Value::Container(_) => 5,
    }
}

fn number_total_cmp(x: Number, y: Number) -> Ordering {
    match x.compare(y) {
        // Integers sort before an equal float
        Some(Ordering::Equal) => (!x.is_integer()).cmp(&!y.is_integer()),
        Some(ordering) => ordering,
        None => x.to_f64().is_nan().cmp(&y.to_f64().is_nan()),
    }
}

fn container_total_cmp(a: &Container, b: &Container) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        let ordering = ka.cmp(kb).then_with(|| total_cmp(va, vb));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

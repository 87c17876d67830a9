//! Container keys.

use std::borrow::Cow;
use std::fmt;

use crate::value::{Number, Value};

/// Key of a container entry: a position or a label.
///
/// A label that spells a canonical non-negative decimal (`"5"`, but not
/// `"05"`, `"+5"` or `"5.0"`) denotes the same entry as `Index(5)`. Building a
/// key from a string resolves such labels to indexes, and a [`Container`]
/// stores and looks up keys in that canonical form, so `Label("5")` and
/// `Index(5)` can never both be present.
///
/// [`Container`]: crate::Container
///
/// The derived ordering puts every `Index` before every `Label`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer position.
    Index(u64),
    /// String label.
    Label(String),
}

impl Key {
    /// Builds the key for a string: canonical decimals become `Index`,
    /// anything else a `Label`.
    pub fn from_label(label: impl Into<String>) -> Key {
        let label = label.into();
        match parse_index(&label) {
            Some(i) => Key::Index(i),
            None => Key::Label(label),
        }
    }

    /// Returns the canonical form of this key, borrowing when it already is.
    pub fn canonical(&self) -> Cow<'_, Key> {
        match self.as_label().and_then(parse_index) {
            Some(i) => Cow::Owned(Key::Index(i)),
            None => Cow::Borrowed(self),
        }
    }

    /// Consumes the key and returns its canonical form.
    pub fn into_canonical(self) -> Key {
        match self {
            Key::Label(label) => Key::from_label(label),
            index => index,
        }
    }

    /// Returns `true` if this is an `Index` key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns `true` if this is a `Label` key.
    pub fn is_label(&self) -> bool {
        matches!(self, Key::Label(_))
    }

    /// Extracts the position, if this is an `Index` key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Label(_) => None,
        }
    }

    /// Extracts the label, if this is a `Label` key.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Label(s) => Some(s),
        }
    }

    /// Converts the key into a value so it can go through the comparison
    /// primitive.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(i) => Value::Number(Number::U64(*i)),
            Key::Label(s) => Value::String(s.clone()),
        }
    }
}

// "0", or a digit run without a leading zero that fits in u64.
fn parse_index(s: &str) -> Option<u64> {
    let canonical = match s.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Label(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Key {
    fn from(i: u64) -> Self {
        Key::Index(i)
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Index(i as u64)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i as u64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::from_label(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_kind_checks() {
        assert!(Key::Index(0).is_index());
        assert!(!Key::Index(0).is_label());
        assert!(Key::from("a").is_label());
        assert_eq!(Key::Index(3).as_index(), Some(3));
        assert_eq!(Key::from("a").as_label(), Some("a"));
        assert_eq!(Key::from("a").as_index(), None);
    }

    #[test]
    fn decimal_label_becomes_index() {
        assert_eq!(Key::from("5"), Key::Index(5));
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from(u64::MAX.to_string()), Key::Index(u64::MAX));
    }

    #[test]
    fn non_canonical_numbers_stay_labels() {
        for label in ["05", "00", "-1", "+1", " 1", "1 ", "1.0", "1e3", "", "18446744073709551616"] {
            assert_eq!(Key::from(label), Key::Label(label.to_string()), "{label:?}");
        }
    }

    #[test]
    fn canonical_resolves_direct_labels() {
        let raw = Key::Label("7".to_string());
        assert_eq!(raw.canonical().as_ref(), &Key::Index(7));
        assert_eq!(raw.into_canonical(), Key::Index(7));

        let label = Key::Label("x".to_string());
        assert!(matches!(label.canonical(), Cow::Borrowed(_)));
    }

    #[test]
    fn indexes_order_before_labels() {
        assert!(Key::Index(100) < Key::from("a"));
        assert!(Key::Index(1) < Key::Index(2));
        assert!(Key::from("a") < Key::from("b"));
    }

    #[test]
    fn key_display() {
        assert_eq!(Key::Index(7).to_string(), "7");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}

//! Recursive flattening of nested containers.
//!
//! [`flatten`] walks a container depth-first in iteration order and collects
//! every scalar leaf into one flat container. Nested containers are always
//! descended into; the [`KeyPolicy`] only decides which key a leaf lands on.

use crate::container::Container;
use crate::error::{AssortError, Result};
use crate::key::Key;
use crate::value::Value;

/// Which leaves keep their original key when flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyPolicy {
    /// Every leaf is appended at the next free position.
    Never,
    /// Leaves under a label keep it; leaves under an index are appended.
    #[default]
    StringOnly,
    /// Every leaf keeps its key. A key seen again later overwrites the
    /// earlier leaf, in traversal order.
    Always,
}

impl KeyPolicy {
    /// Returns `true` if a leaf stored under `key` keeps that key.
    pub fn keeps(self, key: &Key) -> bool {
        match self {
            KeyPolicy::Never => false,
            KeyPolicy::StringOnly => key.is_label(),
            KeyPolicy::Always => true,
        }
    }

    /// Returns the display name of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyPolicy::Never => "never",
            KeyPolicy::StringOnly => "string-only",
            KeyPolicy::Always => "always",
        }
    }
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flattens `container` into a new single-level container.
///
/// # Example
///
/// ```
/// use assort::{flatten, Container, Key, KeyPolicy, Value};
///
/// let mut inner = Container::new();
/// inner.push(2);
/// inner.insert(Key::from("c"), 3);
///
/// let mut outer = Container::new();
/// outer.push(1);
/// outer.insert(Key::from("nested"), inner);
///
/// let flat = flatten(&outer, KeyPolicy::StringOnly);
/// let keys: Vec<String> = flat.keys().map(ToString::to_string).collect();
/// assert_eq!(keys, ["0", "1", "c"]);
/// assert_eq!(flat.get(&Key::from("c")), Some(&Value::from(3)));
/// ```
pub fn flatten(container: &Container, policy: KeyPolicy) -> Container {
    let mut acc = Container::new();
    // A fresh accumulator only pushes from zero, so positions cannot run out.
    let _ = descend(container, policy, &mut acc);
    acc
}

/// Flattens `container` onto an existing accumulator and returns it.
///
/// Leaves are appended after whatever `acc` already holds, so the result of
/// one call can be threaded into the next.
///
/// # Errors
///
/// Returns [`AssortError::NoFreePosition`] if a leaf has to be appended
/// while `acc` already holds `Index(u64::MAX)`.
pub fn flatten_into(
    container: &Container,
    policy: KeyPolicy,
    mut acc: Container,
) -> Result<Container> {
    descend(container, policy, &mut acc)?;
    Ok(acc)
}

fn descend(container: &Container, policy: KeyPolicy, acc: &mut Container) -> Result<()> {
    for (key, value) in container {
        match value {
            Value::Container(child) => descend(child, policy, acc)?,
            leaf if policy.keeps(key) => {
                acc.insert(key.clone(), leaf.clone());
            }
            leaf => {
                acc.push(leaf.clone()).ok_or(AssortError::NoFreePosition)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Container {
        let mut deepest = Container::new();
        deepest.insert(Key::from("d"), 4);
        deepest.push(5);

        let mut inner = Container::new();
        inner.push(2);
        inner.insert(Key::from("b"), deepest);
        inner.insert(Key::from("c"), 3);

        let mut outer = Container::new();
        outer.insert(Key::from("a"), 1);
        outer.push(inner);
        outer.push(6);
        outer
    }

    fn keys(c: &Container) -> Vec<String> {
        c.keys().map(ToString::to_string).collect()
    }

    fn values(c: &Container) -> Vec<Value> {
        c.values().cloned().collect()
    }

    #[test]
    fn never_renumbers_every_leaf() {
        let flat = flatten(&nested(), KeyPolicy::Never);
        assert_eq!(keys(&flat), ["0", "1", "2", "3", "4", "5"]);
        let expected: Vec<Value> = [1, 2, 4, 5, 3, 6].into_iter().map(Value::from).collect();
        assert_eq!(values(&flat), expected);
    }

    #[test]
    fn string_only_keeps_labels() {
        let flat = flatten(&nested(), KeyPolicy::StringOnly);
        assert_eq!(keys(&flat), ["a", "0", "d", "1", "c", "2"]);
    }

    #[test]
    fn always_keeps_integer_keys_too() {
        let flat = flatten(&nested(), KeyPolicy::Always);
        // a=1, 0=2, d=4, 0=5 overwrites 2, c=3, 1=6
        assert_eq!(keys(&flat), ["a", "0", "d", "c", "1"]);
        assert_eq!(flat.get(&Key::Index(0)), Some(&Value::from(5)));
        assert_eq!(flat.get(&Key::Index(1)), Some(&Value::from(6)));
    }

    #[test]
    fn always_last_writer_wins() {
        let mut inner = Container::new();
        inner.insert(Key::from("a"), 2);
        let mut outer = Container::new();
        outer.insert(Key::from("a"), 1);
        outer.insert(Key::from("nested"), inner);

        let flat = flatten(&outer, KeyPolicy::Always);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get(&Key::from("a")), Some(&Value::from(2)));
    }

    #[test]
    fn string_only_positional_keys_never_collide() {
        let mut inner = Container::new();
        inner.insert(Key::Index(0), "y");
        let mut outer = Container::new();
        outer.insert(Key::Index(0), "x");
        outer.insert(Key::from("nested"), inner);

        let flat = flatten(&outer, KeyPolicy::StringOnly);
        assert_eq!(keys(&flat), ["0", "1"]);
        assert_eq!(values(&flat), [Value::from("x"), Value::from("y")]);
    }

    #[test]
    fn empty_input_returns_accumulator_unchanged() {
        assert!(flatten(&Container::new(), KeyPolicy::Always).is_empty());

        let mut acc = Container::new();
        acc.push("kept");
        let out = flatten_into(&Container::new(), KeyPolicy::Never, acc.clone()).unwrap();
        assert_eq!(out, acc);
    }

    #[test]
    fn accumulator_is_extended() {
        let mut acc = Container::new();
        acc.push("first");
        let src: Container = vec![Value::from("second")].into_iter().collect();

        let out = flatten_into(&src, KeyPolicy::Never, acc).unwrap();
        assert_eq!(values(&out), [Value::from("first"), Value::from("second")]);
        assert_eq!(keys(&out), ["0", "1"]);
    }

    #[test]
    fn full_accumulator_is_an_error() {
        let mut acc = Container::new();
        acc.insert(Key::Index(u64::MAX), "last");
        let src: Container = vec![Value::from("more")].into_iter().collect();

        let err = flatten_into(&src, KeyPolicy::Never, acc.clone()).unwrap_err();
        assert!(matches!(err, AssortError::NoFreePosition));

        // Labels are not appended, so they still fit.
        let mut labelled = Container::new();
        labelled.insert(Key::from("k"), "v");
        let out = flatten_into(&labelled, KeyPolicy::StringOnly, acc).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn always_keeps_the_largest_index() {
        let mut c = Container::new();
        c.insert(Key::Index(u64::MAX), "x");
        let flat = flatten(&c, KeyPolicy::Always);
        assert_eq!(flat.get(&Key::Index(u64::MAX)), Some(&Value::from("x")));
    }

    #[test]
    fn empty_nested_containers_vanish() {
        let mut outer = Container::new();
        outer.push(Container::new());
        outer.push(1);
        let flat = flatten(&outer, KeyPolicy::Never);
        assert_eq!(values(&flat), [Value::from(1)]);
    }

    #[test]
    fn input_is_untouched() {
        let source = nested();
        let before = source.clone();
        let _ = flatten(&source, KeyPolicy::Always);
        assert_eq!(source, before);
    }

    #[test]
    fn policy_display() {
        assert_eq!(KeyPolicy::default(), KeyPolicy::StringOnly);
        assert_eq!(KeyPolicy::Never.to_string(), "never");
        assert_eq!(KeyPolicy::Always.to_string(), "always");
    }
}

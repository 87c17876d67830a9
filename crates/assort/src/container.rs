//! The ordered key/value container.

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;

use crate::key::Key;
use crate::value::Value;

/// Insertion-ordered map from [`Key`] to [`Value`].
///
/// Besides the entries, a container tracks the next free position: `push`
/// appends at that position, `insert` with an `Index` key moves it past the
/// inserted key, and removals never move it back. A container built with
/// `push` alone therefore has keys `0..n` in order. Once `Index(u64::MAX)`
/// is taken there is no next position and `push` refuses to append.
///
/// Keys are kept in canonical form (see [`Key`]): inserting under
/// `Label("3")` stores `Index(3)`, and lookups resolve the same way.
///
/// Equality is strict and order-sensitive; use
/// [`equals`](crate::equals) with [`Comparison::Loose`](crate::Comparison::Loose)
/// for the coercive variant.
///
/// # Example
///
/// ```
/// use assort::{Container, Key, Value};
///
/// let mut c = Container::new();
/// c.push("a");
/// c.insert(Key::from("name"), "b");
/// c.push("c");
///
/// let keys: Vec<String> = c.keys().map(ToString::to_string).collect();
/// assert_eq!(keys, ["0", "name", "1"]);
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    entries: IndexMap<Key, Value>,
    next_index: Option<u64>,
}

impl Default for Container {
    fn default() -> Self {
        Container::with_capacity(0)
    }
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The position the next [`push`](Self::push) will use, or `None` once
    /// every position is taken.
    pub fn next_index(&self) -> Option<u64> {
        self.next_index
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key.canonical().as_ref())
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key.canonical().as_ref())
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Appends a value at the next free position and returns its key.
    ///
    /// Returns `None`, leaving the container untouched, when there is no
    /// next position.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Index(self.next_index?);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Sets the value at `key`, returning the previous value if any.
    ///
    /// An existing key keeps its position; a new key goes to the end.
    pub fn insert(&mut self, key: Key, value: impl Into<Value>) -> Option<Value> {
        let key = key.into_canonical();
        if let (Key::Index(i), Some(next)) = (&key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        self.entries.insert(key, value.into())
    }

    /// Removes the entry at `key`, keeping the order of the others.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key.canonical().as_ref())
    }

    /// Returns `true` when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(pos, key)| key.as_index() == Some(pos as u64))
    }

    /// Builds a container with the same keys, order and next free position,
    /// passing every value through `f`. Stops at the first error.
    pub fn try_map_values<E>(
        &self,
        mut f: impl FnMut(&Value) -> Result<Value, E>,
    ) -> Result<Container, E> {
        let mut entries = IndexMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            entries.insert(key.clone(), f(value)?);
        }
        Ok(Container {
            entries,
            next_index: self.next_index,
        })
    }

    /// Concatenates two containers.
    ///
    /// Entries of `self` come first, then those of `other`. Index keys from
    /// both sides are renumbered from zero; labels are kept, and a label
    /// present on both sides takes the value from `other` at the position it
    /// first appeared. The result is numbered from zero, so it always has
    /// room for every index entry.
    pub fn merge(&self, other: &Container) -> Container {
        let mut merged = Container::with_capacity(self.len() + other.len());
        for (key, value) in self.iter().chain(other.iter()) {
            match key {
                Key::Index(_) => {
                    merged.push(value.clone());
                }
                Key::Label(_) => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
        merged
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl FromIterator<Value> for Container {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut container = Container::new();
        // Numbered from zero, positions cannot run out.
        for value in iter {
            container.push(value);
        }
        container
    }
}

impl FromIterator<(Key, Value)> for Container {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

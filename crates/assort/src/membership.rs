//! Set-like operations: treat a container's values (or keys) as elements.
//!
//! Every operation here compares through [`equals`]/[`keys_equal`] and
//! returns a new container; the input is never modified.

use indexmap::IndexMap;

use crate::compare::{equals, keys_equal, total_cmp, Comparison};
use crate::container::Container;
use crate::error::{AssortError, Result};
use crate::key::Key;
use crate::value::{Number, Value};

/// Removes every entry whose value matches `value`.
///
/// Surviving entries keep their keys and order.
///
/// # Example
///
/// ```
/// use assort::{delete_by_value, Comparison, Container, Value};
///
/// let c: Container = vec![Value::from("1"), Value::from(1), Value::from("2")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(delete_by_value(&c, &Value::from(1), Comparison::Strict).len(), 2);
/// assert_eq!(delete_by_value(&c, &Value::from(1), Comparison::Loose).len(), 1);
/// ```
pub fn delete_by_value(container: &Container, value: &Value, mode: Comparison) -> Container {
    let mut out = container.clone();
    for (key, _) in container.iter().filter(|(_, item)| equals(item, value, mode)) {
        out.remove(key);
    }
    out
}

/// Removes the entry whose key matches `key`.
///
/// Under loose comparison more than one key can match (`1` and `"1"`); only
/// the first in iteration order is removed.
pub fn delete_by_key(container: &Container, key: &Key, mode: Comparison) -> Container {
    let mut out = container.clone();
    if let Some(found) = container.keys().find(|k| keys_equal(k, key, mode)) {
        out.remove(found);
    }
    out
}

/// Appends `value` unless an equal value is already present.
///
/// A container value is compared as a whole against each element; when it
/// is absent its entries are merged into the result (see
/// [`Container::merge`]) instead of being nested. Any other value is pushed
/// at the next free position.
///
/// # Errors
///
/// Returns [`AssortError::AlreadyExists`] if an equal element is found, and
/// [`AssortError::NoFreePosition`] if a scalar cannot be appended because the
/// container already holds `Index(u64::MAX)`.
pub fn add_unique(container: &Container, value: Value, mode: Comparison) -> Result<Container> {
    if let Some(key) = position(container, &value, mode) {
        tracing::debug!(%key, %mode, "value already present, not added");
        return Err(AssortError::AlreadyExists);
    }
    match value {
        Value::Container(extra) => Ok(container.merge(&extra)),
        scalar => {
            let mut out = container.clone();
            match out.push(scalar) {
                Some(_) => Ok(out),
                None => {
                    tracing::debug!(len = container.len(), "no free position to append at");
                    Err(AssortError::NoFreePosition)
                }
            }
        }
    }
}

/// Returns the key of the first element equal to `value`.
pub fn position<'a>(container: &'a Container, value: &Value, mode: Comparison) -> Option<&'a Key> {
    container
        .iter()
        .find(|(_, item)| equals(item, value, mode))
        .map(|(key, _)| key)
}

/// All keys that share one value, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub value: Value,
    pub keys: Vec<Key>,
}

/// Inverts a container: one [`Group`] per distinct value.
///
/// Groups appear in the order their value is first seen. Values are distinct
/// under strict comparison, so a NaN (or a container holding one) never
/// joins another entry's group.
///
/// # Example
///
/// ```
/// use assort::{group_by_value, Container, Key, Value};
///
/// let mut c = Container::new();
/// c.insert(Key::from("x"), "red");
/// c.insert(Key::from("y"), "blue");
/// c.insert(Key::from("z"), "red");
///
/// let groups = group_by_value(&c);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].value, Value::from("red"));
/// assert_eq!(groups[0].keys, [Key::from("x"), Key::from("z")]);
/// ```
pub fn group_by_value(container: &Container) -> Vec<Group> {
    let mut groups: IndexMap<Identity<'_>, Group> = IndexMap::new();
    for (pos, (key, value)) in container.iter().enumerate() {
        let identity = Identity::of(value).unwrap_or(Identity::Unique(pos));
        groups
            .entry(identity)
            .or_insert_with(|| Group {
                value: value.clone(),
                keys: Vec::new(),
            })
            .keys
            .push(key.clone());
    }
    groups.into_values().collect()
}

/// Hashable stand-in for a value: two values are strictly equal exactly when
/// their identities are equal.
#[derive(PartialEq, Eq, Hash)]
enum Identity<'a> {
    Null,
    Bool(bool),
    Int(i128),
    Float(u64),
    String(&'a str),
    Bytes(&'a [u8]),
    Container(Vec<(&'a Key, Identity<'a>)>),
    /// Equal to nothing but itself; keyed by entry position.
    Unique(usize),
}

impl<'a> Identity<'a> {
    /// `None` when the value holds a NaN, which is not equal even to itself.
    fn of(value: &'a Value) -> Option<Identity<'a>> {
        Some(match value {
            Value::Null => Identity::Null,
            Value::Bool(b) => Identity::Bool(*b),
            Value::Number(Number::I64(n)) => Identity::Int(i128::from(*n)),
            Value::Number(Number::U64(n)) => Identity::Int(i128::from(*n)),
            Value::Number(Number::F64(n)) if n.is_nan() => return None,
            // -0.0 == 0.0
            Value::Number(Number::F64(n)) => Identity::Float((n + 0.0).to_bits()),
            Value::String(s) => Identity::String(s),
            Value::Bytes(b) => Identity::Bytes(b),
            Value::Container(c) => Identity::Container(
                c.iter()
                    .map(|(k, v)| Identity::of(v).map(|id| (k, id)))
                    .collect::<Option<_>>()?,
            ),
        })
    }
}

/// Expands groups back into a container, one entry per key.
///
/// Entries are emitted group by group, each group's keys in order.
pub fn ungroup(groups: &[Group]) -> Container {
    groups
        .iter()
        .flat_map(|g| g.keys.iter().map(|k| (k.clone(), g.value.clone())))
        .collect()
}

/// Returns `true` if both containers hold the same multiset of values,
/// ignoring keys and order.
///
/// Both value sequences are sorted with [`total_cmp`] and compared pairwise,
/// so nested containers are allowed and compare deeply.
pub fn values_equal(a: &Container, b: &Container) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&Value> = a.values().collect();
    let mut right: Vec<&Value> = b.values().collect();
    left.sort_by(|x, y| total_cmp(x, y));
    right.sort_by(|x, y| total_cmp(x, y));
    left.iter().zip(&right).all(|(x, y)| total_cmp(x, y).is_eq())
}

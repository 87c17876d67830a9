//! Assort - stateless helpers over ordered key/value containers.
//!
//! A [`Container`] is an insertion-ordered map from [`Key`] (an integer
//! position or a string label) to [`Value`] (a scalar or another container).
//! Every operation in this crate is a free function that takes containers by
//! reference and returns a new one:
//!
//! - [`flatten`]: collapse nesting into one level, with a [`KeyPolicy`]
//! - [`delete_by_value`], [`delete_by_key`], [`add_unique`]: set-like edits
//! - [`group_by_value`], [`ungroup`]: invert a container by value
//! - [`values_equal`]: multiset comparison ignoring keys and order
//! - [`find_by_substring`]: first string containing a needle
//! - [`filter_out_matching`]: drop entries matching a regular expression
//! - [`normalize_encoding`]: decode legacy-encoded leaves to UTF-8
//!
//! # Quick Start
//!
//! ```rust
//! use assort::{add_unique, flatten, Comparison, Container, KeyPolicy, Value};
//!
//! let nested: Container = serde_json::from_str(r#"[1, [2, [3, 4]], {"k": 5}]"#).unwrap();
//!
//! let flat = flatten(&nested, KeyPolicy::Never);
//! assert_eq!(serde_json::to_string(&flat).unwrap(), "[1,2,3,4,5]");
//!
//! let grown = add_unique(&flat, Value::from(6), Comparison::Strict).unwrap();
//! assert_eq!(grown.len(), 6);
//! assert!(add_unique(&grown, Value::from(6), Comparison::Strict).is_err());
//! ```
//!
//! # Comparison
//!
//! Membership operations take a [`Comparison`] mode. `Strict` requires the
//! same type and value; `Loose` coerces between numbers, numeric strings,
//! booleans and null. Both modes are implemented once, in [`equals`], and
//! every operation goes through it. See the [`compare`] module for the
//! exact loose rules and for [`total_cmp`], the order used by
//! [`values_equal`].
//!
//! # Collaborators
//!
//! Regular-expression matching and character-set conversion sit behind the
//! [`PatternMatcher`] and [`EncodingConverter`] traits. The plain functions
//! use `regex` and `encoding_rs`; the `_with` variants accept any
//! implementation.

pub mod compare;
mod container;
mod encoding;
mod error;
mod flatten;
mod key;
mod membership;
mod pattern;
mod search;
mod serde_impl;
mod value;

// Re-export public API
pub use compare::{equals, keys_equal, total_cmp, Comparison};
pub use container::Container;
pub use encoding::{normalize_encoding, normalize_encoding_with, EncodingConverter, Utf8Converter};
pub use error::{AssortError, Result};
pub use flatten::{flatten, flatten_into, KeyPolicy};
pub use key::Key;
pub use membership::{
    add_unique, delete_by_key, delete_by_value, group_by_value, position, ungroup, values_equal,
    Group,
};
pub use pattern::{filter_out_matching, filter_out_matching_with, PatternMatcher};
pub use search::find_by_substring;
pub use value::{Number, Value};

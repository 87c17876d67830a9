//! Substring search over container values.

use crate::container::Container;
use crate::error::{AssortError, Result};
use crate::value::Value;

/// Returns the first value that contains `needle`.
///
/// Only `String` values are candidates; every other kind, including nested
/// containers, is skipped. An empty needle matches the first string.
///
/// # Errors
///
/// Returns [`AssortError::NotFound`] when no string contains `needle`.
///
/// # Example
///
/// ```
/// use assort::{find_by_substring, Container, Value};
///
/// let files: Container = vec![Value::from("README.md"), Value::from("src/lib.rs")]
///     .into_iter()
///     .collect();
///
/// let hit = find_by_substring("lib", &files).unwrap();
/// assert_eq!(hit.as_str(), Some("src/lib.rs"));
/// assert!(find_by_substring("main", &files).is_err());
/// ```
pub fn find_by_substring<'a>(needle: &str, haystack: &'a Container) -> Result<&'a Value> {
    haystack
        .values()
        .find(|value| value.as_str().is_some_and(|text| text.contains(needle)))
        .ok_or_else(|| {
            tracing::trace!(needle, entries = haystack.len(), "substring not found");
            AssortError::NotFound {
                needle: needle.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    fn haystack() -> Container {
        let mut nested = Container::new();
        nested.push("needle inside nested");

        let mut c = Container::new();
        c.push(42);
        c.insert(Key::from("skip"), nested);
        c.push("first match here");
        c.push("second match here");
        c
    }

    #[test]
    fn returns_first_match_in_order() {
        let c = haystack();
        assert_eq!(
            find_by_substring("match", &c).unwrap(),
            &Value::from("first match here")
        );
        assert_eq!(
            find_by_substring("second", &c).unwrap(),
            &Value::from("second match here")
        );
    }

    #[test]
    fn non_text_values_are_skipped() {
        let c = haystack();
        assert!(matches!(
            find_by_substring("42", &c),
            Err(AssortError::NotFound { .. })
        ));
        assert!(find_by_substring("nested", &c).is_err());
    }

    #[test]
    fn not_found_carries_needle() {
        let err = find_by_substring("zzz", &Container::new()).unwrap_err();
        assert_eq!(err.to_string(), "no element contains \"zzz\"");
    }

    #[test]
    fn empty_needle_matches_first_string() {
        let c = haystack();
        assert_eq!(
            find_by_substring("", &c).unwrap(),
            &Value::from("first match here")
        );
    }
}

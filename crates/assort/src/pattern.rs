//! Pattern-based filtering.
//!
//! The matching itself belongs to a [`PatternMatcher`]; this module only
//! decides which entries survive. [`regex::Regex`] is the default matcher and
//! any `Fn(&str) -> bool` works as a stand-in.

use regex::Regex;

use crate::container::Container;
use crate::error::Result;

/// Decides whether a piece of text matches a pattern.
pub trait PatternMatcher {
    fn is_match(&self, text: &str) -> bool;
}

impl PatternMatcher for Regex {
    fn is_match(&self, text: &str) -> bool {
        Regex::is_match(self, text)
    }
}

impl<F> PatternMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn is_match(&self, text: &str) -> bool {
        self(text)
    }
}

/// Removes every entry whose value matches the regular expression `pattern`.
///
/// Survivors keep their keys and order. See [`filter_out_matching_with`]
/// for how non-text values are matched.
///
/// # Errors
///
/// Returns [`AssortError::InvalidPattern`](crate::AssortError::InvalidPattern)
/// if `pattern` does not compile.
///
/// # Example
///
/// ```
/// use assort::{filter_out_matching, Container, Value};
///
/// let paths: Container = vec![
///     Value::from("src/lib.rs"),
///     Value::from("target/debug"),
///     Value::from(".git/HEAD"),
/// ]
/// .into_iter()
/// .collect();
///
/// let kept = filter_out_matching(&paths, r"^(target|\.git)/").unwrap();
/// assert_eq!(kept.len(), 1);
/// ```
pub fn filter_out_matching(container: &Container, pattern: &str) -> Result<Container> {
    let regex = Regex::new(pattern).inspect_err(|err| {
        tracing::debug!(pattern, error = %err, "pattern failed to compile");
    })?;
    Ok(filter_out_matching_with(container, &regex))
}

/// Removes every entry whose value is matched by `matcher`.
///
/// Scalars are matched against their text form (see
/// [`Value::to_text`](crate::Value::to_text)). Nested containers have no text
/// form, are never matched, and always survive.
pub fn filter_out_matching_with<M>(container: &Container, matcher: &M) -> Container
where
    M: PatternMatcher + ?Sized,
{
    let mut out = container.clone();
    for (key, value) in container {
        if value.to_text().is_some_and(|text| matcher.is_match(&text)) {
            out.remove(key);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssortError;
    use crate::key::Key;
    use crate::value::Value;

    fn sample() -> Container {
        let mut c = Container::new();
        c.push("keep.rs");
        c.insert(Key::from("log"), "debug.log");
        c.push("trace.log");
        c.push(2024);
        c.push(Container::new());
        c
    }

    fn keys(c: &Container) -> Vec<String> {
        c.keys().map(ToString::to_string).collect()
    }

    #[test]
    fn removes_matches_and_keeps_keys() {
        let out = filter_out_matching(&sample(), r"\.log$").unwrap();
        assert_eq!(keys(&out), ["0", "2", "3"]);
    }

    #[test]
    fn numbers_match_on_their_text() {
        let out = filter_out_matching(&sample(), r"^\d+$").unwrap();
        assert!(!out.values().any(|v| v == &Value::from(2024)));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn nested_containers_survive() {
        let out = filter_out_matching(&sample(), ".*").unwrap();
        assert_eq!(keys(&out), ["3"]);
        assert!(out.values().all(Value::is_container));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = filter_out_matching(&sample(), "(unclosed").unwrap_err();
        assert!(matches!(err, AssortError::InvalidPattern(_)));
    }

    #[test]
    fn closure_matcher() {
        let out = filter_out_matching_with(&sample(), &|text: &str| text.starts_with("keep"));
        assert_eq!(out.len(), 4);
        assert!(!out.contains_key(&Key::Index(0)));
    }

    #[test]
    fn input_is_untouched() {
        let source = sample();
        let _ = filter_out_matching(&source, ".").unwrap();
        assert_eq!(source.len(), 5);
    }
}

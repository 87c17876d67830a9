//! Character-encoding normalization.
//!
//! [`normalize_encoding_with`] owns the traversal: it rebuilds the container
//! with the same keys and nesting and hands every scalar leaf, exactly once,
//! to an [`EncodingConverter`]. The default converter, [`Utf8Converter`],
//! decodes [`Value::Bytes`] leaves with `encoding_rs`.

use encoding_rs::Encoding;

use crate::container::Container;
use crate::error::{AssortError, Result};
use crate::value::Value;

/// Converts a single leaf from a named source encoding to UTF-8.
pub trait EncodingConverter {
    /// Returns the converted leaf.
    ///
    /// # Errors
    ///
    /// Returns [`AssortError::UnsupportedEncoding`] when `source_encoding` is
    /// not a label the converter understands.
    fn convert(&self, leaf: &Value, source_encoding: &str) -> Result<Value>;
}

/// Decodes byte leaves into UTF-8 strings using the WHATWG encoding labels.
///
/// `Bytes` leaves become `String`s; malformed sequences decode to U+FFFD.
/// Every other leaf is already text or not text at all and is returned
/// unchanged. The label is checked on every call, whatever the leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Converter;

impl EncodingConverter for Utf8Converter {
    fn convert(&self, leaf: &Value, source_encoding: &str) -> Result<Value> {
        let encoding = Encoding::for_label(source_encoding.as_bytes()).ok_or_else(|| {
            tracing::debug!(label = source_encoding, "unknown source encoding");
            AssortError::UnsupportedEncoding {
                label: source_encoding.to_string(),
            }
        })?;

        Ok(match leaf {
            Value::Bytes(bytes) => {
                let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
                if had_errors {
                    tracing::trace!(
                        encoding = encoding.name(),
                        len = bytes.len(),
                        "malformed input replaced"
                    );
                }
                Value::String(text.into_owned())
            }
            other => other.clone(),
        })
    }
}

/// Re-encodes every leaf from `source_encoding` to UTF-8 using
/// [`Utf8Converter`].
///
/// # Example
///
/// ```
/// use assort::{normalize_encoding, Container, Value};
///
/// let legacy: Container = vec![Value::Bytes(vec![0x63, 0x61, 0x66, 0xe9])]
///     .into_iter()
///     .collect();
///
/// let utf8 = normalize_encoding(&legacy, "ISO-8859-1").unwrap();
/// assert_eq!(utf8.values().next(), Some(&Value::from("café")));
/// ```
pub fn normalize_encoding(container: &Container, source_encoding: &str) -> Result<Container> {
    normalize_encoding_with(container, source_encoding, &Utf8Converter)
}

/// Re-encodes every leaf with the given converter.
///
/// Keys, order and nesting are preserved. The converter is never consulted
/// for an empty container, so an unknown label only surfaces once there is
/// a leaf to convert.
pub fn normalize_encoding_with<C>(
    container: &Container,
    source_encoding: &str,
    converter: &C,
) -> Result<Container>
where
    C: EncodingConverter + ?Sized,
{
    container.try_map_values(|value| match value {
        Value::Container(child) => {
            normalize_encoding_with(child, source_encoding, converter).map(Value::Container)
        }
        leaf => converter.convert(leaf, source_encoding),
    })
}

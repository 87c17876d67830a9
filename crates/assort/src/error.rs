//! Error types for the assort crate.

use thiserror::Error;

/// Errors returned by the fallible container operations.
///
/// `AlreadyExists` and `NotFound` are ordinary outcomes the caller is expected
/// to branch on. The rest describe input the operation cannot work with and
/// are meant to be propagated.
#[derive(Debug, Error)]
pub enum AssortError {
    /// The value passed to [`add_unique`](crate::add_unique) is already present.
    #[error("value already exists in container")]
    AlreadyExists,

    /// An append found no free position: the container already holds
    /// `Index(u64::MAX)`.
    #[error("next position is already occupied")]
    NoFreePosition,

    /// No element contains the searched substring.
    #[error("no element contains {needle:?}")]
    NotFound { needle: String },

    /// The source encoding label is not known to the converter.
    #[error("unsupported source encoding: {label}")]
    UnsupportedEncoding { label: String },

    /// The filter pattern is not a well-formed regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for assort operations.
pub type Result<T> = std::result::Result<T, AssortError>;

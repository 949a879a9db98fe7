//! Error types for comparisons and the response cache.
//!
//! Every failure here is recoverable: callers are expected to turn these
//! into user-facing messages rather than abort.

use thiserror::Error;

/// Errors produced while comparing two inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// One side could not be parsed as its declared kind.
    #[error("error parsing '{file_name}': {detail}")]
    Parse { file_name: String, detail: String },

    /// The two inputs declare different kinds.
    #[error("file types must match: '{name_a}' is {kind_a} but '{name_b}' is {kind_b}")]
    TypeMismatch {
        name_a: String,
        kind_a: String,
        name_b: String,
        kind_b: String,
    },

    /// The declared kind is not one the differ understands.
    #[error("unsupported file type: {extension} (supported types: CSV, TXT, JSON)")]
    UnsupportedType { extension: String },
}

impl DiffError {
    pub(crate) fn parse(file_name: &str, detail: impl ToString) -> Self {
        DiffError::Parse {
            file_name: file_name.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Errors raised by the cache itself.
///
/// Failures of the wrapped computation are never converted into this type;
/// they reach the caller exactly as the computation returned them.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The arguments could not be serialized into a cache key.
    #[error("cannot derive cache key for '{name}': {source}")]
    KeySerialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

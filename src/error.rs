//! Error types for the extra map
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Extra Error Enum ==
/// Unified error type for the extra map.
///
/// Decoding is the only fallible operation; everything else (equality,
/// cloning, encoding) is total over its input domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtraError {
    /// A serialized record could not be split into a key and a value
    #[error("malformed record: {0:?}")]
    MalformedRecord(String),
}

// == Result Type Alias ==
/// Convenience Result type for the extra map.
pub type Result<T> = std::result::Result<T, ExtraError>;

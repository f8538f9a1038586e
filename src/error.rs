//! Error types for ooxml-ns

use thiserror::Error;

/// Main error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag string did not split into exactly `prefix:local`.
    #[error("malformed namespace-prefixed tag '{0}': expected exactly one ':'")]
    MalformedTag(String),

    /// The prefix is not in the namespace registry.
    #[error("unknown namespace prefix '{0}'")]
    UnknownPrefix(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for dialect resolution.
//!
//! This module defines the error type returned when a culture tag cannot
//! be mapped to a built-in dialect.

use thiserror::Error;

/// Error type for dialect lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// No built-in dialect matches the requested culture tag.
    #[error("no Gherkin dialect registered for culture '{culture}'")]
    UnknownCulture {
        /// The culture tag exactly as the caller supplied it.
        culture: String,
    },
}

/// Result type alias for dialect operations.
pub type DialectResult<T> = std::result::Result<T, DialectError>;

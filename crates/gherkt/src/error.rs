//! Error handling module for the gherkt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use gherk_dialect::DialectError;
use thiserror::Error;

/// Main error type for the gherkt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of gherkt commands.
#[derive(Error, Debug)]
pub enum GherktError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the requested language has no built-in dialect.
    #[error("Language error: {0}")]
    Language(#[from] DialectError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GherktError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, GherktError>;

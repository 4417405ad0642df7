//! Common types and utilities for gherkt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use crate::error::{GherktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable one-token-per-line text.
    Text,
    /// Pretty-printed JSON array of token records.
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown output format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format:";
}

// ============================================================================
// Text Utilities
// ============================================================================

/// Split `s` after its first `chars` characters.
///
/// Token positions are character counts while Rust slicing is byte based;
/// this helper walks to the matching byte boundary. Asking for more
/// characters than `s` holds splits at the end.
///
/// # Arguments
/// * `s` - The string to split
/// * `chars` - Number of leading characters to keep in the first half
pub fn split_at_chars(s: &str, chars: usize) -> (&str, &str) {
    let byte = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    s.split_at(byte)
}

// ============================================================================
// Input Validation
// ============================================================================

/// Validate that an input path exists and is a regular file.
///
/// # Arguments
/// * `path` - The path to validate
///
/// # Returns
/// * `Result<()>` - Success or a validation error
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GherktError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(GherktError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    Ok(())
}

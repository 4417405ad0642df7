//! gherk-scan - Line scanner for Gherkin feature file highlighting
//!
//! This crate classifies runs of characters in one line of a Gherkin
//! feature file into token categories by matching an ordered table of
//! regular-expression patterns against the unconsumed remainder of the
//! line. It is the algorithmic core of the Gherk toolchain; dialect data
//! lives in `gherk-dialect` and terminal output in the `gherkt` CLI.
//!
//! # Overview
//!
//! Scanning is table-driven and first-match-wins. A [`PatternTable`] is
//! built once per dialect selection from an ordered keyword list; a
//! [`LineScanner`] then consumes one line at a time, emitting a
//! [`Token`] per call until the line is exhausted. Keywords that match
//! at the current position become [`Category::Keyword`] tokens; anything
//! else is consumed one character at a time as [`Category::PlainText`],
//! so scanning always makes progress and always terminates.
//!
//! # Example Usage
//!
//! ```
//! use gherk_scan::{Category, LineScanner, PatternTable};
//!
//! let table = PatternTable::from_keywords(["Given ", "When ", "Then "]);
//! let mut scanner = LineScanner::new(table);
//!
//! scanner.set_source("Given a pickle", 0);
//! let first = scanner.next_token().unwrap();
//! assert_eq!(first.category, Category::Keyword);
//! assert_eq!((first.start, first.end), (0, 5));
//!
//! // The rest of the line is plain text, one character per token.
//! assert!(scanner.tokens().all(|t| t.category == Category::PlainText));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and category value types
//! - [`table`] - Pattern table construction and prefix matching
//! - [`scanner`] - The stateful per-line scanner
//!
//! # Position Reporting
//!
//! Token positions are inclusive character indices starting at the host
//! offset passed to [`LineScanner::set_source`]. The offset is signed and
//! never validated, so hosts with exotic addressing schemes (or bugs) get
//! their positions back verbatim; matching itself always starts at the
//! beginning of the line text.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod scanner;
pub mod table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use scanner::{LineScanner, Tokens};
pub use table::{PatternEntry, PatternTable};
pub use token::{Category, Token};

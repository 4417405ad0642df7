//! Gherkin dialect registry for the Gherk toolchain.
//!
//! A [`GherkinDialect`] bundles the culture tag, display names, and the
//! ordered keyword list for one spoken language. The list order is part of
//! the contract: downstream scanners try keywords front to back, so every
//! table keeps longer keywords ahead of the shorter keywords they extend.
//!
//! # Example
//!
//! ```
//! use gherk_dialect::resolve;
//!
//! let dialect = resolve("de-AT").unwrap();
//! assert_eq!(dialect.culture(), "de");
//! assert!(dialect.keywords().contains(&"Szenario"));
//! ```
//!
//! Unknown culture tags resolve to [`DialectError::UnknownCulture`] rather
//! than silently falling back to English; callers that want the fallback use
//! [`default_dialect`] explicitly.

#![warn(missing_docs)]

mod dialect;
mod error;
mod languages;

pub use dialect::{all, default_dialect, resolve, GherkinDialect};
pub use error::{DialectError, DialectResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_and_default_agree_on_english() {
        let resolved = resolve("en").unwrap();
        assert_eq!(resolved.culture(), default_dialect().culture());
        assert_eq!(resolved.name(), default_dialect().name());
    }

    #[test]
    fn test_all_exposes_nine_languages() {
        assert_eq!(all().len(), 9);
    }

    #[test]
    fn test_unknown_culture_reports_the_tag() {
        let err = resolve("tlh").unwrap_err();
        assert_eq!(
            err.to_string(),
            "no Gherkin dialect registered for culture 'tlh'"
        );
    }
}

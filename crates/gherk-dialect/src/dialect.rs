//! Dialect type and culture-tag resolution.
//!
//! A [`GherkinDialect`] bundles the ordered keyword list of one Gherkin
//! language together with its culture tag and display names. Dialects are
//! static data; resolution is a plain table lookup with a primary-subtag
//! fallback ("en-US" falls back to "en"). No locale APIs are consulted.

use crate::error::{DialectError, DialectResult};
use crate::languages::DIALECTS;

/// The keyword set of one Gherkin language.
///
/// Keyword order is significant and is part of the data: consumers match
/// keywords first-come-first-served, so every dialect lists longer keywords
/// before shorter ones that share a prefix ("Scenario Outline" before
/// "Scenario"). Step keywords carry their trailing space, the way the
/// Gherkin language tables write them; the bare `*` step keyword does not.
///
/// # Example
///
/// ```
/// use gherk_dialect::resolve;
///
/// let dialect = resolve("en").unwrap();
/// assert_eq!(dialect.culture(), "en");
/// assert!(dialect.keywords().contains(&"Given "));
/// ```
#[derive(Debug)]
pub struct GherkinDialect {
    culture: &'static str,
    name: &'static str,
    native: &'static str,
    keywords: &'static [&'static str],
}

impl GherkinDialect {
    /// Creates a dialect entry. Only the built-in tables construct these.
    pub(crate) const fn new(
        culture: &'static str,
        name: &'static str,
        native: &'static str,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            culture,
            name,
            native,
            keywords,
        }
    }

    /// Returns the culture tag this dialect is registered under (e.g. "en").
    pub fn culture(&self) -> &'static str {
        self.culture
    }

    /// Returns the English name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the native name of the language.
    pub fn native(&self) -> &'static str {
        self.native
    }

    /// Returns the ordered keyword list for this dialect.
    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }
}

/// Resolves a culture tag to a built-in dialect.
///
/// The tag is matched case-insensitively against the registered culture
/// tags. A regional tag whose exact form is not registered falls back to
/// its primary language subtag, so "de-AT" resolves to the "de" dialect.
///
/// # Errors
///
/// Returns [`DialectError::UnknownCulture`] when neither the tag nor its
/// primary subtag is registered.
///
/// # Example
///
/// ```
/// use gherk_dialect::resolve;
///
/// assert_eq!(resolve("sv").unwrap().name(), "Swedish");
/// assert_eq!(resolve("en-US").unwrap().culture(), "en");
/// assert!(resolve("tlh").is_err());
/// ```
pub fn resolve(culture: &str) -> DialectResult<&'static GherkinDialect> {
    let tag = culture.trim();

    if let Some(dialect) = lookup(tag) {
        return Ok(dialect);
    }
    if let Some((primary, _)) = tag.split_once('-') {
        if let Some(dialect) = lookup(primary) {
            return Ok(dialect);
        }
    }

    Err(DialectError::UnknownCulture {
        culture: culture.to_string(),
    })
}

/// Returns the dialect used when the host expresses no preference: English.
pub fn default_dialect() -> &'static GherkinDialect {
    &DIALECTS[0]
}

/// Returns every built-in dialect in registration order.
pub fn all() -> &'static [GherkinDialect] {
    &DIALECTS
}

fn lookup(tag: &str) -> Option<&'static GherkinDialect> {
    DIALECTS
        .iter()
        .find(|dialect| dialect.culture.eq_ignore_ascii_case(tag))
}

//! Ordered keyword pattern tables.
//!
//! A [`PatternTable`] is the immutable half of the scanner: an ordered list
//! of regex-source patterns, each tagged with the [`Category`] it yields,
//! compiled once at construction. Order is significant. The line scanner
//! tries entries front to back and the first non-empty match wins, even
//! when a later entry would match more text.

use regex::Regex;

use crate::token::Category;

/// One pattern/category pair in a [`PatternTable`].
///
/// The pattern is an unanchored regex source fragment; the table anchors it
/// to the start of the unconsumed text when compiling. Entries are
/// immutable once built.
#[derive(Clone, Debug)]
pub struct PatternEntry {
    pattern: String,
    category: Category,
}

impl PatternEntry {
    /// Creates an entry from raw regex source and a category.
    ///
    /// The pattern is taken verbatim. Callers that want a literal keyword
    /// matched should escape metacharacters themselves or go through
    /// [`PatternTable::from_keywords`].
    pub fn new(pattern: impl Into<String>, category: Category) -> Self {
        Self {
            pattern: pattern.into(),
            category,
        }
    }

    /// Returns the regex source for this entry.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the category this entry classifies matches as.
    pub fn category(&self) -> Category {
        self.category
    }
}

/// A compiled entry. `regex` is `None` when the pattern source failed to
/// compile; such slots are skipped on every match attempt.
#[derive(Clone, Debug)]
struct Slot {
    entry: PatternEntry,
    regex: Option<Regex>,
}

/// A successful anchored match of the table against the start of a text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrefixMatch {
    /// Matched length in bytes, for advancing the line buffer.
    pub bytes: usize,
    /// Matched length in characters, for advancing reported offsets.
    pub chars: usize,
    /// Category of the winning entry.
    pub category: Category,
}

/// An ordered, precompiled table of classification patterns.
///
/// Construction compiles every entry to a start-anchored regex
/// (`^(?:pattern)`). A pattern that fails to compile stays in the table but
/// never matches, so a malformed keyword costs coverage without ever
/// aborting a scan. The table is read-only after construction and cheap to
/// clone; one table may back any number of scanners.
///
/// # Example
///
/// ```
/// use gherk_scan::PatternTable;
///
/// let table = PatternTable::from_keywords(["Given ", "When ", "Then "]);
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PatternTable {
    slots: Vec<Slot>,
}

impl PatternTable {
    /// Builds a table from an ordered dialect keyword list.
    ///
    /// Every keyword becomes a [`Category::Keyword`] entry, in input order.
    /// A keyword that trims to a bare `*` is inserted as the literal
    /// pattern `\*`; every other keyword is inserted verbatim as regex
    /// source and simply goes dead if it does not compile.
    ///
    /// # Example
    ///
    /// ```
    /// use gherk_scan::PatternTable;
    ///
    /// let table = PatternTable::from_keywords(["*", "Given "]);
    /// let patterns: Vec<&str> = table.entries().map(|e| e.pattern()).collect();
    /// assert_eq!(patterns, [r"\*", "Given "]);
    /// ```
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = keywords
            .into_iter()
            .map(|keyword| {
                PatternEntry::new(keyword_pattern(keyword.as_ref()), Category::Keyword)
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Builds a table from explicit entries, preserving their order.
    ///
    /// This is the general constructor for hosts that need hand-written
    /// patterns or per-entry categories.
    pub fn from_entries(entries: Vec<PatternEntry>) -> Self {
        let slots = entries
            .into_iter()
            .map(|entry| {
                let regex = compile_anchored(entry.pattern());
                Slot { entry, regex }
            })
            .collect();
        Self { slots }
    }

    /// Returns the number of entries, dead ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates the entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    /// Tries every entry in order against the start of `text` and returns
    /// the first non-empty match.
    ///
    /// Dead slots and zero-length matches are skipped. `None` tells the
    /// caller to fall back to consuming a single character.
    pub(crate) fn match_prefix(&self, text: &str) -> Option<PrefixMatch> {
        for slot in &self.slots {
            let regex = match &slot.regex {
                Some(regex) => regex,
                None => continue,
            };
            if let Some(m) = regex.find(text) {
                if m.is_empty() {
                    continue;
                }
                return Some(PrefixMatch {
                    bytes: m.end(),
                    chars: m.as_str().chars().count(),
                    category: slot.entry.category(),
                });
            }
        }
        None
    }
}

/// Maps one dialect keyword to its pattern source.
///
/// A keyword that trims to a bare star denotes "any step keyword" in many
/// dialects and must match literally, not parse as a repetition operator.
fn keyword_pattern(keyword: &str) -> String {
    if keyword.trim() == "*" {
        r"\*".to_string()
    } else {
        keyword.to_string()
    }
}

/// Compiles `pattern` anchored to the start of its input, or `None` when
/// the source is not a valid regex.
fn compile_anchored(pattern: &str) -> Option<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).ok()
}

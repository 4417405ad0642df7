//! The stateful single-line scanner.
//!
//! [`LineScanner`] drives a [`PatternTable`] over one line at a time. The
//! host feeds a line plus a start offset with
//! [`set_source`](LineScanner::set_source), then pulls tokens with
//! [`next_token`](LineScanner::next_token) until the line is exhausted.
//! State is per line only; nothing carries over between lines except the
//! table itself.

use gherk_dialect::GherkinDialect;

use crate::table::PatternTable;
use crate::token::{Category, Token};

/// Mutable per-line state, replaced wholesale by `set_source`.
#[derive(Clone, Debug)]
struct LineState {
    /// Full line text for the current session.
    text: String,
    /// Byte index of the first unconsumed character.
    consumed: usize,
    /// Reported character offset of the next token.
    offset: i32,
}

impl LineState {
    fn remaining(&self) -> &str {
        &self.text[self.consumed..]
    }
}

/// A stateful scanner that classifies one line at a time.
///
/// The scanner owns an immutable [`PatternTable`] for the lifetime of one
/// dialect selection, plus per-line position state. The caller keeps the
/// scanner across lines and re-feeds it; switching dialects means building
/// a new scanner. Matching is first-match-wins over the table order, never
/// longest-match, and every call consumes at least one character, so a scan
/// always terminates.
///
/// # Example
///
/// ```
/// use gherk_scan::{Category, LineScanner, PatternTable};
///
/// let table = PatternTable::from_keywords(["Given ", "When ", "Then "]);
/// let mut scanner = LineScanner::new(table);
///
/// scanner.set_source("Given a pickle", 0);
/// let first = scanner.next_token().unwrap();
/// assert_eq!(first.category, Category::Keyword);
/// assert_eq!((first.start, first.end), (0, 5));
/// ```
#[derive(Clone, Debug)]
pub struct LineScanner {
    table: PatternTable,
    line: Option<LineState>,
}

impl LineScanner {
    /// Creates a scanner backed by the given pattern table.
    pub fn new(table: PatternTable) -> Self {
        Self { table, line: None }
    }

    /// Creates a scanner for one Gherkin dialect, building its pattern
    /// table from the dialect's ordered keyword list.
    ///
    /// # Example
    ///
    /// ```
    /// use gherk_dialect::default_dialect;
    /// use gherk_scan::LineScanner;
    ///
    /// let scanner = LineScanner::for_dialect(default_dialect());
    /// assert!(!scanner.table().is_empty());
    /// ```
    pub fn for_dialect(dialect: &GherkinDialect) -> Self {
        Self::new(PatternTable::from_keywords(dialect.keywords()))
    }

    /// Returns the scanner's pattern table.
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Starts a new scanning session over `line`.
    ///
    /// `start_offset` is the host's index for the first character of the
    /// line. It is reported verbatim in token positions and never
    /// validated, so a negative or out-of-range offset shifts reported
    /// positions without affecting what matches. Any previous session
    /// state is discarded.
    pub fn set_source(&mut self, line: impl Into<String>, start_offset: i32) {
        self.line = Some(LineState {
            text: line.into(),
            consumed: 0,
            offset: start_offset,
        });
    }

    /// Extracts the next token from the current line.
    ///
    /// Table entries are tried in order against the unconsumed remainder;
    /// the first non-empty anchored match wins even when a later entry
    /// would match more characters. When nothing matches, exactly one
    /// character is consumed as [`Category::PlainText`]. Returns `None`
    /// once the line is exhausted, and keeps returning `None` until the
    /// next [`set_source`](LineScanner::set_source).
    ///
    /// # Panics
    ///
    /// Panics if called before [`set_source`](LineScanner::set_source).
    ///
    /// # Example
    ///
    /// ```
    /// use gherk_scan::{LineScanner, PatternTable};
    ///
    /// let mut scanner = LineScanner::new(PatternTable::from_keywords(["Then "]));
    /// scanner.set_source("ok", 10);
    ///
    /// let tokens: Vec<_> = scanner.tokens().collect();
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!((tokens[0].start, tokens[1].start), (10, 11));
    /// ```
    pub fn next_token(&mut self) -> Option<Token> {
        let line = self
            .line
            .as_mut()
            .expect("LineScanner::next_token called before set_source");

        let rest = line.remaining();
        if rest.is_empty() {
            return None;
        }

        let (bytes, chars, category) = match self.table.match_prefix(rest) {
            Some(found) => (found.bytes, found.chars, found.category),
            None => {
                // Unrecognized prefix: consume exactly one character.
                let first = rest.chars().next().map_or(1, char::len_utf8);
                (first, 1, Category::PlainText)
            }
        };

        let start = line.offset;
        let end = start.max(start + chars as i32 - 1);

        line.consumed += bytes;
        line.offset += chars as i32;

        Some(Token::new(category, start, end))
    }

    /// Returns a draining iterator over the current line's remaining
    /// tokens.
    ///
    /// Equivalent to calling [`next_token`](LineScanner::next_token) until
    /// it returns `None`.
    ///
    /// # Panics
    ///
    /// Panics on iteration if no source was ever set.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens { scanner: self }
    }
}

/// Draining token iterator returned by [`LineScanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: &'a mut LineScanner,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scanner.next_token()
    }
}

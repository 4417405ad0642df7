//! Token types produced by the line scanner.
//!
//! A token is a classified, inclusive character range over one scanned line.
//! Tokens are plain values: the scanner emits them one at a time and keeps
//! no token storage of its own.

use std::fmt;

/// Classification tag attached to every scanned token.
///
/// The set is closed. Pattern-table entries built from dialect keywords all
/// carry [`Category::Keyword`]; the single-character fallback emits
/// [`Category::PlainText`]. Hosts map these onto their own color or style
/// codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The span matched one of the pattern table's entries.
    Keyword,
    /// Ordinary text that matched no table entry.
    PlainText,
}

impl Category {
    /// Returns the lowercase display name for this category.
    ///
    /// # Example
    ///
    /// ```
    /// use gherk_scan::Category;
    ///
    /// assert_eq!(Category::Keyword.as_str(), "keyword");
    /// assert_eq!(Category::PlainText.as_str(), "text");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::PlainText => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, inclusive character range within one scanned line.
///
/// `start` and `end` live in the host's addressing scheme: they begin at
/// whatever offset was passed to
/// [`LineScanner::set_source`](crate::LineScanner::set_source) and advance
/// by one per Unicode scalar value. Every token the scanner produces spans
/// at least one character, so `end >= start` always holds.
///
/// # Example
///
/// ```
/// use gherk_scan::{Category, Token};
///
/// let token = Token::new(Category::Keyword, 0, 5);
/// assert_eq!(token.char_count(), 6);
/// assert!(token.is_keyword());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Classification of the spanned text.
    pub category: Category,
    /// Inclusive start index. Negative when the host offset was.
    pub start: i32,
    /// Inclusive end index, never below `start`.
    pub end: i32,
}

impl Token {
    /// Creates a token spanning `start..=end` with the given category.
    pub fn new(category: Category, start: i32, end: i32) -> Self {
        Self {
            category,
            start,
            end,
        }
    }

    /// Returns the number of characters the token spans.
    ///
    /// # Example
    ///
    /// ```
    /// use gherk_scan::{Category, Token};
    ///
    /// let token = Token::new(Category::PlainText, 3, 3);
    /// assert_eq!(token.char_count(), 1);
    /// ```
    pub fn char_count(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1).max(0) as usize
    }

    /// Returns true if the token was classified as a dialect keyword.
    pub fn is_keyword(&self) -> bool {
        self.category == Category::Keyword
    }
}

//! Character cursor for traversing an expression.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking through the source one character at a time. It handles
//! UTF-8 encoding correctly and exposes the end of the text as an explicit
//! sentinel (`None`) instead of a magic character.

/// A cursor over a borrowed source string.
///
/// The position only ever moves forward. Once it reaches the end of the
/// text, `current_char` returns `None` and every further `advance` is a
/// no-op, so the sentinel is never "un-observed".
///
/// # Example
///
/// ```
/// use convex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1+");
/// assert_eq!(cursor.current_char(), Some('1'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('+'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source, always on a char boundary.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at the end of text.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if the cursor is already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use convex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t7");
    /// cursor.advance_while(char::is_whitespace);
    /// assert_eq!(cursor.current_char(), Some('7'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.current_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use convex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123+4");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.slice_from(start), "123");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

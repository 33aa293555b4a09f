//! Pull-based lexer for arithmetic expressions.
//!
//! The lexer produces exactly one token per call to [`Lexer::next_token`].
//! Nothing is materialised up front: characters are read from the cursor
//! only when the next token is requested.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::error::{SyntaxError, SyntaxResult};
use crate::token::{Token, TokenKind};

/// The lexer for one line of input.
///
/// # Example
///
/// ```
/// use convex_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("12 * (3)");
/// assert_eq!(lexer.next_token(), Ok(Token::integer(12)));
/// assert_eq!(lexer.next_token(), Ok(Token::symbol(TokenKind::Mul)));
/// assert_eq!(lexer.next_token(), Ok(Token::symbol(TokenKind::LParen)));
/// assert_eq!(lexer.next_token(), Ok(Token::integer(3)));
/// assert_eq!(lexer.next_token(), Ok(Token::symbol(TokenKind::RParen)));
/// assert_eq!(lexer.next_token(), Ok(Token::end_of_input()));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Set once the iterator has yielded its last item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            exhausted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace between tokens is skipped. Once the end of the text is
    /// reached every further call returns `EndOfInput`.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] carrying the full source when the current
    /// character is not whitespace, a digit, an operator or a parenthesis,
    /// or when an integer literal does not fit in an `i64`.
    pub fn next_token(&mut self) -> SyntaxResult<Token> {
        self.skip_whitespace();

        let Some(c) = self.current_char() else {
            return Ok(Token::end_of_input());
        };

        if c.is_ascii_digit() {
            return self.read_integer().map(Token::integer);
        }

        match TokenKind::from_symbol(c) {
            Some(kind) => {
                self.advance();
                Ok(Token::symbol(kind))
            },
            None => Err(self.error()),
        }
    }

    /// Returns the full source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Builds a syntax error for the line being scanned.
    pub fn error(&self) -> SyntaxError {
        SyntaxError::new(self.cursor.source())
    }

    fn current_char(&self) -> Option<char> {
        self.cursor.current_char()
    }

    /// Moves one character forward; stays on the sentinel at the end.
    fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Skips Unicode whitespace and the ASCII separators `\x1c`..=`\x1f`.
    fn skip_whitespace(&mut self) {
        self.cursor
            .advance_while(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c));
    }

    /// Scans a run of ASCII digits. The caller has already checked that the
    /// current character is a digit.
    fn read_integer(&mut self) -> SyntaxResult<i64> {
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c.is_ascii_digit());
        debug_assert!(self.cursor.position() > start);

        self.cursor
            .slice_from(start)
            .parse::<i64>()
            .map_err(|_| self.error())
    }
}

/// Yields tokens up to, but not including, `EndOfInput`.
///
/// A syntax error is yielded once and ends the iteration.
impl<'a> Iterator for Lexer<'a> {
    type Item = SyntaxResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.exhausted = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            },
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|t| t.expect("unexpected syntax error").kind())
            .collect()
    }

    #[test]
    fn test_all_symbols() {
        assert_eq!(
            kinds("+-*/()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_integer_payload() {
        let mut lexer = Lexer::new("007 1234");
        assert_eq!(lexer.next_token(), Ok(Token::integer(7)));
        assert_eq!(lexer.next_token(), Ok(Token::integer(1234)));
    }

    #[test]
    fn test_advance_and_sentinel() {
        let mut lexer = Lexer::new("ab");
        assert_eq!(lexer.current_char(), Some('a'));
        lexer.advance();
        assert_eq!(lexer.current_char(), Some('b'));
        lexer.advance();
        assert_eq!(lexer.current_char(), None);
        lexer.advance();
        assert_eq!(lexer.current_char(), None);
        assert_eq!(lexer.position(), 2);
    }

    #[test]
    fn test_skip_whitespace_mixed() {
        let mut lexer = Lexer::new(" \t\u{a0}\r9");
        lexer.skip_whitespace();
        assert_eq!(lexer.current_char(), Some('9'));
        lexer.skip_whitespace();
        assert_eq!(lexer.current_char(), Some('9'));
    }

    #[test]
    fn test_skip_whitespace_ascii_separators() {
        let mut lexer = Lexer::new("\u{1c}\u{1d}1\u{1e}+\u{1f}2");
        assert_eq!(lexer.next_token(), Ok(Token::integer(1)));
        assert_eq!(lexer.next_token(), Ok(Token::symbol(TokenKind::Plus)));
        assert_eq!(lexer.next_token(), Ok(Token::integer(2)));
        assert_eq!(lexer.next_token(), Ok(Token::end_of_input()));
    }

    #[test]
    fn test_read_integer_stops_at_non_digit() {
        let mut lexer = Lexer::new("42+1");
        assert_eq!(lexer.read_integer(), Ok(42));
        assert_eq!(lexer.current_char(), Some('+'));
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("1");
        assert_eq!(lexer.next_token(), Ok(Token::integer(1)));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Ok(Token::end_of_input()));
        }
    }

    #[test]
    fn test_unrecognized_character_carries_full_source() {
        let mut lexer = Lexer::new("2 & 3");
        assert_eq!(lexer.next_token(), Ok(Token::integer(2)));
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.expression(), "2 & 3");
    }

    #[test]
    fn test_literal_overflow_is_syntax_error() {
        let mut lexer = Lexer::new("99999999999999999999");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.expression(), "99999999999999999999");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("1 $ 2").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_iterator_excludes_end_marker() {
        let mut lexer = Lexer::new("  ");
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_digit_strings_lex_to_their_value() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,18}")| {
            let tokens: Vec<_> = Lexer::new(&input).collect();
            assert_eq!(tokens.len(), 1);
            let expected: i64 = input.parse().unwrap();
            assert_eq!(tokens[0], Ok(Token::integer(expected)));
        });
    }

    #[test]
    fn test_property_whitespace_is_insignificant() {
        use proptest::prelude::*;

        proptest!(|(pad in "[ \t]{0,4}")| {
            let spaced = format!("{pad}1{pad}+{pad}(2{pad}*{pad}3){pad}");
            assert_eq!(kinds(&spaced), kinds("1+(2*3)"));
        });
    }
}

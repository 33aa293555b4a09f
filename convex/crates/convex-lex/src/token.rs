//! Token definitions.
//!
//! A token is a `(kind, value)` pair. Only integer tokens carry a payload;
//! every other kind is fully described by its [`TokenKind`].

use std::fmt;

/// The closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal integer literal
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of the input line
    EndOfInput,
}

impl TokenKind {
    /// Returns the kind for a single-character operator or parenthesis.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// Returns the source spelling of symbol kinds.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Mul => Some('*'),
            Self::Div => Some('/'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Integer | Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (_, Some(c)) => write!(f, "{}", c),
            (Self::Integer, None) => write!(f, "integer"),
            _ => write!(f, "end of input"),
        }
    }
}

/// A single lexical unit.
///
/// Tokens are immutable once created.
///
/// # Example
///
/// ```
/// use convex_lex::{Token, TokenKind};
///
/// let token = Token::integer(42);
/// assert_eq!(token.kind(), TokenKind::Integer);
/// assert_eq!(token.value(), Some(42));
///
/// let plus = Token::symbol(TokenKind::Plus);
/// assert_eq!(plus.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: Option<i64>,
}

impl Token {
    /// Creates an integer literal token.
    pub fn integer(value: i64) -> Self {
        Self {
            kind: TokenKind::Integer,
            value: Some(value),
        }
    }

    /// Creates a payload-free token.
    ///
    /// Integer tokens must be built with [`Token::integer`]; passing
    /// `TokenKind::Integer` here yields a token without a value.
    pub fn symbol(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    /// Creates the end-of-input marker.
    pub fn end_of_input() -> Self {
        Self::symbol(TokenKind::EndOfInput)
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the integer payload, if any.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Returns true for the end-of-input marker.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.kind.symbol()) {
            (Some(v), _) => write!(f, "<Token type={:?} value={}>", self.kind, v),
            (None, Some(c)) => write!(f, "<Token type={:?} value={}>", self.kind, c),
            (None, None) => write!(f, "<Token type={:?}>", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for c in ['+', '-', '*', '/', '(', ')'] {
            let kind = TokenKind::from_symbol(c).unwrap();
            assert_eq!(kind.symbol(), Some(c));
        }
        assert_eq!(TokenKind::from_symbol('&'), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Mul.to_string(), "*");
        assert_eq!(TokenKind::Integer.to_string(), "integer");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::integer(7).to_string(), "<Token type=Integer value=7>");
        assert_eq!(
            Token::symbol(TokenKind::LParen).to_string(),
            "<Token type=LParen value=(>"
        );
        assert_eq!(Token::end_of_input().to_string(), "<Token type=EndOfInput>");
    }
}

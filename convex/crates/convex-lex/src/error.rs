//! Lexical and grammatical error type.

use thiserror::Error;

/// The input does not conform to the expression grammar.
///
/// The error carries the whole expression that was being scanned rather than
/// a position, so the caller can echo the failing line back in full.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid syntax")]
pub struct SyntaxError {
    expression: String,
}

impl SyntaxError {
    /// Creates a syntax error for the given source text.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Returns the full expression that failed.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Result type alias for lexing and parsing operations
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;

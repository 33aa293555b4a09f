//! Evaluation error types.
//!
//! Grammar violations are [`SyntaxError`]s (defined by the lexer crate);
//! numeric faults during folding are [`ArithmeticError`]s. Both keep the
//! full expression for diagnostics.

use convex_lex::SyntaxError;
use thiserror::Error;

/// A well-formed expression whose arithmetic cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor evaluated to zero
    #[error("division by zero")]
    DivisionByZero { expression: String },

    /// An exact integer result left the `i64` range
    #[error("integer overflow")]
    Overflow { expression: String },
}

impl ArithmeticError {
    /// Returns the full expression that failed.
    pub fn expression(&self) -> &str {
        match self {
            Self::DivisionByZero { expression } | Self::Overflow { expression } => expression,
        }
    }
}

/// Any failure while evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input does not match the grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The arithmetic failed
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Parentheses are nested deeper than the evaluator will recurse
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { expression: String, limit: usize },
}

impl EvalError {
    /// Returns the full expression that failed.
    pub fn expression(&self) -> &str {
        match self {
            Self::Syntax(e) => e.expression(),
            Self::Arithmetic(e) => e.expression(),
            Self::NestingTooDeep { expression, .. } => expression,
        }
    }

    /// Short category name used when reporting the error.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "SyntaxError",
            Self::Arithmetic(_) => "ArithmeticError",
            Self::NestingTooDeep { .. } => "RecursionError",
        }
    }
}

/// Result type alias for evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

//! convex-eval - Expression Evaluator for Convex
//!
//! Drives a three-level recursive-descent grammar over the token stream of
//! [`convex_lex::Lexer`] and computes the value during the descent.
//!
//! # Example Usage
//!
//! ```
//! use convex_eval::{evaluate, EvalError, Number};
//!
//! assert_eq!(evaluate("(2 + 3) * 4"), Ok(Number::Int(20)));
//! assert_eq!(evaluate("7 / 2"), Ok(Number::Float(3.5)));
//! assert!(matches!(evaluate("2 & 3"), Err(EvalError::Syntax(_))));
//! assert!(matches!(evaluate("1 / 0"), Err(EvalError::Arithmetic(_))));
//! ```
//!
//! # Numeric Semantics
//!
//! Integer literals and `+`, `-`, `*` between integers are exact `i64`
//! arithmetic (overflow is an [`ArithmeticError`]). `/` is true division and
//! widens the running value to a float for the rest of the fold.
//!
//! # Module Structure
//!
//! - [`evaluator`] - The recursive-descent evaluator
//! - [`number`] - Integer/float result type
//! - [`error`] - Arithmetic and combined evaluation errors

pub mod error;
pub mod evaluator;
pub mod number;

mod edge_cases;

pub use convex_lex::SyntaxError;
pub use error::{ArithmeticError, EvalError, EvalResult};
pub use evaluator::{Evaluator, MAX_NESTING_DEPTH};
pub use number::Number;

use convex_lex::Lexer;

/// Evaluates one line, rejecting tokens left over after the expression.
pub fn evaluate(source: &str) -> EvalResult<Number> {
    Evaluator::new(Lexer::new(source))?.evaluate()
}

/// Evaluates the longest leading expression of a line.
///
/// Trailing tokens are ignored, so `"2 + 3)"` yields `5`. Lexical errors in
/// the ignored tail are still reported once the lookahead reaches them.
///
/// ```
/// use convex_eval::{evaluate_prefix, Number};
///
/// assert_eq!(evaluate_prefix("2 + 3)"), Ok(Number::Int(5)));
/// ```
pub fn evaluate_prefix(source: &str) -> EvalResult<Number> {
    Evaluator::new(Lexer::new(source))?.expr()
}

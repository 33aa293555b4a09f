//! Recursive-descent evaluator.
//!
//! Parsing and evaluation happen in the same descent: every grammar rule is
//! one method, and each method folds the value of its subtree before
//! returning. No syntax tree is built.
//!
//! # Grammar (lowest to highest precedence)
//!
//! ```text
//! expr   := term ( ("+" | "-") term )*
//! term   := factor ( ("*" | "/") factor )*
//! factor := INTEGER | "(" expr ")"
//! ```
//!
//! Both binary levels are left-associative: `8 - 2 - 1` folds as
//! `(8 - 2) - 1`.

use convex_lex::{Lexer, SyntaxError, SyntaxResult, Token, TokenKind};

use crate::error::{ArithmeticError, EvalError, EvalResult};
use crate::number::Number;

/// Deepest parenthesis nesting `factor` will descend into.
///
/// Each level costs three stack frames (`factor`, `expr`, `term`); the limit
/// keeps a line well inside the default stack of a spawned thread.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Evaluator bound to the lexer of a single line.
///
/// `current_token` is always the next unconsumed token. The only way to
/// consume it is [`Evaluator::expect_and_advance`].
///
/// # Example
///
/// ```
/// use convex_eval::{Evaluator, Number};
/// use convex_lex::Lexer;
///
/// let mut evaluator = Evaluator::new(Lexer::new("2 + 3 * 4")).unwrap();
/// assert_eq!(evaluator.expr(), Ok(Number::Int(14)));
/// ```
pub struct Evaluator<'a> {
    /// Token source for this line.
    lexer: Lexer<'a>,

    /// Lookahead token.
    current_token: Token,

    /// Number of currently open parentheses.
    depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator and pulls the first lookahead token.
    ///
    /// # Errors
    ///
    /// Fails if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'a>) -> SyntaxResult<Self> {
        let current_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token,
            depth: 0,
        })
    }

    /// Returns the lookahead token.
    ///
    /// After [`Evaluator::expr`] succeeds this is `EndOfInput` unless the
    /// line had trailing tokens.
    pub fn current_token(&self) -> Token {
        self.current_token
    }

    /// Evaluates a whole line.
    ///
    /// Runs [`Evaluator::expr`] and then requires the lookahead to be the end
    /// of input, so `2 + 3)` is rejected instead of yielding `5`.
    pub fn evaluate(&mut self) -> EvalResult<Number> {
        let value = self.expr()?;
        if !self.current_token.is_end() {
            return Err(self.syntax_error().into());
        }
        Ok(value)
    }

    /// `expr := term ( ("+" | "-") term )*`
    ///
    /// Stops at the first token that is not `+` or `-`; anything after a
    /// complete expression is left unconsumed.
    pub fn expr(&mut self) -> EvalResult<Number> {
        let mut result = self.term()?;

        while let op @ (TokenKind::Plus | TokenKind::Minus) = self.current_token.kind() {
            self.expect_and_advance(op)?;
            let rhs = self.term()?;
            result = self.fold(op, result, rhs)?;
        }

        Ok(result)
    }

    /// `term := factor ( ("*" | "/") factor )*`
    fn term(&mut self) -> EvalResult<Number> {
        let mut result = self.factor()?;

        while let op @ (TokenKind::Mul | TokenKind::Div) = self.current_token.kind() {
            self.expect_and_advance(op)?;
            let rhs = self.factor()?;
            result = self.fold(op, result, rhs)?;
        }

        Ok(result)
    }

    /// `factor := INTEGER | "(" expr ")"`
    fn factor(&mut self) -> EvalResult<Number> {
        let token = self.current_token;

        match token.kind() {
            TokenKind::Integer => {
                self.expect_and_advance(TokenKind::Integer)?;
                let value = token.value().ok_or_else(|| self.syntax_error())?;
                Ok(Number::Int(value))
            },
            TokenKind::LParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(EvalError::NestingTooDeep {
                        expression: self.lexer.source().to_string(),
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                self.expect_and_advance(TokenKind::LParen)?;
                self.depth += 1;
                let result = self.expr();
                self.depth -= 1;
                let result = result?;
                self.expect_and_advance(TokenKind::RParen)?;
                Ok(result)
            },
            _ => Err(self.syntax_error().into()),
        }
    }

    /// Consumes the lookahead if it has the expected kind and pulls the next
    /// token from the lexer.
    fn expect_and_advance(&mut self, kind: TokenKind) -> SyntaxResult<()> {
        if self.current_token.kind() != kind {
            return Err(self.syntax_error());
        }
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// Applies a binary operator to the running result.
    fn fold(&self, op: TokenKind, lhs: Number, rhs: Number) -> EvalResult<Number> {
        let folded = match op {
            TokenKind::Plus => lhs.checked_add(rhs),
            TokenKind::Minus => lhs.checked_sub(rhs),
            TokenKind::Mul => lhs.checked_mul(rhs),
            TokenKind::Div => {
                return lhs.checked_div(rhs).ok_or_else(|| {
                    ArithmeticError::DivisionByZero {
                        expression: self.lexer.source().to_string(),
                    }
                    .into()
                });
            },
            _ => return Err(self.syntax_error().into()),
        };

        folded.ok_or_else(|| {
            ArithmeticError::Overflow {
                expression: self.lexer.source().to_string(),
            }
            .into()
        })
    }

    fn syntax_error(&self) -> SyntaxError {
        self.lexer.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_expr(source: &str) -> EvalResult<Number> {
        Evaluator::new(Lexer::new(source))?.expr()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval_expr("2 + 3 * 4"), Ok(Number::Int(14)));
        assert_eq!(eval_expr("(2 + 3) * 4"), Ok(Number::Int(20)));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval_expr("8 - 2 - 1"), Ok(Number::Int(5)));
        assert_eq!(eval_expr("16 / 4 / 2"), Ok(Number::Float(2.0)));
    }

    #[test]
    fn test_true_division() {
        assert_eq!(eval_expr("7 / 2"), Ok(Number::Float(3.5)));
    }

    #[test]
    fn test_widening_persists_after_division() {
        assert_eq!(eval_expr("1 / 2 * 4 + 1"), Ok(Number::Float(3.0)));
    }

    #[test]
    fn test_integer_only_expression_stays_exact() {
        assert_eq!(eval_expr("10 - 3 * 2"), Ok(Number::Int(4)));
    }

    #[test]
    fn test_expr_leaves_trailing_tokens() {
        let mut evaluator = Evaluator::new(Lexer::new("2 + 3)")).unwrap();
        assert_eq!(evaluator.expr(), Ok(Number::Int(5)));
        assert_eq!(evaluator.current_token().kind(), TokenKind::RParen);
    }

    #[test]
    fn test_evaluate_rejects_trailing_tokens() {
        let mut evaluator = Evaluator::new(Lexer::new("2 + 3)")).unwrap();
        let err = evaluator.evaluate().unwrap_err();
        assert!(matches!(err, EvalError::Syntax(_)));
        assert_eq!(err.expression(), "2 + 3)");
    }

    #[test]
    fn test_expect_and_advance_mismatch() {
        let mut evaluator = Evaluator::new(Lexer::new("+")).unwrap();
        assert!(evaluator.expect_and_advance(TokenKind::Integer).is_err());
        assert_eq!(evaluator.current_token().kind(), TokenKind::Plus);
        assert!(evaluator.expect_and_advance(TokenKind::Plus).is_ok());
        assert!(evaluator.current_token().is_end());
    }

    #[test]
    fn test_factor_rejects_other_tokens() {
        for source in ["()", "2 +", ")", "*3", ""] {
            let err = eval_expr(source).unwrap_err();
            assert!(matches!(err, EvalError::Syntax(_)), "{source:?}");
            assert_eq!(err.expression(), source);
        }
    }

    #[test]
    fn test_unclosed_paren() {
        assert!(matches!(eval_expr("(2 + 3"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_division_by_zero() {
        let err = eval_expr("1 / (2 - 2)").unwrap_err();
        assert_eq!(
            err,
            EvalError::Arithmetic(ArithmeticError::DivisionByZero {
                expression: "1 / (2 - 2)".to_string()
            })
        );
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(eval_expr(&source), Ok(Number::Int(1)));
    }

    #[test]
    fn test_nesting_past_limit_is_rejected() {
        let depth = MAX_NESTING_DEPTH + 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let err = eval_expr(&source).unwrap_err();
        assert_eq!(
            err,
            EvalError::NestingTooDeep {
                expression: source.clone(),
                limit: MAX_NESTING_DEPTH,
            }
        );
    }

    #[test]
    fn test_depth_resets_between_groups() {
        let group = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        let source = format!("{group} + {group} * {group}");
        assert_eq!(eval_expr(&source), Ok(Number::Int(2)));
    }

    #[test]
    fn test_overflow() {
        let err = eval_expr("9223372036854775807 + 1").unwrap_err();
        assert!(matches!(
            err,
            EvalError::Arithmetic(ArithmeticError::Overflow { .. })
        ));
    }
}

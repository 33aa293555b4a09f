//! convex-lex - Lexical Analyzer for Convex expressions
//!
//! This crate turns one line of text into a stream of tokens for the
//! evaluator. Tokens are pulled one at a time; the lexer never holds the
//! whole token stream.
//!
//! # Example Usage
//!
//! ```
//! use convex_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("(1 + 2) / 3");
//! assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::LParen);
//!
//! // Or iterate over everything before the end marker
//! let kinds: Vec<_> = Lexer::new("1 + 2")
//!     .map(|t| t.unwrap().kind())
//!     .collect();
//! assert_eq!(kinds, [TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - The syntax error shared with the evaluator
//!
//! # Token Categories
//!
//! - **Integer**: `0`, `42`, `007` (decimal, ASCII digits only)
//! - **Operators**: `+`, `-`, `*`, `/`
//! - **Grouping**: `(`, `)`
//! - **EndOfInput**: returned forever once the line is consumed
//!
//! Any other non-whitespace character is a [`SyntaxError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{SyntaxError, SyntaxResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

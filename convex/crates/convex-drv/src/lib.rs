//! convex-drv - Interpreter Driver
//!
//! Feeds lines of input to the evaluator one at a time and reports the
//! outcome of each. A fresh lexer and evaluator are built for every line, so
//! nothing carries over between lines.

pub mod config;
pub mod error;
pub mod repl;

pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use repl::{report, write_tokens, Repl, Summary};

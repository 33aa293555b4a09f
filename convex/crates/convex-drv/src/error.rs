//! Error handling for the convex driver.
//!
//! Evaluation failures are not errors at this level: the REPL reports them
//! and moves on. `DriverError` covers what stops the driver itself.

use thiserror::Error;

/// Main error type for the convex driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be located, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

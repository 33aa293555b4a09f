//! Read-eval-print loop.
//!
//! The loop is generic over its input and output so that the binary can run
//! it on stdin/stdout and tests can run it on in-memory buffers.

use std::io::{BufRead, Write};

use convex_eval::{evaluate, evaluate_prefix, EvalError, EvalResult, Number};
use convex_lex::Lexer;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Counts of what a session did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a value
    pub evaluated: usize,
    /// Lines that produced a diagnostic
    pub failed: usize,
}

/// Interactive interpreter session.
pub struct Repl {
    config: Config,
}

impl Repl {
    /// Creates a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Evaluates a single line according to the `strict` setting.
    pub fn eval_line(&self, line: &str) -> EvalResult<Number> {
        if self.config.strict {
            evaluate(line)
        } else {
            evaluate_prefix(line)
        }
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// Blank lines re-prompt without evaluating. Evaluation failures are
    /// reported to `output` and the loop continues with the next line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Summary> {
        let mut summary = Summary::default();

        if self.config.banner {
            writeln!(
                output,
                "Convex {} interactive interpreter",
                env!("CARGO_PKG_VERSION")
            )?;
        }

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            if self.eval_and_print(&mut output, line)? {
                summary.evaluated += 1;
            } else {
                summary.failed += 1;
            }
        }

        debug!(
            evaluated = summary.evaluated,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }

    /// Evaluates `line` and writes either its value or a diagnostic.
    ///
    /// Returns whether evaluation succeeded.
    pub fn eval_and_print<W: Write>(&self, output: &mut W, line: &str) -> Result<bool> {
        debug!(line, strict = self.config.strict, "evaluating");

        match self.eval_line(line) {
            Ok(value) => {
                debug!(%value, "evaluated");
                writeln!(output, "{}", value)?;
                Ok(true)
            },
            Err(e) => {
                debug!(category = e.category(), error = %e, "evaluation failed");
                report(output, &e)?;
                Ok(false)
            },
        }
    }
}

/// Writes the diagnostic for a failed line: the category and message, then
/// the whole expression.
pub fn report<W: Write>(output: &mut W, error: &EvalError) -> Result<()> {
    writeln!(output, "{}: {}", error.category(), error)?;
    writeln!(output, "    at: {}", error.expression())?;
    writeln!(output)?;
    Ok(())
}

/// Writes one token per line for `source`, stopping at the first lexical
/// error, which is reported like an evaluation failure.
///
/// Returns whether the whole line lexed.
pub fn write_tokens<W: Write>(output: &mut W, source: &str) -> Result<bool> {
    for token in Lexer::new(source) {
        match token {
            Ok(token) => writeln!(output, "{}", token)?,
            Err(e) => {
                report(output, &EvalError::from(e))?;
                return Ok(false);
            },
        }
    }
    Ok(true)
}

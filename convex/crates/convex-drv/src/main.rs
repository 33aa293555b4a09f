//! Convex CLI - interactive integer arithmetic interpreter.
//!
//! Without `-e` the REPL runs on stdin/stdout. With one or more `-e`
//! expressions each is evaluated once and the process exits with status 1
//! if any of them failed.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use convex_drv::{write_tokens, Config, Repl};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Convex - evaluate integer arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "convex")]
#[command(author = "Convex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Cli {
    /// Evaluate an expression and exit (may be repeated)
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    exprs: Vec<String>,

    /// Print the tokens of each `-e` expression instead of evaluating it
    #[arg(long, requires = "exprs")]
    tokens: bool,

    /// Ignore tokens left over after a complete expression
    #[arg(long)]
    lenient: bool,

    /// Do not print the start-up banner
    #[arg(short, long)]
    quiet: bool,

    /// Override the prompt
    #[arg(long)]
    prompt: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "CONVEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CONVEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CONVEX_NO_COLOR")]
    no_color: bool,
}

fn main() {
    match run() {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        },
    }
}

/// Returns whether every evaluated expression succeeded.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(&cli)?;
    debug!(?config, "effective configuration");

    let repl = Repl::new(config);

    if cli.exprs.is_empty() {
        let stdin = io::stdin();
        repl.run(stdin.lock(), io::stdout().lock())
            .context("interactive session failed")?;
        return Ok(true);
    }

    let mut stdout = io::stdout().lock();
    let mut all_ok = true;
    for expr in &cli.exprs {
        let ok = if cli.tokens {
            write_tokens(&mut stdout, expr)?
        } else {
            repl.eval_and_print(&mut stdout, expr)?
        };
        all_ok &= ok;
    }
    Ok(all_ok)
}

/// Initialize the logging system. Logs go to stderr so they never mix with
/// results on stdout.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_from(path)?,
        None => Config::load().context("failed to load configuration")?,
    };

    if cli.lenient {
        config.strict = false;
    }
    if cli.quiet {
        config.banner = false;
    }
    if let Some(prompt) = &cli.prompt {
        config.prompt.clone_from(prompt);
    }

    Ok(config)
}

fn load_from(path: &Path) -> anyhow::Result<Config> {
    Config::load_from_path(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

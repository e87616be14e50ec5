//! CLI module for the conform harness
//!
//! ## Commands
//!
//! - `run` - Run the built-in cases (default when no subcommand is given)
//! - `list` - Print registered case names in registration order
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io::IsTerminal;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use conform_core::RunReport;

use crate::runner::RunConfig;
use crate::version::CONFORM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);

    /// 0 when no outcome failed, 1 otherwise.
    pub fn from_report(report: &RunReport) -> Self {
        if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Conformance harness for language-semantics reproductions
#[derive(Parser, Debug)]
#[command(name = "conform")]
#[command(version = CONFORM_VERSION)]
#[command(about = "Run language-semantics conformance cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run cases and report PASS/FAIL per case
    Run(RunArgs),

    /// List registered case names
    List {
        /// Only list cases whose name contains this keyword
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Verbose output (per-case durations)
    #[arg(short, long)]
    pub verbose: bool,
    /// Stop on first failure
    #[arg(short = 'x', long = "exitfirst")]
    pub stop_on_fail: bool,
    /// Filter cases by keyword
    #[arg(short = 'k', value_name = "EXPR")]
    pub filter: Option<String>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
    /// When to color console output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
    /// Fail any case that takes longer than this many milliseconds
    #[arg(long = "budget-ms", value_name = "MS")]
    pub budget_ms: Option<u64>,
}

impl RunArgs {
    /// Translate command-line flags into runner settings.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            filter: self.filter.clone(),
            stop_on_fail: self.stop_on_fail,
            time_budget: self.budget_ms.map(Duration::from_millis),
            silence_panics: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve `auto` against whether stdout is a terminal.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Run(args)) => commands::run_cases(&args),
        Some(Command::List { filter }) => commands::list_cases(filter.as_deref()),
        // Default: run everything with default settings
        None => commands::run_cases(&RunArgs::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

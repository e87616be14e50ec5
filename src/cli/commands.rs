//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use conform_core::Registry;

use crate::reporter::{CaseReporter, ConsoleReporter, JsonReporter};
use crate::runner::Runner;

use super::{CliError, CliResult, ExitCode, OutputFormat, RunArgs};

/// Build the built-in registry, turning a name clash into a fatal CLI error.
fn builtin_registry() -> CliResult<Registry> {
    conform_semantics::registry().map_err(|e| CliError::failure(format!("error: {}", e)))
}

/// Run the built-in cases and report each outcome on stdout.
///
/// Returns `ExitCode::SUCCESS` when every selected case passed. Once the summary
/// has been printed, a failing run is reported through an error with an empty
/// message so `run()` exits non-zero without printing anything more.
pub fn run_cases(args: &RunArgs) -> CliResult<ExitCode> {
    let registry = builtin_registry()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_registry(&registry, args, args.color.enabled(), &mut out)
}

/// Run the selected cases of `registry`, writing the report to `out`.
///
/// An empty selection still produces a report (an empty JSON document or a
/// `0 passed, 0 failed` summary) after a notice on stderr.
fn run_registry(registry: &Registry, args: &RunArgs, color: bool, out: &mut dyn Write) -> CliResult<ExitCode> {
    let runner = Runner::new(args.run_config());

    let selected = registry.all().filter(|c| runner.config().selects(c.name())).count();
    if selected == 0 {
        eprintln!("No cases collected");
    }

    let mut reporter: Box<dyn CaseReporter + '_> = match args.format {
        OutputFormat::Console => Box::new(ConsoleReporter::new(out, color, args.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    };

    let report = runner
        .run_with_reporter(registry.all(), reporter.as_mut())
        .map_err(|e| CliError::failure(format!("error: failed to write report: {}", e)))?;

    match ExitCode::from_report(&report) {
        ExitCode::SUCCESS => Ok(ExitCode::SUCCESS),
        code => Err(CliError::new("", code)),
    }
}

/// Print registered case names, one per line, in registration order.
pub fn list_cases(filter: Option<&str>) -> CliResult<ExitCode> {
    let registry = builtin_registry()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_names(&registry, filter, &mut out)
        .map_err(|e| CliError::failure(format!("error: failed to write case list: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

fn write_names(registry: &Registry, filter: Option<&str>, out: &mut dyn Write) -> io::Result<()> {
    for name in registry.names() {
        if filter.is_none_or(|keyword| name.contains(keyword)) {
            writeln!(out, "{}", name)?;
        }
    }
    out.flush()
}

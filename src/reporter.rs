//! Outcome rendering.
//!
//! ## CaseReporter Trait
//!
//! The runner calls a `CaseReporter` as cases complete, which keeps formatting separate from
//! execution. Two formats ship with the harness:
//!
//! - [`ConsoleReporter`]: one `PASS: <name> — <message>` / `FAIL: <name> — <message>` line per
//!   outcome and a closing `N passed, M failed` summary.
//! - [`JsonReporter`]: a single JSON document written when the run completes.

use std::io::{self, Write};

use conform_core::{Outcome, RunReport};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Trait for reporting case results.
///
/// Implement this trait to customize output format (TAP, JUnit, etc.)
pub trait CaseReporter {
    /// Called once before the first case runs
    fn on_run_start(&mut self, _case_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called when a case completes
    fn on_case_complete(&mut self, outcome: &Outcome) -> io::Result<()>;

    /// Called when all cases have completed
    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()>;
}

/// Write the plain-text report for a finished run.
///
/// ## Errors
/// - Any I/O error from `sink`.
pub fn report(run_report: &RunReport, sink: &mut dyn Write) -> io::Result<()> {
    let mut reporter = ConsoleReporter::new(sink, false, false);
    for outcome in run_report.outcomes() {
        reporter.on_case_complete(outcome)?;
    }
    reporter.on_run_complete(run_report)
}

/// Format one outcome line.
pub fn outcome_line(outcome: &Outcome, color: bool, verbose: bool) -> String {
    let status = match (outcome.is_passed(), color) {
        (true, true) => format!("{}PASS{}", GREEN, RESET),
        (true, false) => "PASS".to_string(),
        (false, true) => format!("{}FAIL{}", RED, RESET),
        (false, false) => "FAIL".to_string(),
    };

    let mut line = format!("{}: {} — {}", status, outcome.case_name(), outcome.message());
    if verbose {
        line.push_str(&format!(" ({}ms)", outcome.duration().as_millis()));
    }
    line
}

/// Format the closing summary line.
pub fn summary_line(report: &RunReport, color: bool) -> String {
    let summary = format!("{} passed, {} failed", report.total_passed(), report.total_failed());
    if !color {
        return summary;
    }
    let color = if report.is_success() { BOLD_GREEN } else { BOLD_RED };
    format!("{}{}{}", color, summary, RESET)
}

/// Line-per-outcome console reporter.
pub struct ConsoleReporter<W: Write> {
    out: W,
    pub color: bool,
    pub verbose: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool, verbose: bool) -> Self {
        Self { out, color, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CaseReporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, case_count: usize) -> io::Result<()> {
        if self.verbose {
            writeln!(self.out, "collected {} case(s)", case_count)?;
        }
        Ok(())
    }

    fn on_case_complete(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.out, "{}", outcome_line(outcome, self.color, self.verbose))
    }

    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()> {
        writeln!(self.out, "{}", summary_line(report, self.color))?;
        self.out.flush()
    }
}

/// Writes the whole report as one JSON document when the run completes.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CaseReporter for JsonReporter<W> {
    fn on_case_complete(&mut self, _outcome: &Outcome) -> io::Result<()> {
        Ok(())
    }

    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn sample_report() -> RunReport {
        RunReport::from_outcomes(vec![
            Outcome::passed("addsCorrectly", "expected 4, got 4", Duration::from_millis(3)),
            Outcome::failed("addsWrong", "expected 5, got 4", Duration::ZERO),
        ])
    }

    #[test]
    fn plain_report_lines() {
        let mut out = Vec::new();
        report(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        insta::assert_snapshot!(text, @r"
        PASS: addsCorrectly — expected 4, got 4
        FAIL: addsWrong — expected 5, got 4
        1 passed, 1 failed
        ");
    }

    #[test]
    fn verbose_lines_carry_duration() {
        let outcome = Outcome::passed("a", "ok", Duration::from_millis(3));
        assert_eq!(outcome_line(&outcome, false, true), "PASS: a — ok (3ms)");
    }

    #[test]
    fn colored_lines() {
        let outcome = Outcome::failed("b", "nope", Duration::ZERO);
        assert_eq!(outcome_line(&outcome, true, false), "\x1b[31mFAIL\x1b[0m: b — nope");
        assert_eq!(
            summary_line(&sample_report(), true),
            "\x1b[1;31m1 passed, 1 failed\x1b[0m"
        );
    }

    #[test]
    fn verbose_console_announces_collection() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false, true);
        reporter.on_run_start(2).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "collected 2 case(s)\n");
    }

    #[test]
    fn json_report_document() {
        let mut reporter = JsonReporter::new(Vec::new());
        let report = sample_report();
        for outcome in report.outcomes() {
            reporter.on_case_complete(outcome).unwrap();
        }
        reporter.on_run_complete(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["passed"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["outcomes"][0]["case_name"], "addsCorrectly");
        assert_eq!(value["outcomes"][0]["duration_ms"], 3);
        assert_eq!(value["outcomes"][1]["passed"], false);
        assert_eq!(value["outcomes"][1]["message"], "expected 5, got 4");
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_surface() {
        let err = report(&sample_report(), &mut FailingSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}

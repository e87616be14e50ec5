//! Case execution.
//!
//! The runner invokes cases strictly in the order it is given them, one at a time. Every invocation
//! produces exactly one [`Outcome`]:
//!
//! - `Ok(message)` from the body is a pass.
//! - `Err(CaseError)` from the body is a failure carrying the error's message.
//! - A panic inside the body is caught at the runner boundary and recorded as a crash; the next
//!   case still runs.
//!
//! ## Reporting
//!
//! [`Runner::run_with_reporter`] drives a [`CaseReporter`] while cases execute so output streams
//! as the run progresses. Reporter I/O errors abort the run and are returned to the caller.

use std::any::Any;
use std::convert::Infallible;
use std::io;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use conform_core::{CaseError, Outcome, RunReport, TestCase};

use crate::reporter::CaseReporter;

/// Settings for one run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Only run cases whose name contains this keyword
    pub filter: Option<String>,
    /// Stop after the first failing outcome
    pub stop_on_fail: bool,
    /// Per-case wall-clock budget, checked after the case returns
    pub time_budget: Option<Duration>,
    /// Replace the panic hook with a no-op while cases run
    pub silence_panics: bool,
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, keyword: impl Into<String>) -> Self {
        self.filter = Some(keyword.into());
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Silence the process panic hook while cases run.
    ///
    /// The hook is process-wide, so concurrent runs that silence panics take turns: a second
    /// run waits until the first has restored the previous hook.
    pub fn with_silenced_panics(mut self, silence: bool) -> Self {
        self.silence_panics = silence;
        self
    }

    /// Whether a case with this name is selected by the filter.
    pub fn selects(&self, case_name: &str) -> bool {
        match &self.filter {
            Some(keyword) => case_name.contains(keyword.as_str()),
            None => true,
        }
    }
}

/// Run every case with default settings.
pub fn run<'a, I>(cases: I) -> RunReport
where
    I: IntoIterator<Item = &'a TestCase>,
{
    Runner::new(RunConfig::default()).run(cases)
}

/// Executes cases and collects their outcomes.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the selected cases and return the derived report.
    #[tracing::instrument(skip_all, fields(filter = self.config.filter.as_deref()))]
    pub fn run<'a, I>(&self, cases: I) -> RunReport
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        let selected = self.select(cases);
        match self.drive(&selected, |_| Ok::<(), Infallible>(())) {
            Ok(outcomes) => RunReport::from_outcomes(outcomes),
            Err(never) => match never {},
        }
    }

    /// Run the selected cases, streaming progress to `reporter`.
    ///
    /// ## Errors
    /// - Any I/O error returned by the reporter. The run stops at that point.
    #[tracing::instrument(skip_all, fields(filter = self.config.filter.as_deref()))]
    pub fn run_with_reporter<'a, I>(&self, cases: I, reporter: &mut dyn CaseReporter) -> io::Result<RunReport>
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        let selected = self.select(cases);
        reporter.on_run_start(selected.len())?;
        let outcomes = self.drive(&selected, |outcome| reporter.on_case_complete(outcome))?;
        let report = RunReport::from_outcomes(outcomes);
        reporter.on_run_complete(&report)?;
        Ok(report)
    }

    fn select<'a, I>(&self, cases: I) -> Vec<&'a TestCase>
    where
        I: IntoIterator<Item = &'a TestCase>,
    {
        cases.into_iter().filter(|c| self.config.selects(c.name())).collect()
    }

    fn drive<E>(
        &self,
        cases: &[&TestCase],
        mut on_outcome: impl FnMut(&Outcome) -> Result<(), E>,
    ) -> Result<Vec<Outcome>, E> {
        tracing::info!(cases = cases.len(), "running cases");
        let _hook = self.config.silence_panics.then(SilencedPanicHook::install);

        let mut outcomes = Vec::with_capacity(cases.len());
        for case in cases {
            let outcome = self.execute(case);
            on_outcome(&outcome)?;

            let stop = self.config.stop_on_fail && !outcome.is_passed();
            outcomes.push(outcome);
            if stop {
                tracing::debug!("stopping after first failure");
                break;
            }
        }
        Ok(outcomes)
    }

    /// Invoke one case behind the catch-all boundary.
    pub fn execute(&self, case: &TestCase) -> Outcome {
        tracing::debug!(case = case.name(), "case started");
        let start = Instant::now();
        let result = match panic::catch_unwind(AssertUnwindSafe(|| case.invoke())) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(case = case.name(), %message, "case crashed");
                Err(CaseError::Crash(message))
            }
        };
        let duration = start.elapsed();

        let outcome = match (result, self.config.time_budget) {
            (Ok(_), Some(budget)) if duration > budget => {
                tracing::warn!(case = case.name(), ?duration, ?budget, "case exceeded time budget");
                Outcome::failed(
                    case.name(),
                    format!(
                        "exceeded time budget of {}ms (took {}ms)",
                        budget.as_millis(),
                        duration.as_millis()
                    ),
                    duration,
                )
            }
            (result, _) => Outcome::from_result(case.name(), result, duration),
        };

        tracing::debug!(case = case.name(), passed = outcome.is_passed(), "case finished");
        outcome
    }
}

/// Extract a readable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Swaps in a no-op panic hook; the previous hook is restored on drop.
///
/// Holds `HOOK_LOCK` for its whole lifetime so take/restore pairs never interleave.
struct SilencedPanicHook {
    previous: Option<PanicHook>,
    _lock: MutexGuard<'static, ()>,
}

impl SilencedPanicHook {
    fn install() -> Self {
        let lock = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
            _lock: lock,
        }
    }
}

impl Drop for SilencedPanicHook {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use conform_core::{Registry, check_eq};

    use super::*;

    fn three_cases_second_crashes() -> Registry {
        let mut registry = Registry::new();
        registry.register("first", || check_eq(1, 1)).unwrap();
        registry
            .register("second", || -> conform_core::CaseResult { panic!("index out of bounds") })
            .unwrap();
        registry.register("third", || check_eq(3, 3)).unwrap();
        registry
    }

    #[test]
    fn crash_does_not_abort_the_run() {
        let registry = three_cases_second_crashes();
        let report = run(registry.all());

        assert_eq!(report.outcomes().len(), 3);
        assert!(report.outcomes()[0].is_passed());
        assert!(!report.outcomes()[1].is_passed());
        assert_eq!(report.outcomes()[1].message(), "case crashed: index out of bounds");
        assert!(report.outcomes()[2].is_passed());
        assert_eq!((report.total_passed(), report.total_failed()), (2, 1));
    }

    #[test]
    fn formatted_panic_payload_is_captured() {
        let mut registry = Registry::new();
        registry
            .register("formatted", || -> conform_core::CaseResult { panic!("bad value {}", 7) })
            .unwrap();
        let report = run(registry.all());
        assert_eq!(report.outcomes()[0].message(), "case crashed: bad value 7");
    }

    #[test]
    fn assertion_failure_message() {
        let mut registry = Registry::new();
        registry.register("addsCorrectly", || check_eq(2 + 2, 4)).unwrap();
        registry.register("addsWrong", || check_eq(2 + 2, 5)).unwrap();

        let report = run(registry.all());
        assert!(report.outcomes()[0].is_passed());
        assert!(!report.outcomes()[1].is_passed());
        assert!(report.outcomes()[1].message().contains("expected 5, got 4"));
    }

    #[test]
    fn filter_selects_by_keyword() {
        let registry = three_cases_second_crashes();
        let report = Runner::new(RunConfig::new().with_filter("ir")).run(registry.all());
        let names: Vec<_> = report.outcomes().iter().map(|o| o.case_name()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn stop_on_fail_halts_after_failure() {
        let registry = three_cases_second_crashes();
        let config = RunConfig::new().with_stop_on_fail(true);
        let report = Runner::new(config).run(registry.all());
        assert_eq!(report.outcomes().len(), 2);
        assert_eq!(report.total_failed(), 1);
    }

    #[test]
    fn time_budget_overrun_fails() {
        let mut registry = Registry::new();
        registry
            .register("slow", || {
                std::thread::sleep(Duration::from_millis(20));
                check_eq(1, 1)
            })
            .unwrap();
        let config = RunConfig::new().with_time_budget(Duration::from_millis(1));
        let report = Runner::new(config).run(registry.all());

        let outcome = &report.outcomes()[0];
        assert!(!outcome.is_passed());
        assert!(outcome.message().starts_with("exceeded time budget of 1ms"));
    }

    #[test]
    fn time_budget_keeps_original_failure() {
        let mut registry = Registry::new();
        registry
            .register("slow_and_wrong", || {
                std::thread::sleep(Duration::from_millis(5));
                check_eq(1, 2)
            })
            .unwrap();
        let config = RunConfig::new().with_time_budget(Duration::from_millis(1));
        let report = Runner::new(config).run(registry.all());
        assert_eq!(report.outcomes()[0].message(), "expected 2, got 1");
    }

    #[test]
    fn panic_message_variants() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "non-string panic payload");
    }

    #[test]
    fn config_builder() {
        let config = RunConfig::new()
            .with_filter("arrays")
            .with_stop_on_fail(true)
            .with_time_budget(Duration::from_secs(1));
        assert!(config.selects("arrays::allocation_length"));
        assert!(!config.selects("strings::static_string"));
        assert!(config.stop_on_fail);
        assert_eq!(config.time_budget, Some(Duration::from_secs(1)));
        assert!(!config.silence_panics);
    }

    #[test]
    fn concurrent_silenced_runs_take_turns() {
        let config = RunConfig::new().with_silenced_panics(true);
        let silenced_run = || {
            let registry = three_cases_second_crashes();
            Runner::new(config.clone()).run(registry.all()).total_failed()
        };

        let (a, b) = std::thread::scope(|scope| {
            let a = scope.spawn(silenced_run);
            let b = scope.spawn(silenced_run);
            (a.join().unwrap(), b.join().unwrap())
        });
        assert_eq!((a, b), (1, 1));
        assert!(!HOOK_LOCK.is_poisoned());
    }

    #[test]
    fn default_config_selects_everything() {
        assert!(RunConfig::default().selects(""));
        assert!(RunConfig::default().selects("anything"));
    }
}

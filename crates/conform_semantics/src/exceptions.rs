//! Exception propagation, `catch` selection and `finally` semantics.
//!
//! Thrown exceptions are modelled as [`Thrown`] error values. A `try` block is a closure returning
//! `Result`; `catch` clauses are `match` arms on the error kind; `finally` is code that runs after
//! the closure regardless of its result and before the result is propagated.

use conform_core::{CaseError, CaseResult, Registry, RegistryError, check, check_eq};
use thiserror::Error;

use crate::Group;

pub const GROUP: &str = "exceptions";

/// Exception kinds the scenarios throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Thrown {
    #[error("MyException")]
    My,
    #[error("MyOtherException")]
    MyOther,
    /// Not declared by callers and never caught by the scenarios.
    #[error("MyUncheckedException")]
    Unchecked,
}

/// Object whose methods throw, catch and record the value seen by `finally`.
#[derive(Debug, Default)]
pub struct ExceptionProbe {
    /// Value stored by the most recent `finally` block.
    pub last: i32,
}

impl ExceptionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn throw(&self, x: i32) -> Result<i32, Thrown> {
        match x {
            0 => Err(Thrown::My),
            1 => Err(Thrown::MyOther),
            _ => Ok(1),
        }
    }

    pub fn catch(&self, x: i32) -> i32 {
        let attempt = || -> Result<i32, Thrown> {
            match x {
                0 => Err(Thrown::My),
                1 => Err(Thrown::MyOther),
                _ => Ok(1),
            }
        };
        match attempt() {
            Ok(x) => x,
            Err(Thrown::My) => 3,
            Err(Thrown::MyOther) => 2,
            Err(Thrown::Unchecked) => -1,
        }
    }

    /// Catch exceptions thrown by a callee rather than the local block.
    pub fn incoming_catch(&self, x: i32) -> i32 {
        match self.throw(x) {
            Ok(value) => value,
            Err(Thrown::My) => 3,
            Err(Thrown::MyOther) => 2,
            Err(Thrown::Unchecked) => -1,
        }
    }

    /// `try { ... } finally { x += 10; last = x; }` with the exception propagated afterwards.
    pub fn finally(&mut self, mut x: i32) -> Result<i32, Thrown> {
        let thrown = match x {
            0 => {
                x = 3;
                Some(Thrown::My)
            }
            1 => {
                x = 2;
                Some(Thrown::MyOther)
            }
            _ => {
                x = 1;
                None
            }
        };

        x += 10;
        self.last = x;

        match thrown {
            Some(exc) => Err(exc),
            None => Ok(x),
        }
    }

    /// Caught exceptions are handled before `finally`; uncaught ones propagate after it.
    pub fn catch_finally(&mut self, mut x: i32) -> Result<i32, Thrown> {
        let body = match x {
            0 => Err(Thrown::My),
            1 => Err(Thrown::MyOther),
            2 => Err(Thrown::Unchecked),
            _ => Ok(1),
        };

        let pending = match body {
            Ok(value) => {
                x = value;
                None
            }
            Err(Thrown::My) => {
                x = 3;
                None
            }
            Err(Thrown::MyOther) => {
                x = 2;
                None
            }
            Err(exc) => Some(exc),
        };

        x += 10;
        self.last = x;

        match pending {
            Some(exc) => Err(exc),
            None => Ok(x),
        }
    }

    /// Two sequential `try` blocks; the second accumulates onto the first's result.
    pub fn multiple_catch(&self, x: i32, y: i32) -> i32 {
        let mut x = match self.throw(x) {
            Ok(value) => value,
            Err(Thrown::My) => 3,
            Err(Thrown::MyOther) => 2,
            Err(Thrown::Unchecked) => -1,
        };

        x += match self.throw(y) {
            Ok(value) => 10 * value,
            Err(Thrown::My) => 30,
            Err(Thrown::MyOther) => 20,
            Err(Thrown::Unchecked) => -10,
        };
        x
    }
}

fn expect_thrown(result: Result<i32, Thrown>, expected: Thrown) -> CaseResult {
    match result {
        Err(exc) => check_eq(exc, expected),
        Ok(value) => Err(CaseError::failure(format!(
            "expected {} to be thrown, got value {}",
            expected, value
        ))),
    }
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("throw_my_exception", || expect_thrown(ExceptionProbe::new().throw(0), Thrown::My))?
        .case("throw_my_other_exception", || {
            expect_thrown(ExceptionProbe::new().throw(1), Thrown::MyOther)
        })?
        .case("throw_returns_without_exception", || {
            check_eq(ExceptionProbe::new().throw(2), Ok(1))
        })?
        .case("catch_selects_handler", || {
            let probe = ExceptionProbe::new();
            check_eq([probe.catch(0), probe.catch(1), probe.catch(2)], [3, 2, 1])
        })?
        .case("incoming_catch_from_callee", || {
            let probe = ExceptionProbe::new();
            check_eq(
                [probe.incoming_catch(0), probe.incoming_catch(1), probe.incoming_catch(2)],
                [3, 2, 1],
            )
        })?
        .case("finally_runs_when_throwing", || {
            let mut probe = ExceptionProbe::new();
            expect_thrown(probe.finally(0), Thrown::My)?;
            check_eq(probe.last, 13)?;
            expect_thrown(probe.finally(1), Thrown::MyOther)?;
            check_eq(probe.last, 12)
        })?
        .case("finally_runs_on_normal_return", || {
            let mut probe = ExceptionProbe::new();
            check_eq(probe.finally(2), Ok(11))?;
            check_eq(probe.last, 11)
        })?
        .case("catch_then_finally", || {
            let mut probe = ExceptionProbe::new();
            check_eq(probe.catch_finally(0), Ok(13))?;
            check_eq(probe.catch_finally(1), Ok(12))?;
            check_eq(probe.catch_finally(3), Ok(11))
        })?
        .case("uncaught_propagates_after_finally", || {
            let mut probe = ExceptionProbe::new();
            expect_thrown(probe.catch_finally(2), Thrown::Unchecked)?;
            check_eq(probe.last, 12)
        })?
        .case("sequential_try_blocks", || {
            let probe = ExceptionProbe::new();
            check_eq(
                [probe.multiple_catch(0, 1), probe.multiple_catch(1, 2), probe.multiple_catch(2, 0)],
                [23, 12, 31],
            )
        })?
        .case("exception_display_names_kind", || {
            check(
                Thrown::My.to_string() == "MyException" && Thrown::MyOther.to_string() == "MyOtherException",
                "exception kinds display their class name",
            )
        })?;
    Ok(())
}

#![forbid(unsafe_code)]
//! Conformance harness for language-semantics reproductions.
//!
//! The harness is three small pieces wired together by the `conform` binary:
//!
//! - a [`Registry`](conform_core::Registry) of uniquely named cases (from `conform_core`),
//! - the [`runner`], which executes cases behind a catch-all boundary and derives a
//!   [`RunReport`](conform_core::RunReport),
//! - the [`reporter`], which renders outcomes and the pass/fail summary.
//!
//! The built-in semantic suite lives in `conform_semantics`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Case bodies**: a panic inside a case is not a harness bug. The runner catches it and records the case as
//!   crashed.

pub mod cli;
pub mod reporter;
pub mod runner;
pub mod version;

pub use conform_core::{CaseError, CaseResult, Outcome, Registry, RegistryError, RunReport, TestCase};
pub use reporter::{CaseReporter, ConsoleReporter, JsonReporter, report};
pub use runner::{RunConfig, Runner, run};

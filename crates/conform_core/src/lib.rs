//! Provide the case model shared by the conform harness and the suites it runs.
//!
//! This crate holds the vocabulary every other part of the harness speaks: named [`TestCase`]s, the
//! [`Outcome`] recorded for each invocation, the derived [`RunReport`], and the insertion-ordered
//! [`Registry`] cases are collected into.
//!
//! ## Notes
//!
//! - This is a “model” crate: **no IO**, no global state, no logging. Running and reporting live in the
//!   root `conform` crate.
//! - Case bodies signal verdicts through [`CaseResult`]: `Ok(message)` passes, `Err(CaseError)` fails.
//!   Panics are not handled here; the runner owns the catch-all boundary.
//!
//! ## Examples
//! ```rust
//! use conform_core::{Registry, check_eq};
//!
//! let mut registry = Registry::new();
//! registry.register("adds_correctly", || check_eq(2 + 2, 4)).unwrap();
//! assert!(registry.register("adds_correctly", || check_eq(1, 1)).is_err());
//! assert_eq!(registry.len(), 1);
//! ```

pub mod case;
pub mod check;
pub mod errors;
pub mod outcome;
pub mod registry;
pub mod report;

pub use case::{CaseBody, CaseResult, TestCase};
pub use check::{check, check_eq, check_err};
pub use errors::{CaseError, RegistryError};
pub use outcome::Outcome;
pub use registry::Registry;
pub use report::RunReport;

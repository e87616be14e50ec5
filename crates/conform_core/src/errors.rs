//! Error kinds raised while registering and executing cases.

use std::fmt::Display;

use thiserror::Error;

/// Errors raised while building a [`crate::Registry`].
///
/// These indicate a bug in the suite definition and are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate test case name: {0}")]
    DuplicateName(String),
}

/// Errors a case body reports instead of a passing verdict.
///
/// Both variants are recovered by the runner into a failing [`crate::Outcome`]; they differ only
/// in how the message is presented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// An assertion inside the case did not hold.
    #[error("{0}")]
    Failure(String),

    /// The case hit an unexpected runtime failure.
    #[error("case crashed: {0}")]
    Crash(String),
}

impl CaseError {
    /// Create an assertion failure.
    pub fn failure(message: impl Into<String>) -> Self {
        CaseError::Failure(message.into())
    }

    /// Create a crash from any displayable error.
    ///
    /// Handy as `.map_err(CaseError::crash)` when a case body calls fallible code.
    pub fn crash(err: impl Display) -> Self {
        CaseError::Crash(err.to_string())
    }

    /// Whether this error came from an unexpected failure rather than an assertion.
    pub fn is_crash(&self) -> bool {
        matches!(self, CaseError::Crash(_))
    }
}

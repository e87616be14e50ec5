//! Named test cases.

use std::fmt;

use crate::errors::CaseError;

/// Result of invoking a case body: `Ok` carries the passing message, `Err` the failure.
pub type CaseResult = Result<String, CaseError>;

/// Boxed zero-argument case body.
pub type CaseBody = Box<dyn Fn() -> CaseResult>;

/// One semantic scenario under test.
///
/// A case is immutable once built; the registry hands out shared references only.
pub struct TestCase {
    name: String,
    body: CaseBody,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> CaseResult + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body once.
    ///
    /// Panics inside the body propagate to the caller.
    pub fn invoke(&self) -> CaseResult {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

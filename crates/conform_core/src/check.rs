//! Assertion helpers for case bodies.
//!
//! Each helper turns a comparison into a [`CaseResult`] (or a `Result` usable with `?`), so a case
//! body reads as a sequence of checks and the first failing one becomes the case's message.

use std::fmt::Debug;

use crate::case::CaseResult;
use crate::errors::CaseError;

/// Compare an actual value against the literal expected one.
///
/// ## Returns
/// - `Ok("expected <e>, got <a>")` when they are equal.
/// - `Err(CaseError::Failure("expected <e>, got <a>"))` otherwise.
///
/// ## Examples
/// ```rust
/// use conform_core::check_eq;
///
/// assert!(check_eq(2 + 2, 4).is_ok());
/// let err = check_eq(2 + 2, 5).unwrap_err();
/// assert_eq!(err.to_string(), "expected 5, got 4");
/// ```
pub fn check_eq<T>(actual: T, expected: T) -> CaseResult
where
    T: PartialEq + Debug,
{
    let message = format!("expected {:?}, got {:?}", expected, actual);
    if actual == expected {
        Ok(message)
    } else {
        Err(CaseError::Failure(message))
    }
}

/// Check that a condition holds.
pub fn check(condition: bool, description: &str) -> CaseResult {
    if condition {
        Ok(description.to_string())
    } else {
        Err(CaseError::failure(format!("{} did not hold", description)))
    }
}

/// Require that an operation failed, handing back its error for further checks.
pub fn check_err<T, E>(result: Result<T, E>, description: &str) -> Result<E, CaseError>
where
    T: Debug,
{
    match result {
        Ok(value) => Err(CaseError::failure(format!(
            "{}: expected an error, got {:?}",
            description, value
        ))),
        Err(err) => Ok(err),
    }
}

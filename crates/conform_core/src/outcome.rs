//! Recorded result of running one case.

use std::time::Duration;

use serde::Serialize;

use crate::case::CaseResult;

/// Pass/fail record for a single case invocation.
///
/// Outcomes are created once and never mutated; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    case_name: String,
    passed: bool,
    message: String,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    duration: Duration,
}

impl Outcome {
    pub fn passed(case_name: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            case_name: case_name.into(),
            passed: true,
            message: message.into(),
            duration,
        }
    }

    pub fn failed(case_name: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            case_name: case_name.into(),
            passed: false,
            message: message.into(),
            duration,
        }
    }

    /// Build an outcome from a case body's result.
    pub fn from_result(case_name: impl Into<String>, result: CaseResult, duration: Duration) -> Self {
        match result {
            Ok(message) => Self::passed(case_name, message, duration),
            Err(err) => Self::failed(case_name, err.to_string(), duration),
        }
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CaseError;

    #[test]
    fn from_ok_result_passes() {
        let outcome = Outcome::from_result("a", Ok("expected 4, got 4".into()), Duration::ZERO);
        assert!(outcome.is_passed());
        assert_eq!(outcome.case_name(), "a");
        assert_eq!(outcome.message(), "expected 4, got 4");
    }

    #[test]
    fn from_failure_keeps_message() {
        let outcome = Outcome::from_result("b", Err(CaseError::failure("expected 5, got 4")), Duration::ZERO);
        assert!(!outcome.is_passed());
        assert_eq!(outcome.message(), "expected 5, got 4");
    }

    #[test]
    fn from_crash_prefixes_message() {
        let outcome = Outcome::from_result("c", Err(CaseError::crash("index out of bounds")), Duration::ZERO);
        assert!(!outcome.is_passed());
        assert_eq!(outcome.message(), "case crashed: index out of bounds");
    }
}

//! Run-level summary derived from outcomes.

use serde::Serialize;

use crate::outcome::Outcome;

/// Ordered outcomes of one run plus their pass/fail totals.
///
/// A report can only be built from an outcome sequence, so the totals always add up to the
/// number of outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    outcomes: Vec<Outcome>,
    #[serde(rename = "passed")]
    total_passed: usize,
    #[serde(rename = "failed")]
    total_failed: usize,
}

impl RunReport {
    pub fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let total_passed = outcomes.iter().filter(|o| o.is_passed()).count();
        let total_failed = outcomes.len() - total_passed;
        Self {
            outcomes,
            total_passed,
            total_failed,
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn total_passed(&self) -> usize {
        self.total_passed
    }

    pub fn total_failed(&self) -> usize {
        self.total_failed
    }

    pub fn is_success(&self) -> bool {
        self.total_failed == 0
    }

    /// Outcomes that did not pass, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_passed())
    }
}

impl FromIterator<Outcome> for RunReport {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self::from_outcomes(iter.into_iter().collect())
    }
}

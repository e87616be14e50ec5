//! Insertion-ordered collection of uniquely named cases.
//!
//! Registration order is meaningful: it is the order the runner executes cases in and the order
//! report lines appear in.

use std::collections::HashSet;

use crate::case::{CaseResult, TestCase};
use crate::errors::RegistryError;

/// Named cases in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a case.
    ///
    /// ## Errors
    /// - [`RegistryError::DuplicateName`] if a case with `name` is already registered. The registry
    ///   is left unchanged.
    pub fn register<F>(&mut self, name: impl Into<String>, body: F) -> Result<(), RegistryError>
    where
        F: Fn() -> CaseResult + 'static,
    {
        self.push(TestCase::new(name, body))
    }

    /// Add an already-built case.
    pub fn push(&mut self, case: TestCase) -> Result<(), RegistryError> {
        if !self.names.insert(case.name().to_string()) {
            return Err(RegistryError::DuplicateName(case.name().to_string()));
        }
        self.cases.push(case);
        Ok(())
    }

    /// Iterate the registered cases in registration order.
    pub fn all(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    /// Iterate case names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::name)
    }

    pub fn get(&self, name: &str) -> Option<&TestCase> {
        if !self.names.contains(name) {
            return None;
        }
        self.cases.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

//! Built-in language-semantics scenarios for the conform harness.
//!
//! Each module reproduces one family of semantic behaviour (exception propagation, overload
//! resolution, static initialisation, ...) in plain Rust and registers cases that compare the
//! reproduction against the literal values the behaviour must produce.
//!
//! ## Notes
//!
//! - Cases are named `<group>::<case>` and registered in a fixed order, so report output is
//!   deterministic.
//! - Nothing is registered at load time; callers build a registry explicitly with [`registry`] or
//!   extend their own with [`register_all`].

pub mod arrays;
pub mod control;
pub mod dispatch;
pub mod exceptions;
pub mod fields;
pub mod inheritance;
pub mod statics;
pub mod strings;

use conform_core::{CaseResult, Registry, RegistryError};

/// Group names in registration order.
pub const GROUPS: &[&str] = &[
    exceptions::GROUP,
    dispatch::GROUP,
    fields::GROUP,
    statics::GROUP,
    arrays::GROUP,
    strings::GROUP,
    control::GROUP,
    inheritance::GROUP,
];

/// Build a registry holding every built-in case.
pub fn registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// Register every built-in case into an existing registry.
#[tracing::instrument(skip_all)]
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    exceptions::register(registry)?;
    dispatch::register(registry)?;
    fields::register(registry)?;
    statics::register(registry)?;
    arrays::register(registry)?;
    strings::register(registry)?;
    control::register(registry)?;
    inheritance::register(registry)?;
    tracing::debug!(cases = registry.len(), "registered built-in cases");
    Ok(())
}

/// Registration helper that prefixes case names with a group name.
pub(crate) struct Group<'a> {
    registry: &'a mut Registry,
    prefix: &'static str,
}

impl<'a> Group<'a> {
    pub(crate) fn new(registry: &'a mut Registry, prefix: &'static str) -> Self {
        Self { registry, prefix }
    }

    pub(crate) fn case<F>(&mut self, name: &str, body: F) -> Result<&mut Self, RegistryError>
    where
        F: Fn() -> CaseResult + 'static,
    {
        self.registry.register(format!("{}::{}", self.prefix, name), body)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_prefixes_names() {
        let mut registry = Registry::new();
        Group::new(&mut registry, "demo")
            .case("one", || Ok(String::new()))
            .unwrap()
            .case("two", || Ok(String::new()))
            .unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["demo::one", "demo::two"]);
    }

    #[test]
    fn registering_twice_fails() {
        let mut registry = registry().unwrap();
        let err = register_all(&mut registry).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name.starts_with("exceptions::")));
    }

    #[test]
    fn every_case_belongs_to_a_known_group() {
        let registry = registry().unwrap();
        for name in registry.names() {
            let group = name.split("::").next().unwrap();
            assert!(GROUPS.contains(&group), "unknown group in {}", name);
        }
    }
}

//! Static members initialised through factory methods, and static members typed by an abstract
//! base but holding a concrete subclass.

use std::any::Any;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use conform_core::{Registry, RegistryError, check, check_eq};

use crate::Group;

pub const GROUP: &str = "statics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticTestClass {
    pub x: i32,
}

impl Default for StaticTestClass {
    fn default() -> Self {
        Self { x: 321 }
    }
}

impl StaticTestClass {
    pub fn new_instance() -> Self {
        Self::default()
    }

    pub fn new_instance_with(x: i32) -> Self {
        Self { x }
    }

    pub fn number() -> i32 {
        456
    }
}

static INITIALISATIONS: AtomicUsize = AtomicUsize::new(0);

pub static STATIC_MEMBER: LazyLock<StaticTestClass> = LazyLock::new(|| {
    INITIALISATIONS.fetch_add(1, Ordering::SeqCst);
    StaticTestClass::new_instance()
});
pub static STATIC_MEMBER_2: LazyLock<StaticTestClass> = LazyLock::new(|| StaticTestClass::new_instance_with(123));
pub static STATIC_MEMBER_3: LazyLock<i32> = LazyLock::new(StaticTestClass::number);

/// Base type with no behaviour of its own.
pub trait AbstractClass: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Default)]
pub struct ConcreteClass;

impl AbstractClass for ConcreteClass {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Static declared with the abstract type.
pub static MEMBER: LazyLock<Box<dyn AbstractClass>> = LazyLock::new(|| Box::new(ConcreteClass));

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("factory_default", || check_eq(STATIC_MEMBER.x, 321))?
        .case("factory_overload", || check_eq(STATIC_MEMBER_2.x, 123))?
        .case("static_method_initialiser", || check_eq(*STATIC_MEMBER_3, 456))?
        .case("initialised_once", || {
            let first: &StaticTestClass = &STATIC_MEMBER;
            let second: &StaticTestClass = &STATIC_MEMBER;
            check(std::ptr::eq(first, second), "static resolves to a single instance")?;
            check_eq(INITIALISATIONS.load(Ordering::SeqCst), 1)
        })?
        .case("abstract_static_member", || {
            check(
                MEMBER.as_any().downcast_ref::<ConcreteClass>().is_some(),
                "member is an instance of the concrete class",
            )
        })?;
    Ok(())
}

//! Overload resolution and interface dispatch.
//!
//! Overloads selected by argument type are expressed as traits implemented per argument type, so
//! the choice happens at compile time on the *static* type of the argument. Passing a concrete
//! object through an interface-typed parameter makes the less specific overload win.

use conform_core::{Registry, RegistryError, check_eq};

use crate::Group;

pub const GROUP: &str = "dispatch";

pub trait DispatchInterface {
    fn test(&self) -> i32;
}

#[derive(Debug, Default)]
pub struct DispatchClass1;

impl DispatchInterface for DispatchClass1 {
    fn test(&self) -> i32 {
        1
    }
}

#[derive(Debug, Default)]
pub struct DispatchClass2;

impl DispatchInterface for DispatchClass2 {
    fn test(&self) -> i32 {
        2
    }
}

/// Object with overloaded constructors, setters and `test` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchTest {
    pub a: i32,
    pub b: f32,
}

impl Default for DispatchTest {
    fn default() -> Self {
        Self { a: 1, b: 2.0 }
    }
}

impl DispatchTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(a: i32) -> Self {
        Self { a, ..Self::default() }
    }

    pub fn with_b(b: f32) -> Self {
        Self { b, ..Self::default() }
    }

    pub fn with_a_b(a: i32, b: f32) -> Self {
        Self { a, b }
    }

    /// `set(int)` / `set(float)`: the field written depends on the argument type.
    pub fn set<T: SetArg>(&mut self, value: T) {
        value.assign(self);
    }

    /// `test(DispatchInterface)` / `test(DispatchClass1)`: the most specific overload for the
    /// argument's static type is chosen.
    pub fn test<T: TestArg>(&self, obj: T) -> i32 {
        obj.dispatch()
    }

    /// Forwarding through an interface-typed parameter widens the static type.
    pub fn test_test(&self, obj: &dyn DispatchInterface) -> i32 {
        self.test(obj)
    }
}

/// Argument types accepted by [`DispatchTest::set`].
pub trait SetArg {
    fn assign(self, target: &mut DispatchTest);
}

impl SetArg for i32 {
    fn assign(self, target: &mut DispatchTest) {
        target.a = self;
    }
}

impl SetArg for f32 {
    fn assign(self, target: &mut DispatchTest) {
        target.b = self;
    }
}

/// Argument types accepted by [`DispatchTest::test`].
pub trait TestArg {
    fn dispatch(self) -> i32;
}

impl TestArg for &DispatchClass1 {
    fn dispatch(self) -> i32 {
        self.test() + 10
    }
}

impl TestArg for &DispatchClass2 {
    fn dispatch(self) -> i32 {
        (self as &dyn DispatchInterface).dispatch()
    }
}

impl TestArg for &dyn DispatchInterface {
    fn dispatch(self) -> i32 {
        self.test()
    }
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("default_constructor", || {
            let test = DispatchTest::new();
            check_eq((test.a, test.b), (1, 2.0))
        })?
        .case("constructor_overloads", || {
            check_eq(
                [
                    DispatchTest::with_a(4),
                    DispatchTest::with_b(3.5),
                    DispatchTest::with_a_b(6, 0.5),
                ],
                [
                    DispatchTest { a: 4, b: 2.0 },
                    DispatchTest { a: 1, b: 3.5 },
                    DispatchTest { a: 6, b: 0.5 },
                ],
            )
        })?
        .case("set_int_overload", || {
            let mut test = DispatchTest::new();
            test.set(5);
            check_eq((test.a, test.b), (5, 2.0))
        })?
        .case("set_float_overload", || {
            let mut test = DispatchTest::new();
            test.set(5);
            test.set(7.0f32);
            check_eq((test.a, test.b), (5, 7.0))
        })?
        .case("most_specific_overload", || {
            let test = DispatchTest::new();
            check_eq(test.test(&DispatchClass1), 11)
        })?
        .case("interface_overload", || {
            let test = DispatchTest::new();
            check_eq(test.test(&DispatchClass2), 2)
        })?
        .case("widened_static_type", || {
            let test = DispatchTest::new();
            check_eq(test.test_test(&DispatchClass1), 1)
        })?
        .case("widened_interface_type", || {
            let test = DispatchTest::new();
            check_eq(test.test_test(&DispatchClass2), 2)
        })?;
    Ok(())
}

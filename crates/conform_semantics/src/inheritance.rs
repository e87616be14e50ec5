//! Inheritance, overriding, `super` calls and method-local types.
//!
//! A base class with overridable methods becomes a trait with default methods over an embedded
//! base struct. Overrides replace the default; `super.method()` calls the base struct's own
//! implementation.

use conform_core::{Registry, RegistryError, check, check_eq};

use crate::Group;

pub const GROUP: &str = "inheritance";

/// Overridable behaviour of [`Value`] and its subclasses.
pub trait ValueBehaviour {
    fn base(&self) -> &Value;
    fn base_mut(&mut self) -> &mut Value;

    fn get_value(&self) -> i32 {
        self.base().value
    }

    fn set_value(&mut self, value: i32) {
        self.base_mut().value = value;
    }

    fn is_positive(&self) -> bool {
        self.get_value() > 0
    }

    /// -1 if `value` is below ours, 0 if equal, 1 if above.
    fn compare(&self, value: i32) -> i32 {
        let own = self.get_value();
        if value < own {
            -1
        } else if value == own {
            0
        } else {
            1
        }
    }

    fn add(&self, value: i32) -> i32 {
        self.get_value() + value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    value: i32,
}

impl Value {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// A separate object holding the same value.
    pub fn new_value(&self) -> Value {
        Value::new(self.get_value())
    }
}

impl ValueBehaviour for Value {
    fn base(&self) -> &Value {
        self
    }

    fn base_mut(&mut self) -> &mut Value {
        self
    }
}

/// Subclass that chains to the base constructor and overrides `set_value` and `add`.
#[derive(Debug, Clone)]
pub struct ValueSubClass {
    base: Value,
    pub tmp: Value,
}

impl ValueSubClass {
    pub fn new(x: i32) -> Self {
        Self {
            base: Value::new(x),
            tmp: Value::new(42),
        }
    }

    pub fn set_value_object(&mut self, other: &dyn ValueBehaviour) {
        self.base.value = other.get_value();
    }
}

impl ValueBehaviour for ValueSubClass {
    fn base(&self) -> &Value {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Value {
        &mut self.base
    }

    fn set_value(&mut self, x: i32) {
        self.base.value = -x;
    }

    fn add(&self, x: i32) -> i32 {
        self.base.add(-x)
    }
}

/// Method declaring and instantiating a type in its own body.
pub fn outer(a: i32) -> i32 {
    struct InnerClass;

    impl InnerClass {
        fn inner(&self, b: i32) -> i32 {
            b + 1
        }
    }

    InnerClass.inner(a)
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("get_and_set", || {
            let mut v = Value::new(123);
            check_eq(v.get_value(), 123)?;
            v.set_value(456);
            check_eq(v.get_value(), 456)
        })?
        .case("is_positive", || {
            let mut v = Value::new(456);
            let before = v.is_positive();
            v.set_value(-789);
            check_eq((before, v.is_positive()), (true, false))
        })?
        .case("compare", || {
            let v = Value::new(-789);
            check_eq([v.compare(-790), v.compare(-788), v.compare(-789)], [-1, 1, 0])
        })?
        .case("copies_have_separate_state", || {
            let v = Value::new(-789);
            let mut v2 = v.new_value();
            v2.set_value(123);
            check(v.get_value() != v2.get_value(), "copy does not alias the original")?;
            check_eq(v2.add(-123), 0)
        })?
        .case("copy_set_value_round_trip", || {
            let mut v2 = Value::new(-789).new_value();
            v2.set_value(255);
            check_eq(v2.get_value(), 255)
        })?
        .case("base_constructor_chaining", || {
            let vs = ValueSubClass::new(109);
            check_eq((vs.get_value(), vs.tmp.get_value()), (109, 42))
        })?
        .case("overridden_setter", || {
            let mut vs = ValueSubClass::new(109);
            vs.set_value(404);
            check_eq(vs.get_value(), -404)
        })?
        .case("override_calls_super", || {
            let mut vs = ValueSubClass::new(109);
            vs.set_value(404);
            check_eq(vs.add(404), -808)
        })?
        .case("dynamic_dispatch_uses_override", || {
            let mut vs = ValueSubClass::new(0);
            let as_base: &mut dyn ValueBehaviour = &mut vs;
            as_base.set_value(7);
            check_eq(as_base.get_value(), -7)
        })?
        .case("argument_object_value", || check_eq(Value::new(686).get_value(), 686))?
        .case("object_argument", || {
            let sv = Value::new(686);
            check_eq(sv.get_value(), 686)?;
            let mut vs = ValueSubClass::new(109);
            vs.set_value_object(&sv);
            check_eq(vs.get_value(), 686)
        })?
        .case("method_local_type", || check_eq(outer(41), 42))?;
    Ok(())
}

//! Field initialisation order and field resolution through subclasses.

use std::ops::Deref;
use std::sync::LazyLock;

use conform_core::{Registry, RegistryError, check, check_eq};

use crate::Group;

pub const GROUP: &str = "fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTestClass {
    pub a: i32,
}

impl FieldTestClass {
    pub fn new(a: i32) -> Self {
        Self { a }
    }
}

/// Static declared without an initialiser.
static G: Option<FieldTestClass> = None;

/// Static initialised with a constructed object on first access.
static H: LazyLock<FieldTestClass> = LazyLock::new(|| FieldTestClass::new(789));

/// Object whose instance initialisers depend on previously initialised fields.
#[derive(Debug, Clone)]
pub struct FieldTest {
    a: i32,
    b: i32,
    pub c: Option<FieldTestClass>,
    pub d: Option<FieldTestClass>,
    pub e: FieldTestClass,
    pub f: FieldTestClass,
}

impl Default for FieldTest {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldTest {
    pub fn new() -> Self {
        // Initialisers run in declaration order; `f` reads `b` and `e`.
        let b = 123;
        let e = FieldTestClass::new(456);
        let f = FieldTestClass::new(b + e.a);
        Self {
            a: 0,
            b,
            c: None,
            d: None,
            e,
            f,
        }
    }

    /// Static field `g`, never assigned.
    pub fn g() -> Option<&'static FieldTestClass> {
        G.as_ref()
    }

    /// Static field `h`, shared by every instance and subclass.
    pub fn h() -> &'static FieldTestClass {
        &H
    }

    /// Method sharing its name with the `b` field.
    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn a(&self) -> i32 {
        self.a
    }
}

/// Subclass adding no fields of its own.
#[derive(Debug, Clone, Default)]
pub struct FieldSubclassTest {
    base: FieldTest,
}

impl FieldSubclassTest {
    pub fn new() -> Self {
        Self { base: FieldTest::new() }
    }

    pub fn g() -> Option<&'static FieldTestClass> {
        FieldTest::g()
    }

    pub fn h() -> &'static FieldTestClass {
        FieldTest::h()
    }
}

impl Deref for FieldSubclassTest {
    type Target = FieldTest;

    fn deref(&self) -> &FieldTest {
        &self.base
    }
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("static_initialiser", || check_eq(FieldTest::h().a, 789))?
        .case("unassigned_static_is_null", || {
            check(FieldTest::g().is_none() && FieldSubclassTest::g().is_none(), "static g is null")
        })?
        .case("instance_initialiser", || check_eq(FieldTest::new().e.a, 456))?
        .case("initialiser_reads_earlier_fields", || check_eq(FieldTest::new().f.a, 579))?
        .case("uninitialised_fields_default", || {
            let test = FieldTest::new();
            check(
                test.a() == 0 && test.c.is_none() && test.d.is_none(),
                "unset int is 0 and unset references are null",
            )
        })?
        .case("method_and_field_share_name", || check_eq(FieldTest::new().b(), 123))?
        .case("static_is_shared", || {
            check(
                std::ptr::eq(FieldTest::h(), FieldSubclassTest::h()),
                "subclass and base resolve the same static",
            )
        })?
        .case("subclass_static_field", || check_eq(FieldSubclassTest::h().a, 789))?
        .case("subclass_inherited_fields", || {
            let test = FieldSubclassTest::new();
            check_eq((test.e.a, test.f.a), (456, 579))
        })?;
    Ok(())
}

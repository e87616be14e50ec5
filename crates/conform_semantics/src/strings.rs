//! String construction, concatenation and string buffers.

use std::sync::LazyLock;

use conform_core::{Registry, RegistryError, check, check_eq};

use crate::Group;

pub const GROUP: &str = "strings";

pub static S4: LazyLock<String> = LazyLock::new(|| String::from("xyz"));

/// Object built through three constructor overloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTest {
    s: String,
    s2: String,
}

impl Default for StringTest {
    fn default() -> Self {
        let s2 = String::from("abc");
        Self { s: s2.clone(), s2 }
    }
}

impl StringTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_one(new_string: &str) -> Self {
        Self {
            s: new_string.to_string(),
            ..Self::default()
        }
    }

    pub fn from_two(first: &str, second: &str) -> Self {
        Self {
            s: format!("{}{}", first, second),
            ..Self::default()
        }
    }

    pub fn s(&self) -> &str {
        &self.s
    }

    pub fn s2(&self) -> &str {
        &self.s2
    }
}

/// Two buffers plus their concatenation.
#[derive(Debug, Clone)]
pub struct StringBufferTest {
    pub sb1: String,
    pub sb2: String,
    pub s: String,
}

impl StringBufferTest {
    pub fn new(a: &str, b: &str) -> Self {
        let mut s = String::with_capacity(a.len() + b.len());
        s.push_str(a);
        s.push_str(b);
        Self {
            sb1: String::from(a),
            sb2: String::from(b),
            s,
        }
    }
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("static_string", || check_eq(S4.as_str(), "xyz"))?
        .case("default_constructor_copies_field", || check_eq(StringTest::new().s(), "abc"))?
        .case("copy_is_equal_by_value", || {
            let test = StringTest::new();
            check(test.s() == test.s2(), "s equals s2 by value")
        })?
        .case("single_argument_constructor", || check_eq(StringTest::from_one("Test").s(), "Test"))?
        .case("concatenating_constructor", || {
            check_eq(StringTest::from_two("Hello ", "world").s(), "Hello world")
        })?
        .case("buffer_round_trip", || {
            let test = StringBufferTest::new("Hello ", "world");
            check_eq((test.sb1.as_str(), test.sb2.as_str()), ("Hello ", "world"))
        })?
        .case("buffer_concatenation", || {
            check_eq(StringBufferTest::new("Hello ", "world").s, "Hello world".to_string())
        })?
        .case("concatenation_with_numbers", || {
            check_eq(format!("test.get({}) correct: {}", 3, 13), "test.get(3) correct: 13".to_string())
        })?;
    Ok(())
}

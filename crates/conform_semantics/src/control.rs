//! `switch` fall-through and integer comparisons.

use conform_core::{Registry, RegistryError, check_eq};

use crate::Group;

pub const GROUP: &str = "control";

/// `case 0:` falls through into `case 1:`; `default` leaves the value untouched.
pub fn switch(x: i32) -> i32 {
    match x {
        0 | 1 => x + 10,
        2 => x + 20,
        _ => x,
    }
}

pub fn equals(x: i32, y: i32) -> bool {
    x == y
}

pub fn less_than(x: i32, y: i32) -> bool {
    x < y
}

pub fn greater_than(x: i32, y: i32) -> bool {
    x > y
}

pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    Group::new(registry, GROUP)
        .case("switch_fall_through", || check_eq([switch(0), switch(1)], [10, 11]))?
        .case("switch_case_with_break", || check_eq(switch(2), 22))?
        .case("switch_default", || check_eq(switch(3), 3))?
        .case("equals", || check_eq([equals(1, -1), equals(10, 10)], [false, true]))?
        .case("less_than", || check_eq([less_than(1, -1), less_than(1, 15)], [false, true]))?
        .case("greater_than", || {
            check_eq([greater_than(23, 29), greater_than(-23, -29)], [false, true])
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_leaves_negative_values() {
        assert_eq!(switch(-1), -1);
    }
}

//! The reference reproductions must satisfy every built-in case.

use conform_semantics::{GROUPS, registry};

#[test]
fn every_builtin_case_passes() {
    let registry = registry().expect("built-in suite registers cleanly");
    assert!(!registry.is_empty());

    let failures: Vec<String> = registry
        .all()
        .filter_map(|case| match case.invoke() {
            Ok(_) => None,
            Err(err) => Some(format!("{}: {}", case.name(), err)),
        })
        .collect();

    assert!(failures.is_empty(), "failing built-in cases:\n{}", failures.join("\n"));
}

#[test]
fn groups_register_in_declared_order() {
    let registry = registry().unwrap();
    let mut order: Vec<&str> = Vec::new();
    for name in registry.names() {
        let group = name.split("::").next().unwrap();
        if order.last() != Some(&group) {
            order.push(group);
        }
    }
    assert_eq!(order, GROUPS);
}

#[test]
fn every_group_has_cases() {
    let registry = registry().unwrap();
    for group in GROUPS {
        let prefix = format!("{}::", group);
        assert!(
            registry.names().any(|n| n.starts_with(&prefix)),
            "group {} registered no cases",
            group
        );
    }
}

#[test]
fn known_case_messages() {
    let registry = registry().unwrap();
    let outcome = registry.get("exceptions::sequential_try_blocks").unwrap().invoke();
    assert_eq!(outcome, Ok("expected [23, 12, 31], got [23, 12, 31]".to_string()));

    let outcome = registry.get("dispatch::widened_static_type").unwrap().invoke();
    assert_eq!(outcome, Ok("expected 1, got 1".to_string()));

    let outcome = registry.get("inheritance::copy_set_value_round_trip").unwrap().invoke();
    assert_eq!(outcome, Ok("expected 255, got 255".to_string()));

    let outcome = registry.get("inheritance::argument_object_value").unwrap().invoke();
    assert_eq!(outcome, Ok("expected 686, got 686".to_string()));

    let outcome = registry.get("fields::unassigned_static_is_null").unwrap().invoke();
    assert_eq!(outcome, Ok("static g is null".to_string()));
}

//! Process-level tests for the `conform` binary: exit codes and stdout/stderr contracts.

use std::process::{Command, Output};

fn conform(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_conform"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run conform")
}

#[test]
fn test_clean_run_exits_zero() {
    let output = conform(&[]);
    assert!(
        output.status.success(),
        "conform failed: status={:?} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = stdout.lines().last().unwrap_or_default();
    assert!(summary.ends_with(" passed, 0 failed"), "unexpected summary: {}", summary);
    assert!(!stdout.contains("FAIL:"), "stdout had failures:\n{}", stdout);
}

#[test]
fn test_failing_run_exits_one() {
    let output = conform(&["run", "-k", "arrays", "--budget-ms", "0", "--color", "never"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FAIL: arrays::"), "stdout:\n{}", stdout);
    assert!(stdout.contains("exceeded time budget of 0ms"), "stdout:\n{}", stdout);
    assert!(stdout.lines().last().is_some_and(|l| l.starts_with("0 passed, ")));
}

#[test]
fn test_log_output_has_no_ansi_when_piped() {
    let output = conform(&["run", "-k", "arrays", "--budget-ms", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeded time budget"), "expected warn logs, got:\n{}", stderr);
    assert!(!stderr.contains('\x1b'), "stderr carries escape codes:\n{}", stderr);
}

#[test]
fn test_empty_selection_emits_json_document() {
    let output = conform(&["run", "-k", "nomatch", "--format", "json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No cases collected"));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["outcomes"], serde_json::json!([]));
    assert_eq!(value["passed"], 0);
    assert_eq!(value["failed"], 0);
}

#[test]
fn test_empty_selection_prints_summary() {
    let output = conform(&["run", "-k", "nomatch"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 passed, 0 failed\n");
}

#[test]
fn test_list_prints_names_in_order() {
    let output = conform(&["list", "-k", "control::"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.first(), Some(&"control::switch_fall_through"));
    assert!(names.iter().all(|n| n.starts_with("control::")));
}

//! Layering guardrails to keep the case model independent of the built-in suite.
//!
//! `conform_semantics` depends on `conform_core`, never the other way around.
//! This test scans the `conform_core` manifest and fails if `conform_semantics`
//! appears in `[dependencies]`.

#[test]
fn core_does_not_depend_on_semantics() {
    let manifest = include_str!("../crates/conform_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if line_no_comment.starts_with("conform_semantics") || line_no_comment.starts_with("conform ") {
            panic!("`conform_core` must not depend on `{}`", line_no_comment);
        }
    }
}

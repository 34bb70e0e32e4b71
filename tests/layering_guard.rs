//! Layering guardrails to keep the vocabulary crate free of dependencies.
//!
//! `caiac_core` holds the Go keyword list, identifier rules, and kind registries. It must stay a leaf crate so any
//! tool can use it without pulling in the generator's stack. This test scans its `Cargo.toml` and fails if the
//! `[dependencies]` table lists anything.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/caiac_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`caiac_core` must not declare dependencies, found: {line}");
    }
}

//! Go source printing
//!
//! This module turns a Go syntax tree into canonically formatted text, matching what `gofmt` produces for the
//! supported subset:
//! - tab indentation
//! - one blank line between top-level declarations
//! - grouped imports in declaration order (never sorted)
//!
//! It also provides the line diff used to preview changes to a generated file.

mod printer;
mod writer;

pub use printer::Printer;
pub use writer::FormatWriter;

use crate::backend::go_ast::File;

/// Print a Go syntax tree as canonical source text
pub fn print_file(file: &File) -> String {
    Printer::new().print(file)
}

/// Get the diff between the current and the desired contents of a file
///
/// Returns `None` when both are identical. Lines are compared positionally; removed lines are prefixed with `-`
/// and added lines with `+`, each followed by the 1-based line number.
pub fn format_diff(current: &str, desired: &str) -> Option<String> {
    if current == desired {
        return None;
    }

    let mut diff = String::new();
    let current_lines: Vec<&str> = current.lines().collect();
    let desired_lines: Vec<&str> = desired.lines().collect();

    let max_lines = current_lines.len().max(desired_lines.len());

    for i in 0..max_lines {
        let old = current_lines.get(i).copied();
        let new = desired_lines.get(i).copied();

        if old != new {
            if let Some(old) = old {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, old));
            }
            if let Some(new) = new {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, new));
            }
        }
    }

    if diff.is_empty() {
        diff.push_str("~      | trailing newline differs\n");
    }

    Some(diff)
}

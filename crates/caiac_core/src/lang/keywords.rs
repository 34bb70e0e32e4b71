//! Go keyword vocabulary (for identifier validation during rendering).
//!
//! Go reserves exactly 25 keywords. Predeclared identifiers such as `nil`, `true`, `int` or `string` are *not*
//! keywords and remain valid identifiers.

/// Reserved keywords of Go.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check whether an identifier is a Go keyword.
pub fn is_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

//! Go identifier rules.
//!
//! An identifier is an ASCII letter or `_` followed by any number of ASCII letters, digits, and underscores, and must
//! not be a reserved keyword. Non-ASCII spellings are rejected even where Go would accept them, since telling Go's
//! letter and digit categories apart needs Unicode tables this crate does not carry.
//!
//! ## Examples
//! ```rust
//! use caiac_core::lang::idents;
//!
//! assert!(idents::is_valid_ident("Println"));
//! assert!(!idents::is_valid_ident("9lives"));
//! assert!(!idents::is_valid_ident("x²"));
//! ```

use super::keywords;

/// Why a spelling is not a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentIssue {
    Empty,
    LeadingDigit,
    InvalidChar(char),
    Keyword,
}

impl std::fmt::Display for IdentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentIssue::Empty => write!(f, "identifier is empty"),
            IdentIssue::LeadingDigit => write!(f, "identifier starts with a digit"),
            IdentIssue::InvalidChar(c) => write!(f, "identifier contains invalid character {c:?}"),
            IdentIssue::Keyword => write!(f, "identifier is a reserved Go keyword"),
        }
    }
}

fn is_letter(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check a bare identifier, reporting the first problem found.
pub fn check_ident(name: &str) -> Result<(), IdentIssue> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(IdentIssue::Empty);
    };
    if is_digit(first) {
        return Err(IdentIssue::LeadingDigit);
    }
    if !is_letter(first) {
        return Err(IdentIssue::InvalidChar(first));
    }
    if let Some(bad) = chars.find(|c| !is_letter(*c) && !is_digit(*c)) {
        return Err(IdentIssue::InvalidChar(bad));
    }
    if keywords::is_keyword(name) {
        return Err(IdentIssue::Keyword);
    }
    Ok(())
}

/// Whether `name` is a valid bare Go identifier.
pub fn is_valid_ident(name: &str) -> bool {
    check_ident(name).is_ok()
}

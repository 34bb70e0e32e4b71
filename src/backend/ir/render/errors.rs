//! Define error types for IR → Go rendering.
//!
//! These errors represent IR that cannot be emitted as valid Go (as opposed to declarations that could not be
//! translated at all).
//!
//! ## Notes
//!
//! - Every variant names where the offending node sits (e.g. "parameter 1 of `main`") so the message is actionable
//!   without the IR at hand.

use caiac_core::lang::idents::IdentIssue;
use miette::Diagnostic;
use thiserror::Error;

/// Error during IR rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RenderError {
    #[error("invalid identifier `{name}` for {location}: {issue}")]
    #[diagnostic(
        code(caiac::render::invalid_identifier),
        help("identifiers start with an ASCII letter or `_`, continue with ASCII letters, digits, or `_`, and cannot be Go keywords")
    )]
    InvalidIdentifier {
        location: String,
        name: String,
        issue: IdentIssue,
    },

    #[error("import {index} has an empty path")]
    #[diagnostic(code(caiac::render::empty_import_path))]
    EmptyImportPath { index: usize },

    #[error("{location} has neither a name nor a type")]
    #[diagnostic(code(caiac::render::degenerate_field), help("give the field a `type`, a `name`, or both"))]
    DegenerateField { location: String },

    #[error("{location} mixes named and unnamed fields")]
    #[diagnostic(
        code(caiac::render::mixed_field_names),
        help("either name every field (the last one must also have a type) or name none of them")
    )]
    MixedFieldNames { location: String },
}

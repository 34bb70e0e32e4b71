//! Error types for declarative tree to IR translation.
//!
//! Translation stops at the first failure, so a single [`TranslationError`] is returned rather than a collection.
//! Every variant names the offending node by its [`NodePath`] so callers can surface a precise diagnostic.

use miette::Diagnostic;
use thiserror::Error;

use super::path::NodePath;

/// Error while translating a declarative tree into IR.
///
/// These errors mean "the declaration is invalid". They are kept apart from
/// [`RenderError`](crate::backend::ir::RenderError), which means "this IR cannot be emitted".
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TranslationError {
    #[error("missing required attribute `{attribute}` in {node}")]
    #[diagnostic(code(caiac::translate::missing_attribute))]
    MissingAttribute { node: NodePath, attribute: &'static str },

    #[error("{path} must be {expected}, found {found}")]
    #[diagnostic(
        code(caiac::translate::type_mismatch),
        help("string attributes accept strings, numbers and booleans; blocks must be objects and lists must be arrays")
    )]
    TypeMismatch {
        path: NodePath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unsupported {construct} kind `{kind}` in {node} (expected one of: {expected})")]
    #[diagnostic(code(caiac::translate::unsupported_construct))]
    UnsupportedConstruct {
        node: NodePath,
        construct: &'static str,
        kind: String,
        expected: String,
    },

    #[error("{node} sets both `{first}` and `{second}`; use only one")]
    #[diagnostic(code(caiac::translate::conflicting_attributes))]
    ConflictingAttributes {
        node: NodePath,
        first: &'static str,
        second: &'static str,
    },

    #[error("{node} has kind `{kind}` but also sets `{block}`")]
    #[diagnostic(
        code(caiac::translate::unexpected_block),
        help("strict translation rejects sub-blocks that do not match the `kind` discriminator")
    )]
    UnexpectedBlock {
        node: NodePath,
        kind: &'static str,
        block: &'static str,
    },
}

impl TranslationError {
    /// Path of the node the error refers to.
    pub fn node(&self) -> &NodePath {
        match self {
            TranslationError::MissingAttribute { node, .. }
            | TranslationError::UnsupportedConstruct { node, .. }
            | TranslationError::ConflictingAttributes { node, .. }
            | TranslationError::UnexpectedBlock { node, .. } => node,
            TranslationError::TypeMismatch { path, .. } => path,
        }
    }
}

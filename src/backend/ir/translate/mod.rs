//! Declarative tree to IR translation.
//!
//! This module converts a declarative description of a Go file (a JSON document whose shape mirrors the IR one
//! block per node kind) into a [`SourceFile`].
//!
//! # Architecture
//!
//! - `errors` - Error type (`TranslationError`)
//! - `path` - Node locations for diagnostics (`NodePath`)
//! - `attrs` - Attribute extraction and scalar coercion
//! - `decl` - Imports, functions, signatures
//! - `stmt` - Statements and bodies
//! - `expr` - Expressions and literals
//!
//! # Discriminator policy
//!
//! Sum types (expressions, statements, literals) are selected by a `kind` attribute. Only the sub-block matching
//! that kind is read. By default, sub-blocks for other kinds are **ignored** even when present. A strict
//! translator ([`Translator::strict`]) rejects them instead. Unknown `kind` values are always an
//! [`TranslationError::UnsupportedConstruct`] error.
//!
//! # Usage
//!
//! ```rust
//! use caiac::backend::ir::translate;
//! use serde_json::json;
//!
//! let ir = translate(&json!({ "packageName": "main" })).unwrap();
//! assert_eq!(ir.package_name, "main");
//! ```

mod attrs;
mod decl;
mod errors;
mod expr;
mod path;
mod stmt;

use serde_json::Value;

use super::SourceFile;
use attrs::Block;

pub use errors::TranslationError;
pub use path::NodePath;

/// Declarative tree to IR translator.
///
/// Holds no state between calls; the only setting is whether mismatched sub-blocks are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    strict: bool,
}

impl Translator {
    /// Translator with the default, lenient discriminator policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator that rejects sub-blocks not matching their `kind` discriminator.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Translate a complete declarative tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`TranslationError`] encountered; no partially-built IR is returned.
    #[tracing::instrument(skip_all, fields(strict = self.strict))]
    pub fn translate(&self, tree: &Value) -> Result<SourceFile, TranslationError> {
        let root = Block::from_value(tree, NodePath::root())?;

        let package_name = root.required_string("packageName")?;
        let imports = root
            .blocks("imports")?
            .iter()
            .map(|b| self.translate_import(b))
            .collect::<Result<Vec<_>, _>>()?;
        let functions = root
            .blocks("functions")?
            .iter()
            .map(|b| self.translate_function(b))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            package = %package_name,
            imports = imports.len(),
            functions = functions.len(),
            "translated declarative tree"
        );

        Ok(SourceFile {
            package_name,
            imports,
            functions,
        })
    }
}

/// Translate a declarative tree with the default (lenient) translator.
pub fn translate(tree: &Value) -> Result<SourceFile, TranslationError> {
    Translator::new().translate(tree)
}

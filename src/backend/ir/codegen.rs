//! IR-based code generation facade
//!
//! This module provides `GoCodegen`, a single entry point that runs the whole pipeline:
//!
//! ```text
//! declarative tree → Translator → IR → Renderer → canonical Go text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use caiac::backend::GoCodegen;
//! use serde_json::json;
//!
//! let tree = json!({ "packageName": "main" });
//! let source = GoCodegen::new().try_generate(&tree).unwrap();
//! assert_eq!(source, "package main\n");
//! ```
//!
//! ## Error Handling
//!
//! Both stages fail fast: the first translation or rendering problem is returned as a [`GenerationError`] and no
//! partial text is produced.

use miette::Diagnostic;
use serde_json::Value;
use thiserror::Error;

use super::render::{RenderError, Renderer};
use super::translate::{TranslationError, Translator};

/// Error during Go code generation.
///
/// Wraps the error of whichever stage failed. Diagnostics (code, help) are forwarded from the inner error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerationError {
    /// The declarative tree could not be translated to IR
    #[error(transparent)]
    #[diagnostic(transparent)]
    Translation(#[from] TranslationError),

    /// The IR could not be rendered as valid Go
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

/// Go code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoCodegen {
    translator: Translator,
    renderer: Renderer,
}

impl GoCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose translator rejects sub-blocks that do not match the declared kind.
    pub fn strict() -> Self {
        Self {
            translator: Translator::strict(),
            renderer: Renderer::new(),
        }
    }

    /// Generate Go source text from a declarative tree.
    #[tracing::instrument(skip_all, fields(strict = self.translator.is_strict()))]
    pub fn try_generate(&self, tree: &Value) -> Result<String, GenerationError> {
        let ir = self.translator.translate(tree)?;
        let source = self.renderer.render(&ir)?;
        Ok(source)
    }
}

/// Generate Go source text from a declarative tree with the default (lenient) generator.
pub fn generate(tree: &Value) -> Result<String, GenerationError> {
    GoCodegen::new().try_generate(tree)
}

//! Typed Intermediate Representation (IR) of Go source files
//!
//! This module defines a small typed IR that sits between the declarative description of a Go file and the emitted
//! source text. The IR is:
//!
//! - **Closed**: every tagged union is a Rust enum, so a kind can never disagree with its payload
//! - **Owned**: a parent node owns its children outright; there is no sharing and no cycles
//! - **Ordered**: imports, functions, fields, and statements keep their declaration order
//!
//! ## Pipeline
//!
//! ```text
//! declarative tree (JSON) → translate → IR → render → Go syntax tree → canonical text
//! ```
//!
//! The IR is rebuilt from the declarative tree on every request and dropped once the text (or an error) is produced.

pub mod codegen;
pub mod decl;
pub mod expr;
pub mod render;
pub mod stmt;
pub mod translate;

pub use codegen::{GenerationError, GoCodegen, generate};
pub use decl::{Field, FunctionDecl, ImportSpec, Signature};
pub use expr::{CallExpr, Expr, Ident, Literal, Selector};
pub use render::{RenderError, render};
pub use stmt::{Body, Stmt};
pub use translate::{TranslationError, translate};

/// Root of the IR: one Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package_name: String,
    /// Rendered as one grouped import declaration, in this order (no sorting, no deduplication).
    pub imports: Vec<ImportSpec>,
    pub functions: Vec<FunctionDecl>,
}

impl SourceFile {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            imports: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn with_import(mut self, import: ImportSpec) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_function(mut self, function: FunctionDecl) -> Self {
        self.functions.push(function);
        self
    }
}

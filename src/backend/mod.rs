//! Go code generation backend
//!
//! This module turns a declarative description of a Go file into canonical Go source text.
//!
//! The pipeline is:
//! 1. Declarative tree (`serde_json::Value`) → `Translator` → IR (`ir::SourceFile`)
//! 2. IR → `Renderer` → Go syntax tree (`go_ast::File`)
//! 3. Go syntax tree → `format::print_file` → text
//!
//! ## Module Organization
//!
//! - `ir/` - Typed IR plus the translate and render stages
//! - `go_ast` - Go syntax tree for the supported subset

#![deny(clippy::unwrap_used)]

pub mod go_ast;
pub mod ir;

pub use ir::{
    GenerationError, GoCodegen, RenderError, SourceFile, TranslationError, generate, render, translate,
};
pub use ir::render::Renderer;
pub use ir::translate::{NodePath, Translator};

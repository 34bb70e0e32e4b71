//! Render Go source code from IR.
//!
//! This module defines [`Renderer`] and wires together the focused submodules that implement IR → Go emission.
//!
//! ## Notes
//! - Rendering builds a Go syntax tree ([`crate::backend::go_ast`]) and serializes it with
//!   [`crate::format::print_file`], which reproduces gofmt's layout.
//! - Rendering is pure: identical IR always yields byte-identical text.
//!
//! ## See also
//! - [`nodes`]: leaf constructors (identifiers, literals, selectors, type references)
//! - [`decls`]: imports, functions, and signatures
//! - [`statements`]: statement emission
//! - [`expressions`]: expression emission

mod decls;
mod errors;
mod expressions;
pub mod nodes;
mod statements;

pub use errors::RenderError;

use super::SourceFile;
use crate::backend::go_ast;
use crate::format;

/// Render a [`SourceFile`] to Go source text.
///
/// Stateless; a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the file to canonical Go source.
    #[tracing::instrument(skip_all, fields(package = %file.package_name))]
    pub fn render(&self, file: &SourceFile) -> Result<String, RenderError> {
        let tree = self.build_file(file)?;
        let text = format::print_file(&tree);
        tracing::debug!(bytes = text.len(), "rendered go source");
        Ok(text)
    }

    /// Build the Go syntax tree for a file without printing it.
    pub fn build_file(&self, file: &SourceFile) -> Result<go_ast::File, RenderError> {
        let name = nodes::ident(&file.package_name, "package clause")?;

        let mut decls = Vec::with_capacity(file.functions.len() + 1);
        if !file.imports.is_empty() {
            decls.push(go_ast::Decl::Import(self.build_imports(&file.imports)?));
        }
        for (i, function) in file.functions.iter().enumerate() {
            decls.push(go_ast::Decl::Func(self.build_function(i, function)?));
        }

        Ok(go_ast::File { name, decls })
    }
}

/// Render a [`SourceFile`] with the default renderer.
pub fn render(file: &SourceFile) -> Result<String, RenderError> {
    Renderer::new().render(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ir::{Body, Expr, FunctionDecl, ImportSpec, Literal, Selector, Stmt};

    fn hello_world() -> SourceFile {
        SourceFile::new("main")
            .with_import(ImportSpec::new("fmt"))
            .with_function(FunctionDecl::new("main").with_body(Body::new(vec![Stmt::Expr(Expr::call(
                Selector::new(Some("fmt"), "Println"),
                vec![Literal::String("hi".into())],
            ))])))
    }

    #[test]
    fn test_render_hello_world() {
        let out = render(&hello_world()).unwrap();
        assert_eq!(out, "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let ir = hello_world();
        assert_eq!(render(&ir).unwrap(), render(&ir).unwrap());
    }

    #[test]
    fn test_no_imports_omits_import_decl() {
        let out = render(&SourceFile::new("lib")).unwrap();
        assert_eq!(out, "package lib\n");
    }

    #[test]
    fn test_invalid_package_name() {
        let err = render(&SourceFile::new("my-pkg")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid identifier `my-pkg` for package clause: identifier contains invalid character '-'"
        );
    }

    #[test]
    fn test_build_file_shape() {
        let tree = Renderer::new().build_file(&hello_world()).unwrap();
        assert_eq!(tree.name.name, "main");
        assert_eq!(tree.decls.len(), 2);
        assert!(matches!(tree.decls[0], go_ast::Decl::Import(ref specs) if specs.len() == 1));
    }
}

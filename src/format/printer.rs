//! Core printing logic for Go syntax trees
//!
//! Walks a [`go_ast::File`] and emits text in gofmt's canonical layout:
//!
//! - `package` clause, then one blank line before every top-level declaration
//! - a single import is written inline, several are grouped in parentheses, one per line
//! - a single unnamed result is written without parentheses
//! - empty function bodies are written as `{}`
//! - exactly one trailing newline

use super::writer::FormatWriter;
use crate::backend::go_ast::{BlockStmt, Decl, Expr, Field, FieldList, File, FuncDecl, ImportSpec, Stmt};

/// Printer that serializes a Go syntax tree to source text
pub struct Printer {
    writer: FormatWriter,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            writer: FormatWriter::new(),
        }
    }

    /// Print a file and return the source text
    pub fn print(mut self, file: &File) -> String {
        self.print_file(file);
        self.writer.finish()
    }

    // ========================================================================
    // File
    // ========================================================================

    fn print_file(&mut self, file: &File) {
        self.writer.write("package ");
        self.writer.writeln(&file.name.name);

        for decl in &file.decls {
            self.writer.newline();
            match decl {
                Decl::Import(specs) => self.print_import_decl(specs),
                Decl::Func(func) => self.print_func_decl(func),
            }
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn print_import_decl(&mut self, specs: &[ImportSpec]) {
        match specs {
            [single] => {
                self.writer.write("import ");
                self.print_import_spec(single);
                self.writer.newline();
            }
            _ => {
                self.writer.writeln("import (");
                self.writer.indent();
                for spec in specs {
                    self.print_import_spec(spec);
                    self.writer.newline();
                }
                self.writer.dedent();
                self.writer.writeln(")");
            }
        }
    }

    fn print_import_spec(&mut self, spec: &ImportSpec) {
        if let Some(name) = &spec.name {
            self.writer.write(&name.name);
            self.writer.write(" ");
        }
        self.writer.write(&spec.path.value);
    }

    fn print_func_decl(&mut self, func: &FuncDecl) {
        self.writer.write("func ");
        self.writer.write(&func.name.name);
        self.writer.write("(");
        self.print_field_list(&func.ty.params);
        self.writer.write(")");
        self.print_results(&func.ty.results);
        self.print_block(&func.body);
        self.writer.newline();
    }

    fn print_results(&mut self, results: &FieldList) {
        match results.list.as_slice() {
            [] => {}
            [only] if only.name.is_none() => {
                self.writer.write(" ");
                self.print_field(only);
            }
            _ => {
                self.writer.write(" (");
                self.print_field_list(results);
                self.writer.write(")");
            }
        }
    }

    fn print_field_list(&mut self, fields: &FieldList) {
        for (i, field) in fields.list.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            self.print_field(field);
        }
    }

    fn print_field(&mut self, field: &Field) {
        match (&field.name, &field.ty) {
            (Some(name), Some(ty)) => {
                self.writer.write(&name.name);
                self.writer.write(" ");
                self.print_expr(ty);
            }
            (Some(name), None) => self.writer.write(&name.name),
            (None, Some(ty)) => self.print_expr(ty),
            (None, None) => {}
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_block(&mut self, block: &BlockStmt) {
        if block.list.is_empty() {
            self.writer.write(" {}");
            return;
        }
        self.writer.writeln(" {");
        self.writer.indent();
        for stmt in &block.list {
            self.print_stmt(stmt);
            self.writer.newline();
        }
        self.writer.dedent();
        self.writer.write("}");
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => self.print_expr(expr),
            Stmt::Return(values) => {
                self.writer.write("return");
                for (i, value) in values.iter().enumerate() {
                    self.writer.write(if i == 0 { " " } else { ", " });
                    self.print_expr(value);
                }
            }
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(ident) => self.writer.write(&ident.name),
            Expr::BasicLit(lit) => self.writer.write(&lit.value),
            Expr::Selector { x, sel } => {
                self.print_expr(x);
                self.writer.write(".");
                self.writer.write(&sel.name);
            }
            Expr::Call { fun, args } => {
                self.print_expr(fun);
                self.writer.write("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.writer.write(", ");
                    }
                    self.print_expr(arg);
                }
                self.writer.write(")");
            }
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

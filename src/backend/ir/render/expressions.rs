//! Expression emission.
//!
//! Literal values are copied through untouched apart from quoting strings; names used in selectors and bare
//! identifiers are validated.

use super::super::{CallExpr, Expr, Literal, Selector};
use super::{RenderError, Renderer, nodes};
use crate::backend::go_ast;

impl Renderer {
    pub(super) fn build_expr(&self, location: &str, expr: &Expr) -> Result<go_ast::Expr, RenderError> {
        match expr {
            Expr::Call(call) => self.build_call(location, call),
            Expr::Selector(selector) => self.build_selector(location, selector),
            Expr::Literal(literal) => Ok(self.build_literal(literal)),
            Expr::Ident(ident) => Ok(go_ast::Expr::Ident(nodes::ident(ident.as_str(), location)?)),
        }
    }

    fn build_call(&self, location: &str, call: &CallExpr) -> Result<go_ast::Expr, RenderError> {
        let fun = self.build_selector(location, &call.callee)?;
        let args = call.args.iter().map(|arg| self.build_literal(arg)).collect();
        Ok(go_ast::Expr::Call {
            fun: Box::new(fun),
            args,
        })
    }

    fn build_selector(&self, location: &str, selector: &Selector) -> Result<go_ast::Expr, RenderError> {
        let base = nodes::opt_ident(selector.base.as_deref(), location)?;
        let member = nodes::ident(&selector.member, location)?;
        Ok(nodes::selector_expr(base, member))
    }

    fn build_literal(&self, literal: &Literal) -> go_ast::Expr {
        match literal {
            Literal::Identifier(raw) => go_ast::Expr::Ident(nodes::ident_lit(raw)),
            Literal::String(raw) => go_ast::Expr::BasicLit(nodes::string_lit(raw)),
            Literal::Int(raw) => go_ast::Expr::BasicLit(nodes::int_lit(raw)),
        }
    }
}

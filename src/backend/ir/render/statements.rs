//! Statement emission.

use super::super::{Body, Stmt};
use super::{RenderError, Renderer};
use crate::backend::go_ast;

impl Renderer {
    pub(super) fn build_body(&self, func_name: &str, body: &Body) -> Result<go_ast::BlockStmt, RenderError> {
        let list = body
            .statements
            .iter()
            .enumerate()
            .map(|(i, stmt)| self.build_stmt(&format!("statement {i} of `{func_name}`"), stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(go_ast::BlockStmt { list })
    }

    fn build_stmt(&self, location: &str, stmt: &Stmt) -> Result<go_ast::Stmt, RenderError> {
        match stmt {
            Stmt::Expr(expr) => Ok(go_ast::Stmt::Expr(self.build_expr(location, expr)?)),
            Stmt::Return(values) => {
                let values = values
                    .iter()
                    .map(|value| self.build_expr(location, value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(go_ast::Stmt::Return(values))
            }
        }
    }
}

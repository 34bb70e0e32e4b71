//! IR statement definitions

use super::Expr;

/// An IR statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Expression statement (`fmt.Println("hi")`)
    Expr(Expr),

    /// Return statement with zero or more result values (`return`, `return x, nil`)
    Return(Vec<Expr>),
}

/// Ordered statements of a function body, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub statements: Vec<Stmt>,
}

impl Body {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

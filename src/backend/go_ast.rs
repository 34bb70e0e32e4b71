//! Go syntax tree for the supported subset.
//!
//! These nodes model the part of Go's `go/ast` that generated files use: a file with a package clause, one import
//! declaration, and function declarations whose bodies hold expression and return statements.
//!
//! The tree performs no validation of its own. Identifier checks happen in the renderer's node constructors
//! (`backend::ir::render::nodes`) before a node is built; the printer in [`crate::format`] then serializes whatever
//! tree it is handed.

/// Identifier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Kind of a basic literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    String,
}

/// Basic literal; `value` is the exact source text (quotes included for strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    /// `x.sel`
    Selector { x: Box<Expr>, sel: Ident },
    /// `fun(args...)`
    Call { fun: Box<Expr>, args: Vec<Expr> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expr(Expr),
    Return(Vec<Expr>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStmt {
    pub list: Vec<Stmt>,
}

/// Parameter or result. Either part may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<Ident>,
    pub ty: Option<Expr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    pub list: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    pub params: FieldList,
    pub results: FieldList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Ident,
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: BasicLit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// One `import` declaration; parenthesised when it holds more than one spec.
    Import(Vec<ImportSpec>),
    Func(FuncDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: Ident,
    pub decls: Vec<Decl>,
}

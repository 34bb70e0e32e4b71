//! Discriminator vocabularies for the declarative tree.
//!
//! The declarative description selects the active variant of each sum type with a string `kind` attribute. These
//! registries are the single source of truth for the accepted spellings, so the translator and its diagnostics
//! ("expected one of ...") never drift apart.
//!
//! ## Notes
//! - Lookup is **case-sensitive**; there are no aliases.
//! - Tables are `const` and order-independent: nothing needs initialising before use.

/// Stable identifier for an expression kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKindId {
    Call,
    Selector,
    Identifier,
    Literal,
}

/// Stable identifier for a statement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKindId {
    Expression,
    Return,
}

/// Stable identifier for a literal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKindId {
    Identifier,
    String,
    Int,
}

/// Registry of expression kind spellings.
pub const EXPR_KINDS: &[(ExprKindId, &str)] = &[
    (ExprKindId::Call, "call"),
    (ExprKindId::Selector, "selector"),
    (ExprKindId::Identifier, "identifier"),
    (ExprKindId::Literal, "literal"),
];

/// Registry of statement kind spellings.
pub const STMT_KINDS: &[(StmtKindId, &str)] = &[(StmtKindId::Expression, "expression"), (StmtKindId::Return, "return")];

/// Registry of literal kind spellings.
pub const LITERAL_KINDS: &[(LiteralKindId, &str)] = &[
    (LiteralKindId::Identifier, "identifier"),
    (LiteralKindId::String, "string"),
    (LiteralKindId::Int, "int"),
];

fn lookup<T: Copy>(table: &[(T, &'static str)], s: &str) -> Option<T> {
    table.iter().find(|(_, spelling)| *spelling == s).map(|(id, _)| *id)
}

fn spelling<T: Copy + PartialEq>(table: &[(T, &'static str)], id: T) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, s)| *s)
        .unwrap_or("")
}

/// All accepted spellings of a registry, in table order (for diagnostics).
pub fn spellings<T>(table: &[(T, &'static str)]) -> Vec<&'static str> {
    table.iter().map(|(_, s)| *s).collect()
}

pub fn expr_kind_from_str(s: &str) -> Option<ExprKindId> {
    lookup(EXPR_KINDS, s)
}

pub fn expr_kind_as_str(id: ExprKindId) -> &'static str {
    spelling(EXPR_KINDS, id)
}

pub fn stmt_kind_from_str(s: &str) -> Option<StmtKindId> {
    lookup(STMT_KINDS, s)
}

pub fn stmt_kind_as_str(id: StmtKindId) -> &'static str {
    spelling(STMT_KINDS, id)
}

pub fn literal_kind_from_str(s: &str) -> Option<LiteralKindId> {
    lookup(LITERAL_KINDS, s)
}

pub fn literal_kind_as_str(id: LiteralKindId) -> &'static str {
    spelling(LITERAL_KINDS, id)
}

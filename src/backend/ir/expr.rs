//! IR expression definitions.
//!
//! Expressions form a closed sum type: a [`Call`](Expr::Call) can only ever carry a [`CallExpr`], a
//! [`Selector`](Expr::Selector) only a [`Selector`], and so on. There is no separate `kind` tag that could disagree
//! with the populated payload.
//!
//! Calls are shallow: the callee is always a [`Selector`] and arguments are always [`Literal`]s. Nested
//! calls, operators, and composite literals are not representable.

use caiac_core::lang::kinds::LiteralKindId;

/// A bare identifier (`x`, `err`, `nil`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A literal token.
///
/// The payload is kept verbatim; rendering decides how each kind is spelled:
/// - `Identifier` renders the raw token,
/// - `String` wraps the value in double quotes (without escaping),
/// - `Int` renders the raw text (not validated as numeric).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Identifier(String),
    String(String),
    Int(String),
}

impl Literal {
    pub fn value(&self) -> &str {
        match self {
            Literal::Identifier(v) | Literal::String(v) | Literal::Int(v) => v,
        }
    }

    /// Build a literal from a registry kind and its raw value.
    pub fn from_kind(kind: LiteralKindId, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            LiteralKindId::Identifier => Literal::Identifier(value),
            LiteralKindId::String => Literal::String(value),
            LiteralKindId::Int => Literal::Int(value),
        }
    }
}

/// Member access (`base.member`), or a bare `member` when there is no base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub base: Option<String>,
    pub member: String,
}

impl Selector {
    pub fn new(base: Option<&str>, member: impl Into<String>) -> Self {
        Self {
            base: base.map(str::to_string),
            member: member.into(),
        }
    }

    /// Selector with no base; renders as the bare member name.
    pub fn bare(member: impl Into<String>) -> Self {
        Self {
            base: None,
            member: member.into(),
        }
    }
}

/// Function call whose callee is a selector and whose arguments are literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Selector,
    pub args: Vec<Literal>,
}

/// An IR expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Call(CallExpr),
    Selector(Selector),
    Literal(Literal),
    Ident(Ident),
}

impl Expr {
    pub fn call(callee: Selector, args: Vec<Literal>) -> Self {
        Expr::Call(CallExpr { callee, args })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_from_kind_keeps_value_verbatim() {
        let lit = Literal::from_kind(LiteralKindId::Int, "0x1F");
        assert_eq!(lit, Literal::Int("0x1F".into()));
        assert_eq!(lit.value(), "0x1F");
    }

    #[test]
    fn test_selector_constructors() {
        assert_eq!(Selector::new(None, "x"), Selector::bare("x"));
        assert_eq!(Selector::new(Some("fmt"), "Println").base.as_deref(), Some("fmt"));
    }
}

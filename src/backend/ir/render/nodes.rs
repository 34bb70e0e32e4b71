//! Node constructors for Go syntax-tree leaves.
//!
//! Small pure helpers used by the renderer. Identifier constructors validate their input; literal constructors keep
//! the raw text exactly as given.
//!
//! ## Known gaps
//!
//! - [`string_lit`] wraps the value in double quotes **without escaping**, so a value containing `"` or `\`
//!   produces an invalid Go literal (`a"b` becomes `"a"b"`).
//! - [`int_lit`] does not check that the value is numeric.

use caiac_core::lang::idents;

use super::RenderError;
use crate::backend::go_ast::{BasicLit, Expr, Ident, LitKind};

/// Build a validated identifier. `location` describes the node for the error message.
pub fn ident(name: &str, location: &str) -> Result<Ident, RenderError> {
    idents::check_ident(name).map_err(|issue| RenderError::InvalidIdentifier {
        location: location.to_string(),
        name: name.to_string(),
        issue,
    })?;
    Ok(Ident::new(name))
}

/// Build an optional validated identifier.
pub fn opt_ident(name: Option<&str>, location: &str) -> Result<Option<Ident>, RenderError> {
    name.map(|n| ident(n, location)).transpose()
}

/// Identifier token taken verbatim (identifier-kind literals such as `nil` or `true`).
pub fn ident_lit(raw: &str) -> Ident {
    Ident::new(raw)
}

/// Quoted string literal. The raw value is not escaped.
pub fn string_lit(raw: &str) -> BasicLit {
    BasicLit {
        kind: LitKind::String,
        value: format!("\"{raw}\""),
    }
}

/// Integer literal from raw text. The value is not validated.
pub fn int_lit(raw: &str) -> BasicLit {
    BasicLit {
        kind: LitKind::Int,
        value: raw.to_string(),
    }
}

/// `base.member`, or the bare `member` when there is no base.
pub fn selector_expr(base: Option<Ident>, member: Ident) -> Expr {
    match base {
        Some(base) => Expr::Selector {
            x: Box::new(Expr::Ident(base)),
            sel: member,
        },
        None => Expr::Ident(member),
    }
}

/// Type reference: an identifier (`string`) or a package-qualified identifier (`io.Reader`).
pub fn type_expr(name: &str, location: &str) -> Result<Expr, RenderError> {
    match name.split_once('.') {
        Some((pkg, member)) => Ok(selector_expr(Some(ident(pkg, location)?), ident(member, location)?)),
        None => Ok(Expr::Ident(ident(name, location)?)),
    }
}

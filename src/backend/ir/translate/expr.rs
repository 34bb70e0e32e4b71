//! Expression translation.
//!
//! An expression block names its variant in `kind` and carries the payload in the sub-block of the same name
//! (`call`, `selector`, `identifier`, `literal`). Only that sub-block is read.

use caiac_core::lang::kinds::{self, ExprKindId};

use super::super::{CallExpr, Expr, Ident, Literal, Selector};
use super::Translator;
use super::attrs::Block;
use super::errors::TranslationError;

impl Translator {
    pub(super) fn translate_expr(&self, block: &Block<'_>) -> Result<Expr, TranslationError> {
        let kind = block.required_string("kind")?;
        let Some(id) = kinds::expr_kind_from_str(&kind) else {
            return Err(TranslationError::UnsupportedConstruct {
                node: block.path.clone(),
                construct: "expression",
                kind,
                expected: kinds::spellings(kinds::EXPR_KINDS).join(", "),
            });
        };

        if self.strict {
            self.reject_mismatched_payloads(block, id)?;
        }

        let payload = block.required_block(kinds::expr_kind_as_str(id))?;
        let expr = match id {
            ExprKindId::Call => Expr::Call(self.translate_call(&payload)?),
            ExprKindId::Selector => Expr::Selector(self.translate_selector(&payload)?),
            ExprKindId::Identifier => Expr::Ident(Ident(payload.required_string("name")?)),
            ExprKindId::Literal => Expr::Literal(self.translate_literal(&payload)?),
        };
        Ok(expr)
    }

    fn reject_mismatched_payloads(&self, block: &Block<'_>, active: ExprKindId) -> Result<(), TranslationError> {
        for &(id, spelling) in kinds::EXPR_KINDS {
            if id != active && block.has(spelling) {
                return Err(TranslationError::UnexpectedBlock {
                    node: block.path.clone(),
                    kind: kinds::expr_kind_as_str(active),
                    block: spelling,
                });
            }
        }
        Ok(())
    }

    fn translate_call(&self, block: &Block<'_>) -> Result<CallExpr, TranslationError> {
        let callee = self.translate_selector(&block.required_block("func")?)?;
        let args = block
            .blocks("args")?
            .iter()
            .map(|arg| self.translate_literal(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CallExpr { callee, args })
    }

    fn translate_selector(&self, block: &Block<'_>) -> Result<Selector, TranslationError> {
        Ok(Selector {
            base: block.optional_string("from")?,
            member: block.required_string("prop")?,
        })
    }

    pub(super) fn translate_literal(&self, block: &Block<'_>) -> Result<Literal, TranslationError> {
        let kind = block.required_string("kind")?;
        let Some(id) = kinds::literal_kind_from_str(&kind) else {
            return Err(TranslationError::UnsupportedConstruct {
                node: block.path.clone(),
                construct: "literal",
                kind,
                expected: kinds::spellings(kinds::LITERAL_KINDS).join(", "),
            });
        };
        let value = block.required_string("value")?;
        Ok(Literal::from_kind(id, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::ir::translate::{TranslationError, Translator, translate};
    use crate::backend::ir::{Expr, Literal, Selector, Stmt};
    use serde_json::{Value, json};

    fn translate_expr(expression: Value) -> Result<Expr, TranslationError> {
        translate_expr_with(Translator::new(), expression)
    }

    fn translate_expr_with(translator: Translator, expression: Value) -> Result<Expr, TranslationError> {
        let tree = json!({
            "packageName": "main",
            "functions": [{
                "name": "f",
                "body": { "statements": [{ "kind": "expression", "expression": expression }] }
            }]
        });
        let mut ir = translator.translate(&tree)?;
        match ir.functions.remove(0).body.statements.remove(0) {
            Stmt::Expr(e) => Ok(e),
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_selector_with_and_without_base() {
        assert_eq!(
            translate_expr(json!({ "kind": "selector", "selector": { "from": "a", "prop": "b" } })).unwrap(),
            Expr::Selector(Selector::new(Some("a"), "b"))
        );
        assert_eq!(
            translate_expr(json!({ "kind": "selector", "selector": { "prop": "b" } })).unwrap(),
            Expr::Selector(Selector::bare("b"))
        );
    }

    #[test]
    fn test_literal_kinds() {
        for (kind, expected) in [
            ("string", Literal::String("v".into())),
            ("int", Literal::Int("v".into())),
            ("identifier", Literal::Identifier("v".into())),
        ] {
            let expr = translate_expr(json!({ "kind": "literal", "literal": { "kind": kind, "value": "v" } })).unwrap();
            assert_eq!(expr, Expr::Literal(expected));
        }
    }

    #[test]
    fn test_int_literal_from_json_number() {
        let expr = translate_expr(json!({ "kind": "literal", "literal": { "kind": "int", "value": 42 } })).unwrap();
        assert_eq!(expr, Expr::Literal(Literal::Int("42".into())));
    }

    #[test]
    fn test_call_with_literal_args_in_order() {
        let expr = translate_expr(json!({
            "kind": "call",
            "call": {
                "func": { "prop": "println" },
                "args": [
                    { "kind": "string", "value": "a" },
                    { "kind": "int", "value": "1" },
                    { "kind": "identifier", "value": "true" }
                ]
            }
        }))
        .unwrap();
        assert_eq!(
            expr,
            Expr::call(
                Selector::bare("println"),
                vec![
                    Literal::String("a".into()),
                    Literal::Int("1".into()),
                    Literal::Identifier("true".into()),
                ]
            )
        );
    }

    #[test]
    fn test_call_requires_func() {
        let err = translate_expr(json!({ "kind": "call", "call": { "args": [] } })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required attribute `func` in functions[0].body.statements[0].expression.call"
        );
    }

    #[test]
    fn test_mismatched_payload_ignored_by_default() {
        let expr = translate_expr(json!({
            "kind": "identifier",
            "identifier": { "name": "x" },
            "selector": { "from": "a", "prop": "b" },
            "literal": { "kind": "bogus" }
        }))
        .unwrap();
        assert_eq!(expr, Expr::ident("x"));
    }

    #[test]
    fn test_mismatched_payload_rejected_when_strict() {
        let err = translate_expr_with(
            Translator::strict(),
            json!({
                "kind": "identifier",
                "identifier": { "name": "x" },
                "selector": { "prop": "b" }
            }),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TranslationError::UnexpectedBlock {
                node: err.node().clone(),
                kind: "identifier",
                block: "selector",
            }
        );
    }

    #[test]
    fn test_payload_for_active_kind_required() {
        let err = translate_expr(json!({ "kind": "selector", "identifier": { "name": "x" } })).unwrap_err();
        assert!(matches!(err, TranslationError::MissingAttribute { attribute: "selector", .. }));
    }

    #[test]
    fn test_unknown_expression_kind() {
        let err = translate_expr(json!({ "kind": "binary" })).unwrap_err();
        assert!(matches!(
            err,
            TranslationError::UnsupportedConstruct { construct: "expression", ref kind, .. } if kind == "binary"
        ));
    }

    #[test]
    fn test_unknown_literal_kind() {
        let err = translate_expr(json!({ "kind": "literal", "literal": { "kind": "float", "value": "1.5" } }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported literal kind `float` in functions[0].body.statements[0].expression.literal \
             (expected one of: identifier, string, int)"
        );
    }
}

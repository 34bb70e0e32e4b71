//! Statement translation.
//!
//! A statement block selects its variant with `kind`:
//!
//! - `expression`: requires an `expression` block.
//! - `return`: takes either a single `expression` block or a `results` list of expression blocks (not both);
//!   with neither it is a bare `return`.

use caiac_core::lang::kinds::{self, StmtKindId};

use super::super::{Body, Stmt};
use super::Translator;
use super::attrs::Block;
use super::errors::TranslationError;

impl Translator {
    pub(super) fn translate_body(&self, block: &Block<'_>) -> Result<Body, TranslationError> {
        let statements = block
            .blocks("statements")?
            .iter()
            .map(|s| self.translate_statement(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Body { statements })
    }

    pub(super) fn translate_statement(&self, block: &Block<'_>) -> Result<Stmt, TranslationError> {
        let kind = block.required_string("kind")?;
        let Some(id) = kinds::stmt_kind_from_str(&kind) else {
            return Err(TranslationError::UnsupportedConstruct {
                node: block.path.clone(),
                construct: "statement",
                kind,
                expected: kinds::spellings(kinds::STMT_KINDS).join(", "),
            });
        };

        match id {
            StmtKindId::Expression => {
                if self.strict && block.has("results") {
                    return Err(TranslationError::UnexpectedBlock {
                        node: block.path.clone(),
                        kind: kinds::stmt_kind_as_str(id),
                        block: "results",
                    });
                }
                let expr = block.required_block("expression")?;
                Ok(Stmt::Expr(self.translate_expr(&expr)?))
            }
            StmtKindId::Return => {
                if block.has("expression") && block.has("results") {
                    return Err(TranslationError::ConflictingAttributes {
                        node: block.path.clone(),
                        first: "expression",
                        second: "results",
                    });
                }
                let values = match block.optional_block("expression")? {
                    Some(expr) => vec![self.translate_expr(&expr)?],
                    None => block
                        .blocks("results")?
                        .iter()
                        .map(|e| self.translate_expr(e))
                        .collect::<Result<Vec<_>, _>>()?,
                };
                Ok(Stmt::Return(values))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::ir::translate::{TranslationError, Translator, translate};
    use crate::backend::ir::{Expr, Literal, Stmt};
    use serde_json::{Value, json};

    fn with_statements(statements: Value) -> Value {
        json!({
            "packageName": "main",
            "functions": [{ "name": "f", "body": { "statements": statements } }]
        })
    }

    #[test]
    fn test_statement_order_preserved() {
        let ir = translate(&with_statements(json!([
            { "kind": "expression", "expression": { "kind": "identifier", "identifier": { "name": "a" } } },
            { "kind": "expression", "expression": { "kind": "identifier", "identifier": { "name": "b" } } },
            { "kind": "return" }
        ])))
        .unwrap();
        assert_eq!(
            ir.functions[0].body.statements,
            vec![Stmt::Expr(Expr::ident("a")), Stmt::Expr(Expr::ident("b")), Stmt::Return(vec![])]
        );
    }

    #[test]
    fn test_return_with_single_expression() {
        let ir = translate(&with_statements(json!([
            { "kind": "return", "expression": { "kind": "literal", "literal": { "kind": "identifier", "value": "nil" } } }
        ])))
        .unwrap();
        assert_eq!(
            ir.functions[0].body.statements,
            vec![Stmt::Return(vec![Expr::Literal(Literal::Identifier("nil".into()))])]
        );
    }

    #[test]
    fn test_return_with_results_list() {
        let ir = translate(&with_statements(json!([
            { "kind": "return", "results": [
                { "kind": "literal", "literal": { "kind": "int", "value": "0" } },
                { "kind": "identifier", "identifier": { "name": "err" } }
            ]}
        ])))
        .unwrap();
        assert_eq!(
            ir.functions[0].body.statements,
            vec![Stmt::Return(vec![Expr::Literal(Literal::Int("0".into())), Expr::ident("err")])]
        );
    }

    #[test]
    fn test_return_rejects_expression_and_results() {
        let err = translate(&with_statements(json!([
            { "kind": "return",
              "expression": { "kind": "identifier", "identifier": { "name": "x" } },
              "results": [] }
        ])))
        .unwrap_err();
        assert!(matches!(err, TranslationError::ConflictingAttributes { first: "expression", .. }));
    }

    #[test]
    fn test_expression_statement_requires_expression() {
        let err = translate(&with_statements(json!([{ "kind": "expression" }]))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required attribute `expression` in functions[0].body.statements[0]"
        );
    }

    #[test]
    fn test_unknown_statement_kind_is_unsupported() {
        let err = translate(&with_statements(json!([{ "kind": "if" }]))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported statement kind `if` in functions[0].body.statements[0] (expected one of: expression, return)"
        );
    }

    #[test]
    fn test_strict_rejects_results_on_expression_statement() {
        let tree = with_statements(json!([
            { "kind": "expression",
              "expression": { "kind": "identifier", "identifier": { "name": "x" } },
              "results": [] }
        ]));
        assert!(translate(&tree).is_ok());
        let err = Translator::strict().translate(&tree).unwrap_err();
        assert!(matches!(err, TranslationError::UnexpectedBlock { block: "results", .. }));
    }
}

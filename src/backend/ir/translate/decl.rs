//! Declaration translation: imports, functions and signatures.

use super::super::{Field, FunctionDecl, ImportSpec, Signature};
use super::Translator;
use super::attrs::Block;
use super::errors::TranslationError;

impl Translator {
    /// Translate one `imports` entry.
    ///
    /// An empty `name` is treated the same as an absent one (no alias).
    pub(super) fn translate_import(&self, block: &Block<'_>) -> Result<ImportSpec, TranslationError> {
        let alias = block.optional_string("name")?.filter(|name| !name.is_empty());
        let path = block.required_string("path")?;
        Ok(ImportSpec { alias, path })
    }

    /// Translate one `functions` entry.
    ///
    /// Both `signature` and `body` are optional blocks; when absent the function takes no parameters, returns
    /// nothing, and has an empty body.
    pub(super) fn translate_function(&self, block: &Block<'_>) -> Result<FunctionDecl, TranslationError> {
        let name = block.required_string("name")?;

        let signature = match block.optional_block("signature")? {
            Some(sig) => self.translate_signature(&sig)?,
            None => Signature::default(),
        };

        let body = match block.optional_block("body")? {
            Some(body) => self.translate_body(&body)?,
            None => Default::default(),
        };

        Ok(FunctionDecl { name, signature, body })
    }

    fn translate_signature(&self, block: &Block<'_>) -> Result<Signature, TranslationError> {
        let params = self.translate_fields(block, "params")?;
        let results = self.translate_fields(block, "results")?;
        Ok(Signature { params, results })
    }

    fn translate_fields(&self, block: &Block<'_>, attr: &'static str) -> Result<Vec<Field>, TranslationError> {
        block
            .blocks(attr)?
            .iter()
            .map(|field| {
                Ok(Field {
                    name: field.optional_string("name")?,
                    ty: field.optional_string("type")?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::ir::translate::{NodePath, TranslationError, translate};
    use crate::backend::ir::{Field, ImportSpec, Signature};
    use serde_json::json;

    #[test]
    fn test_import_alias_and_order() {
        let ir = translate(&json!({
            "packageName": "main",
            "imports": [
                { "path": "os" },
                { "name": "f", "path": "fmt" },
                { "name": "", "path": "os" }
            ]
        }))
        .unwrap();
        assert_eq!(
            ir.imports,
            vec![
                ImportSpec::new("os"),
                ImportSpec::new("fmt").with_alias("f"),
                ImportSpec::new("os"),
            ]
        );
    }

    #[test]
    fn test_import_path_required() {
        let err = translate(&json!({ "packageName": "main", "imports": [{ "name": "f" }] })).unwrap_err();
        assert_eq!(
            err,
            TranslationError::MissingAttribute {
                node: NodePath::root().field("imports").index(0),
                attribute: "path",
            }
        );
    }

    #[test]
    fn test_signature_fields_keep_order_and_absence() {
        let ir = translate(&json!({
            "packageName": "lib",
            "functions": [{
                "name": "Open",
                "signature": {
                    "params": [{ "name": "path", "type": "string" }, { "type": "int" }],
                    "results": [{ "type": "error" }, { "name": "n" }, {}]
                }
            }]
        }))
        .unwrap();
        assert_eq!(
            ir.functions[0].signature,
            Signature {
                params: vec![Field::named("path", "string"), Field::unnamed("int")],
                results: vec![
                    Field::unnamed("error"),
                    Field {
                        name: Some("n".into()),
                        ty: None
                    },
                    Field::default(),
                ],
            }
        );
    }

    #[test]
    fn test_function_defaults_when_blocks_absent() {
        let ir = translate(&json!({ "packageName": "main", "functions": [{ "name": "main" }] })).unwrap();
        assert!(ir.functions[0].signature.params.is_empty());
        assert!(ir.functions[0].body.is_empty());
    }

    #[test]
    fn test_function_name_type_mismatch() {
        let err = translate(&json!({ "packageName": "main", "functions": [{ "name": { "x": 1 } }] })).unwrap_err();
        assert_eq!(err.to_string(), "functions[0].name must be a string, found an object");
    }
}

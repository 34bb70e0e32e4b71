//! Declaration emission: the import group, functions, and signatures.

use super::super::{Field, FunctionDecl, ImportSpec, Signature};
use super::{RenderError, Renderer, nodes};
use crate::backend::go_ast;

/// Which list of a signature a field belongs to, for messages.
#[derive(Debug, Clone, Copy)]
enum FieldRole {
    Param,
    Result,
}

impl FieldRole {
    fn as_str(self) -> &'static str {
        match self {
            FieldRole::Param => "parameter",
            FieldRole::Result => "result",
        }
    }
}

impl Renderer {
    /// Emit the import specs in input order. Duplicates are kept.
    pub(super) fn build_imports(&self, imports: &[ImportSpec]) -> Result<Vec<go_ast::ImportSpec>, RenderError> {
        imports
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                if spec.path.is_empty() {
                    return Err(RenderError::EmptyImportPath { index });
                }
                Ok(go_ast::ImportSpec {
                    name: nodes::opt_ident(spec.alias.as_deref(), &format!("import {index} alias"))?,
                    path: nodes::string_lit(&spec.path),
                })
            })
            .collect()
    }

    pub(super) fn build_function(&self, index: usize, func: &FunctionDecl) -> Result<go_ast::FuncDecl, RenderError> {
        let name = nodes::ident(&func.name, &format!("function {index} name"))?;
        let ty = self.build_signature(&func.name, &func.signature)?;
        let body = self.build_body(&func.name, &func.body)?;
        Ok(go_ast::FuncDecl { name, ty, body })
    }

    fn build_signature(&self, func_name: &str, signature: &Signature) -> Result<go_ast::FuncType, RenderError> {
        Ok(go_ast::FuncType {
            params: self.build_field_list(func_name, FieldRole::Param, &signature.params)?,
            results: self.build_field_list(func_name, FieldRole::Result, &signature.results)?,
        })
    }

    /// Emit a parameter or result list.
    ///
    /// A list is "named" as soon as one field carries both a name and a type. In a named list, name-only fields
    /// share the type of the next typed field (`a, b int`), so the last field must have a type and no field may be
    /// type-only. In an unnamed list every entry is read as a type, so name-only and type-only fields cannot be
    /// combined either: `{name: a}, {type: int}` would print the name `a` where Go expects a type.
    fn build_field_list(
        &self,
        func_name: &str,
        role: FieldRole,
        fields: &[Field],
    ) -> Result<go_ast::FieldList, RenderError> {
        let location = |i: usize| format!("{} {} of `{}`", role.as_str(), i, func_name);

        if let Some(i) = fields.iter().position(Field::is_degenerate) {
            return Err(RenderError::DegenerateField { location: location(i) });
        }

        let named = fields.iter().any(|f| f.name.is_some() && f.ty.is_some());
        let name_only = fields.iter().any(|f| f.ty.is_none());
        let type_only = fields.iter().any(|f| f.name.is_none());
        let untyped_tail = fields.last().is_some_and(|f| f.ty.is_none());
        if (named && (type_only || untyped_tail)) || (name_only && type_only) {
            return Err(RenderError::MixedFieldNames {
                location: format!("{} list of `{}`", role.as_str(), func_name),
            });
        }

        let list = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let loc = location(i);
                Ok(go_ast::Field {
                    name: nodes::opt_ident(field.name.as_deref(), &loc)?,
                    ty: field.ty.as_deref().map(|ty| nodes::type_expr(ty, &loc)).transpose()?,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(go_ast::FieldList { list })
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::ir::{Field, FunctionDecl, ImportSpec, RenderError, Signature, SourceFile, render};

    fn render_signature(params: Vec<Field>, results: Vec<Field>) -> Result<String, RenderError> {
        render(&SourceFile::new("lib").with_function(FunctionDecl::new("f").with_signature(Signature {
            params,
            results,
        })))
    }

    #[test]
    fn test_imports_keep_order_and_duplicates() {
        let file = SourceFile::new("main")
            .with_import(ImportSpec::new("os"))
            .with_import(ImportSpec::new("fmt").with_alias("f"))
            .with_import(ImportSpec::new("os"));
        assert_eq!(
            render(&file).unwrap(),
            "package main\n\nimport (\n\t\"os\"\n\tf \"fmt\"\n\t\"os\"\n)\n"
        );
    }

    #[test]
    fn test_single_aliased_import() {
        let file = SourceFile::new("main").with_import(ImportSpec::new("fmt").with_alias("f"));
        assert_eq!(render(&file).unwrap(), "package main\n\nimport f \"fmt\"\n");
    }

    #[test]
    fn test_empty_import_path() {
        let file = SourceFile::new("main")
            .with_import(ImportSpec::new("fmt"))
            .with_import(ImportSpec::new(""));
        assert_eq!(render(&file).unwrap_err(), RenderError::EmptyImportPath { index: 1 });
    }

    #[test]
    fn test_invalid_alias() {
        let file = SourceFile::new("main").with_import(ImportSpec::new("fmt").with_alias("9f"));
        assert!(matches!(
            render(&file).unwrap_err(),
            RenderError::InvalidIdentifier { ref location, .. } if location == "import 0 alias"
        ));
    }

    #[test]
    fn test_named_params_and_results() {
        let out = render_signature(
            vec![Field::named("name", "string"), Field::named("r", "io.Reader")],
            vec![Field::named("n", "int"), Field::named("err", "error")],
        )
        .unwrap();
        assert_eq!(
            out,
            "package lib\n\nfunc f(name string, r io.Reader) (n int, err error) {}\n"
        );
    }

    #[test]
    fn test_unnamed_results() {
        let out = render_signature(vec![Field::unnamed("int")], vec![Field::unnamed("int"), Field::unnamed("error")])
            .unwrap();
        assert_eq!(out, "package lib\n\nfunc f(int) (int, error) {}\n");
    }

    #[test]
    fn test_grouped_names_share_type() {
        let a = Field {
            name: Some("a".into()),
            ty: None,
        };
        let out = render_signature(vec![a, Field::named("b", "int")], vec![]).unwrap();
        assert_eq!(out, "package lib\n\nfunc f(a, b int) {}\n");
    }

    #[test]
    fn test_degenerate_field_rejected() {
        let err = render_signature(vec![Field::unnamed("int"), Field::default()], vec![]).unwrap_err();
        assert_eq!(
            err,
            RenderError::DegenerateField {
                location: "parameter 1 of `f`".into()
            }
        );
    }

    #[test]
    fn test_mixed_named_and_unnamed_rejected() {
        let err = render_signature(vec![], vec![Field::named("n", "int"), Field::unnamed("error")]).unwrap_err();
        assert_eq!(err.to_string(), "result list of `f` mixes named and unnamed fields");
    }

    #[test]
    fn test_name_only_beside_type_only_rejected() {
        let a = Field {
            name: Some("a".into()),
            ty: None,
        };
        let err = render_signature(vec![a, Field::unnamed("int")], vec![]).unwrap_err();
        assert_eq!(
            err,
            RenderError::MixedFieldNames {
                location: "parameter list of `f`".into()
            }
        );
    }

    #[test]
    fn test_name_only_list_reads_as_types() {
        let field = |name: &str| Field {
            name: Some(name.into()),
            ty: None,
        };
        let out = render_signature(vec![field("Reader"), field("Writer")], vec![]).unwrap();
        assert_eq!(out, "package lib

func f(Reader, Writer) {}
");
    }

    #[test]
    fn test_keyword_function_name_rejected() {
        let err = render(&SourceFile::new("main").with_function(FunctionDecl::new("go"))).unwrap_err();
        assert!(matches!(err, RenderError::InvalidIdentifier { ref name, .. } if name == "go"));
    }

    #[test]
    fn test_superscript_function_name_rejected() {
        let err = render(&SourceFile::new("main").with_function(FunctionDecl::new("x²"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid identifier `x²` for function 0 name: identifier contains invalid character '²'"
        );
    }
}

//! IR declaration definitions

use super::Body;

/// One entry of the grouped import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local package name (`import f "fmt"`); `None` imports under the package's own name.
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A parameter or result descriptor.
///
/// A field with only a type renders as an unnamed field; a field with neither name nor type is degenerate and is
/// rejected by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: Option<String>,
    pub ty: Option<String>,
}

impl Field {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty.into()),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: Some(ty.into()),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.name.is_none() && self.ty.is_none()
    }
}

/// Function type: ordered parameters and results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// Top-level function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub signature: Signature,
    pub body: Body,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: Signature::default(),
            body: Body::default(),
        }
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

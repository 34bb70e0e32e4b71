//! Attribute extraction from declarative blocks.
//!
//! A block is a JSON object; its attributes are scalars and its sub-blocks are objects or arrays of objects.
//! Scalar coercion follows what infrastructure-as-code hosts do for string attributes: strings are taken verbatim,
//! numbers and booleans are converted to their text, and composites are rejected.

use serde_json::{Map, Value};

use super::errors::TranslationError;
use super::path::NodePath;

/// Human-readable name of a JSON value's type, for diagnostics.
pub(super) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce a scalar to a string, or report a type mismatch at `path`.
fn coerce_string(value: &Value, path: &NodePath) -> Result<String, TranslationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(TranslationError::TypeMismatch {
            path: path.clone(),
            expected: "a string",
            found: describe(other),
        }),
    }
}

/// A declarative block together with its location in the tree.
#[derive(Debug, Clone)]
pub(super) struct Block<'a> {
    fields: &'a Map<String, Value>,
    pub(super) path: NodePath,
}

impl<'a> Block<'a> {
    /// View `value` as a block, failing if it is not an object.
    pub(super) fn from_value(value: &'a Value, path: NodePath) -> Result<Self, TranslationError> {
        match value {
            Value::Object(fields) => Ok(Self { fields, path }),
            other => Err(TranslationError::TypeMismatch {
                path,
                expected: "an object",
                found: describe(other),
            }),
        }
    }

    /// Attribute value, treating an explicit `null` the same as an absent attribute.
    fn get(&self, attr: &str) -> Option<&'a Value> {
        self.fields.get(attr).filter(|v| !v.is_null())
    }

    /// Whether the attribute or sub-block is set (present and not `null`).
    pub(super) fn has(&self, attr: &str) -> bool {
        self.get(attr).is_some()
    }

    pub(super) fn required_string(&self, attr: &'static str) -> Result<String, TranslationError> {
        let value = self.get(attr).ok_or_else(|| TranslationError::MissingAttribute {
            node: self.path.clone(),
            attribute: attr,
        })?;
        coerce_string(value, &self.path.field(attr))
    }

    pub(super) fn optional_string(&self, attr: &'static str) -> Result<Option<String>, TranslationError> {
        self.get(attr)
            .map(|value| coerce_string(value, &self.path.field(attr)))
            .transpose()
    }

    pub(super) fn required_block(&self, attr: &'static str) -> Result<Block<'a>, TranslationError> {
        self.optional_block(attr)?
            .ok_or_else(|| TranslationError::MissingAttribute {
                node: self.path.clone(),
                attribute: attr,
            })
    }

    pub(super) fn optional_block(&self, attr: &'static str) -> Result<Option<Block<'a>>, TranslationError> {
        self.get(attr)
            .map(|value| Block::from_value(value, self.path.field(attr)))
            .transpose()
    }

    /// Ordered repeated sub-blocks; absent means an empty list.
    pub(super) fn blocks(&self, attr: &'static str) -> Result<Vec<Block<'a>>, TranslationError> {
        let list_path = self.path.field(attr);
        match self.get(attr) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| Block::from_value(item, list_path.index(i)))
                .collect(),
            Some(other) => Err(TranslationError::TypeMismatch {
                path: list_path,
                expected: "an array",
                found: describe(other),
            }),
        }
    }
}

//! Locations inside the declarative tree, for diagnostics.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(&'static str),
    Index(usize),
}

/// Path from the root of the declarative tree to a node, e.g. `functions[0].body.statements[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with an attribute or block name.
    pub fn field(&self, name: &'static str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Field(name));
        next
    }

    /// Extend the path with a list index.
    pub fn index(&self, i: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(i));
        next
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "the source file");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(NodePath::root().to_string(), "the source file");
    }

    #[test]
    fn test_nested_display() {
        let path = NodePath::root()
            .field("functions")
            .index(0)
            .field("body")
            .field("statements")
            .index(2)
            .field("expression");
        assert_eq!(path.to_string(), "functions[0].body.statements[2].expression");
    }
}

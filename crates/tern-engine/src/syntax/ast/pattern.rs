//! Pattern AST nodes
//!
//! Patterns are used in variable declarations, function parameters, and destructuring.

use super::*;
use crate::syntax::span::Span;

/// Pattern (for destructuring and binding)
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Simple identifier: x
    Identifier(Identifier),

    /// Array destructuring: [x, y]
    Array(ArrayPattern),

    /// Object destructuring: { x, y: z }
    Object(ObjectPattern),
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Identifier(id) => id.span,
            Pattern::Array(p) => p.span,
            Pattern::Object(p) => p.span,
        }
    }

    /// The bound name, if this is a plain identifier pattern
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Pattern::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    /// `None` marks a hole: [a, , b]
    pub elements: Vec<Option<Pattern>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPatternProperty {
    pub key: Identifier,
    pub value: Pattern,
    pub span: Span,
}

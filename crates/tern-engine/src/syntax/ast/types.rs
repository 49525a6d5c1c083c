//! Type annotation AST nodes
//!
//! - Type references (i32, math.Vec, Box<T>)
//! - Function types ((x: i32) => i32)
//! - Array and union types
//! - Type parameters (generics)

use super::*;
use crate::syntax::span::Span;

/// Type annotation (compile-time type)
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub ty: Type,
    pub span: Span,
}

/// Type
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Type reference: i32, math.Vec, Box<T>
    Reference(TypeReference),

    /// Function type: (x: i32) => i32
    Function(FunctionType),

    /// Array type: T[]
    Array(ArrayType),

    /// Union type: A | B
    Union(UnionType),
}

impl Type {
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }
}

// ============================================================================
// Type Reference
// ============================================================================

/// Type reference: Point, ns.Point, Map<K, V>
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub name: TypeName,
    /// Type arguments; empty for non-generic references
    pub type_args: Vec<TypeAnnotation>,
    pub span: Span,
}

impl TypeReference {
    /// Create a simple type reference without type arguments
    pub fn simple(name: Identifier) -> Self {
        Self {
            name: TypeName::simple(name),
            type_args: Vec::new(),
            span: name.span,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.type_args.is_empty()
    }
}

/// Possibly qualified type name: `a.b.c` is `a` -> `b` -> `c`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub identifier: Identifier,
    pub next: Option<Box<TypeName>>,
    pub span: Span,
}

impl TypeName {
    pub fn simple(identifier: Identifier) -> Self {
        Self {
            identifier,
            next: None,
            span: identifier.span,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.next.is_some()
    }
}

// ============================================================================
// Function Type
// ============================================================================

/// Function type: (x: i32, y: f64) => i32
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub params: Vec<FunctionTypeParam>,
    pub return_type: Box<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionTypeParam {
    pub name: Option<Identifier>,
    pub ty: TypeAnnotation,
}

// ============================================================================
// Array / Union
// ============================================================================

/// Array type: T[]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub element_type: Box<TypeAnnotation>,
    pub span: Span,
}

/// Union type: A | B | C
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub types: Vec<TypeAnnotation>,
    pub span: Span,
}

// ============================================================================
// Type Parameters (Generics)
// ============================================================================

/// Type parameter (generic): T, K extends Key
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<TypeAnnotation>,
    pub default: Option<TypeAnnotation>,
    pub span: Span,
}

impl TypeParameter {
    /// Create a simple type parameter without constraints or defaults
    pub fn simple(name: Identifier, span: Span) -> Self {
        Self {
            name,
            constraint: None,
            default: None,
            span,
        }
    }
}

//! Nominal type registry
//!
//! A [`TypeScope`] is a flat, ordered list of named [`TypeDecl`]s. Lookup is
//! a linear scan in registration order and the first match wins.

use crate::syntax::Span;

/// Builtin type names registered in the global scope by default
pub const BUILTIN_TYPES: [&str; 4] = ["i32", "i64", "f32", "f64"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeScopeId(pub u32);

/// A type declaration, addressed by its scope and its position in that scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDeclId {
    pub scope: TypeScopeId,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypeScope {
    pub id: TypeScopeId,
    decls: Vec<TypeDecl>,
}

impl TypeScope {
    pub fn new(id: TypeScopeId) -> Self {
        Self {
            id,
            decls: Vec::new(),
        }
    }

    /// Create a scope pre-populated with the given builtin names
    pub fn with_builtins<S: AsRef<str>>(id: TypeScopeId, names: &[S]) -> Self {
        let mut scope = Self::new(id);
        for name in names {
            scope.register(name.as_ref(), Span::synthetic());
        }
        scope
    }

    /// Append a declaration. Duplicates are kept; `find` returns the first.
    pub fn register(&mut self, name: &str, span: Span) -> TypeDeclId {
        let index = self.decls.len() as u32;
        self.decls.push(TypeDecl {
            name: name.to_string(),
            span,
        });
        TypeDeclId {
            scope: self.id,
            index,
        }
    }

    pub fn find(&self, name: &str) -> Option<TypeDeclId> {
        self.decls
            .iter()
            .position(|decl| decl.name == name)
            .map(|index| TypeDeclId {
                scope: self.id,
                index: index as u32,
            })
    }

    pub fn get(&self, index: u32) -> Option<&TypeDecl> {
        self.decls.get(index as usize)
    }

    pub fn decls(&self) -> &[TypeDecl] {
        &self.decls
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Resolved type annotation on a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    pub decl: TypeDeclId,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered_in_order() {
        let scope = TypeScope::with_builtins(TypeScopeId(0), &BUILTIN_TYPES);
        let names: Vec<&str> = scope.decls().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["i32", "i64", "f32", "f64"]);
        assert!(scope.decls().iter().all(|d| d.span == Span::synthetic()));
    }

    #[test]
    fn test_find() {
        let scope = TypeScope::with_builtins(TypeScopeId(0), &BUILTIN_TYPES);
        let f32_id = scope.find("f32").expect("f32 is builtin");
        assert_eq!(f32_id.index, 2);
        assert_eq!(scope.get(f32_id.index).map(|d| d.name.as_str()), Some("f32"));
        assert!(scope.find("string").is_none());
    }

    #[test]
    fn test_find_first_match_wins() {
        let mut scope = TypeScope::new(TypeScopeId(1));
        let first = scope.register("Point", Span::new(0, 5));
        let _second = scope.register("Point", Span::new(10, 15));

        assert_eq!(scope.find("Point"), Some(first));
        assert_eq!(scope.len(), 2);
    }
}

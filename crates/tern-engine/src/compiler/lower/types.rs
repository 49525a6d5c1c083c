//! Type annotation lowering
//!
//! Only plain, unqualified, non-generic type names are resolved. They are
//! looked up in the active type scopes, innermost first.

use super::Lowerer;
use crate::compiler::hir::TypeRef;
use crate::diagnostics::{LowerError, LowerResult};
use crate::syntax::ast::{Type, TypeAnnotation, TypeReference};

impl<'a> Lowerer<'a> {
    pub(super) fn lower_type(&mut self, annotation: &TypeAnnotation) -> LowerResult<TypeRef> {
        match &annotation.ty {
            Type::Reference(reference) => self.lower_type_reference(reference, annotation),
            Type::Function(_) | Type::Array(_) | Type::Union(_) => {
                Err(self.unsupported(annotation.ty.kind(), annotation.span))
            }
        }
    }

    /// A failed annotation leaves the declaration untyped
    pub(super) fn lower_optional_type(&mut self, annotation: Option<&TypeAnnotation>) -> Option<TypeRef> {
        annotation.and_then(|annotation| self.lower_type(annotation).ok())
    }

    fn lower_type_reference(
        &mut self,
        reference: &TypeReference,
        annotation: &TypeAnnotation,
    ) -> LowerResult<TypeRef> {
        if reference.name.is_qualified() {
            return Err(self.unsupported_named("qualified type name", reference.name.span));
        }
        if reference.is_generic() {
            return Err(self.unsupported_named("type arguments", reference.span));
        }

        let interner = self.interner;
        let name = interner.resolve(reference.name.identifier.name);
        let found = self.type_scopes.iter().rev().find_map(|scope| {
            self.hir
                .type_scope(*scope)
                .and_then(|scope| scope.find(name))
        });

        match found {
            Some(decl) => Ok(TypeRef {
                decl,
                span: annotation.span,
            }),
            None => Err(self.report(LowerError::name_not_found(name, reference.name.span))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::hir::PrettyPrint;
    use crate::compiler::lower::lower;
    use crate::diagnostics::DiagnosticCode;
    use crate::syntax::AstBuilder;

    #[test]
    fn test_builtin_types_resolve() {
        let b = AstBuilder::new();
        let module = b.module(vec![
            b.let_decl("a", Some(b.type_ref("i32")), None),
            b.let_decl("b", Some(b.type_ref("f64")), None),
        ]);
        let interner = b.into_interner();

        let (hir, diagnostics) = lower(&module, &interner);
        assert!(diagnostics.is_empty());
        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    VAR DECL a:type(i32)\n    VAR DECL b:type(f64)"
        );
    }

    #[test]
    fn test_unknown_type_leaves_declaration_untyped() {
        let b = AstBuilder::new();
        let module = b.module(vec![b.let_decl("s", Some(b.type_ref("string")), Some(b.int(1)))]);
        let interner = b.into_interner();

        let (hir, diagnostics) = lower(&module, &interner);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.records()[0].code, DiagnosticCode::NameNotFound);
        assert_eq!(diagnostics.records()[0].args, vec!["string"]);
        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    VAR DECL s\n    ref(s) <- 1"
        );
    }

    #[test]
    fn test_qualified_and_generic_types_are_unsupported() {
        let b = AstBuilder::new();
        let module = b.module(vec![
            b.let_decl("q", Some(b.qualified_type(&["std", "i32"])), None),
            b.let_decl("g", Some(b.generic_type("List", vec![b.type_ref("i32")])), None),
            b.let_decl("arr", Some(b.array_type(b.type_ref("i32"))), None),
        ]);
        let interner = b.into_interner();

        let (hir, diagnostics) = lower(&module, &interner);
        let messages: Vec<_> = diagnostics.iter().map(|r| r.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Unsupported construct: qualified type name",
                "Unsupported construct: type arguments",
                "Unsupported construct: array type",
            ]
        );
        assert_eq!(hir.decls().len(), 3);
        assert!(hir.decls().iter().all(|decl| decl.ty.is_none()));
    }
}

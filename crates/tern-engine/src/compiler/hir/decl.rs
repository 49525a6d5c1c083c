//! Variable declarations
//!
//! Every binding slot (local, parameter, function value, synthetic
//! temporary or hoisted placeholder) is a [`VarDecl`] stored in the arena and
//! owned by exactly one block.

use super::block::BlockId;
use super::types::TypeRef;
use crate::syntax::Span;

/// Declaration identifier (index into the arena's declaration table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// What introduced a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `let`/`const`/`var`
    Local,
    /// Function parameter, owned by the function body block
    Param,
    /// A function's own name, bound to its function value
    Function,
    /// Compiler-generated temporary from assignment desugaring
    Temporary,
    /// Hoisted placeholder for a module-level function. `target` is filled in
    /// when lowering reaches the real declaration.
    GlobalFuncRef { target: Option<DeclId> },
}

/// A binding slot
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub ty: Option<TypeRef>,
    pub kind: DeclKind,
    /// Block that owns this declaration
    pub owner: BlockId,
    pub span: Span,
}

impl VarDecl {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, DeclKind::GlobalFuncRef { .. })
    }

    pub fn is_temporary(&self) -> bool {
        self.kind == DeclKind::Temporary
    }

    /// Linked concrete declaration of a placeholder, if already known
    pub fn target(&self) -> Option<DeclId> {
        match self.kind {
            DeclKind::GlobalFuncRef { target } => target,
            _ => None,
        }
    }
}

/// Reference to a declaration from an expression or assignment target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclRef {
    pub decl: DeclId,
    pub span: Span,
}

impl DeclRef {
    pub fn new(decl: DeclId, span: Span) -> Self {
        Self { decl, span }
    }
}

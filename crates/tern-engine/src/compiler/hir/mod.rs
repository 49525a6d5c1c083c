//! High-level IR (HIR)
//!
//! The HIR is the scope-resolved, desugared form of a unit that later stages
//! consume. It is a tree of lexical [`Block`]s stored in one arena, the
//! [`Hir`]; blocks, declarations and type scopes refer to each other through
//! small index handles instead of pointers.
//!
//! # Structure
//!
//! - `Hir` - Arena that owns every block, declaration and type scope
//! - `Block` - One lexical scope: declarations, statements, nested blocks
//! - `VarDecl` - A binding slot
//! - `Stmt` / `Expr` - Assign, Drop, If, While / Ref, literals, Binary, Func, Call
//! - `TypeScope` - Ordered registry of nominal types
//!
//! The arena is append-only: nothing is ever removed.

pub mod block;
pub mod decl;
pub mod node;
pub mod pretty;
pub mod types;

pub use block::{Block, BlockId};
pub use decl::{DeclId, DeclKind, DeclRef, VarDecl};
pub use node::{BinaryOp, Expr, Stmt};
pub use pretty::PrettyPrint;
pub use types::{TypeDecl, TypeDeclId, TypeRef, TypeScope, TypeScopeId, BUILTIN_TYPES};

use crate::syntax::Span;

/// Arena holding one lowering session's IR
#[derive(Debug, Clone, Default)]
pub struct Hir {
    blocks: Vec<Block>,
    decls: Vec<VarDecl>,
    type_scopes: Vec<TypeScope>,
}

impl Hir {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    /// Allocate a block with no parent (a unit's outermost block)
    pub fn create_root(&mut self, span: Span) -> BlockId {
        self.alloc_block(None, span)
    }

    /// Allocate a block nested in `parent` and register it as a sub-block.
    pub fn create_child(&mut self, parent: BlockId, span: Span) -> BlockId {
        let id = self.alloc_block(Some(parent), span);
        self.blocks[parent.index()].sub_blocks.push(id);
        id
    }

    fn alloc_block(&mut self, parent: Option<BlockId>, span: Span) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(Block::new(id, parent, span));
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    pub fn get_block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// First block without a parent
    pub fn root(&self) -> Option<BlockId> {
        self.blocks.iter().find(|b| b.is_root()).map(|b| b.id)
    }

    pub fn add_stmt(&mut self, block: BlockId, stmt: Stmt) {
        self.blocks[block.index()].add_stmt(stmt);
    }

    /// Mark a block as complete. Later additions trip a debug assertion.
    pub fn seal(&mut self, block: BlockId) {
        self.blocks[block.index()].sealed = true;
    }

    /// `block` followed by each enclosing block up to its root
    pub fn ancestors(&self, block: BlockId) -> impl Iterator<Item = BlockId> + '_ {
        std::iter::successors(Some(block), move |id| {
            self.get_block(*id).and_then(|b| b.parent)
        })
    }

    pub fn is_ancestor_or_self(&self, ancestor: BlockId, block: BlockId) -> bool {
        self.ancestors(block).any(|id| id == ancestor)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Register a declaration in `block`, after any existing ones.
    pub fn add_decl(
        &mut self,
        block: BlockId,
        name: impl Into<String>,
        ty: Option<TypeRef>,
        kind: DeclKind,
        span: Span,
    ) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(VarDecl {
            name: name.into(),
            ty,
            kind,
            owner: block,
            span,
        });
        self.blocks[block.index()].add_decl(id);
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn decl(&self, id: DeclId) -> &VarDecl {
        &self.decls[id.index()]
    }

    pub fn get_decl(&self, id: DeclId) -> Option<&VarDecl> {
        self.decls.get(id.index())
    }

    pub fn decls(&self) -> &[VarDecl] {
        &self.decls
    }

    /// First declaration named `name` directly in `block`
    ///
    /// Temporaries are never found by name; they are only reachable by id.
    pub fn find_in_block(&self, block: BlockId, name: &str) -> Option<DeclId> {
        self.get_block(block)?
            .var_decls
            .iter()
            .copied()
            .find(|id| {
                let decl = self.decl(*id);
                !decl.is_temporary() && decl.name == name
            })
    }

    /// Resolve `name` starting at `from` and walking outwards.
    ///
    /// The innermost block holding a match wins; within a block the earliest
    /// declaration wins.
    pub fn lookup(&self, from: BlockId, name: &str) -> Option<DeclId> {
        self.ancestors(from)
            .find_map(|block| self.find_in_block(block, name))
    }

    /// Point a hoisted placeholder at its concrete declaration.
    ///
    /// Returns `false` if `placeholder` is not a placeholder.
    pub fn link_placeholder(&mut self, placeholder: DeclId, target: DeclId) -> bool {
        match &mut self.decls[placeholder.index()].kind {
            DeclKind::GlobalFuncRef { target: slot } => {
                *slot = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Follow a placeholder to the function it stands for.
    ///
    /// Non-placeholder declarations resolve to themselves; a placeholder whose
    /// declaration was never lowered resolves to `None`.
    pub fn resolve_function(&self, decl: DeclId) -> Option<DeclId> {
        let var = self.get_decl(decl)?;
        match var.kind {
            DeclKind::GlobalFuncRef { target } => target,
            _ => Some(decl),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn create_type_scope<S: AsRef<str>>(&mut self, builtins: &[S]) -> TypeScopeId {
        let id = TypeScopeId(self.type_scopes.len() as u32);
        self.type_scopes.push(TypeScope::with_builtins(id, builtins));
        id
    }

    pub fn type_scope(&self, id: TypeScopeId) -> Option<&TypeScope> {
        self.type_scopes.get(id.0 as usize)
    }

    pub fn type_decl(&self, id: TypeDeclId) -> Option<&TypeDecl> {
        self.type_scope(id.scope)?.get(id.index)
    }
}

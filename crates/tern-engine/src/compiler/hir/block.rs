//! Blocks and lexical scopes
//!
//! A [`Block`] is one lexical scope: the declarations made in it, the
//! statements that run in it, and the scopes nested inside it. Blocks live in
//! the [`Hir`](super::Hir) arena and refer to each other by [`BlockId`].

use super::decl::DeclId;
use super::node::Stmt;
use crate::syntax::Span;

/// Block identifier
///
/// Ids are handed out by the arena in creation order, so they are unique and
/// strictly increasing within one lowering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u32);

impl BlockId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BLOCK {}", self.0)
    }
}

/// One lexical scope
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    /// Enclosing scope; `None` only for a unit's outermost block
    pub parent: Option<BlockId>,
    /// Declarations in declaration order
    pub var_decls: Vec<DeclId>,
    /// Nested scopes in creation order
    pub sub_blocks: Vec<BlockId>,
    pub stmts: Vec<Stmt>,
    pub span: Span,
    /// Set once the syntax node that owns this block has been fully lowered
    pub sealed: bool,
}

impl Block {
    pub(crate) fn new(id: BlockId, parent: Option<BlockId>, span: Span) -> Self {
        Self {
            id,
            parent,
            var_decls: Vec::new(),
            sub_blocks: Vec::new(),
            stmts: Vec::new(),
            span,
            sealed: false,
        }
    }

    pub fn add_decl(&mut self, decl: DeclId) {
        debug_assert!(!self.sealed, "declaration added to sealed {}", self.id);
        self.var_decls.push(decl);
    }

    pub fn add_stmt(&mut self, stmt: Stmt) {
        debug_assert!(!self.sealed, "statement added to sealed {}", self.id);
        self.stmts.push(stmt);
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.var_decls.is_empty() && self.stmts.is_empty() && self.sub_blocks.is_empty()
    }
}

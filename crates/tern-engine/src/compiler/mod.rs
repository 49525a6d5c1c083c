//! Compiler module: HIR and lowering
//!
//! - `hir`: block-structured IR arena, declarations, statements and the
//!   pretty printer
//! - `lower`: syntax tree to HIR lowering

pub mod hir;
pub mod lower;

pub use hir::{Block, BlockId, DeclId, Expr, Hir, PrettyPrint, Stmt, VarDecl};
pub use lower::{lower, LowerOptions, Lowerer};

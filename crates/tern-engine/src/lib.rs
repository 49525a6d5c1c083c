//! Tern Front-End Engine
//!
//! This crate turns Tern syntax trees into the block-structured, name-resolved
//! IR that later compiler stages consume:
//! - **Syntax**: spans, interned names, the AST and its visitor (`syntax` module)
//! - **Compiler**: the HIR arena and the lowering pass (`compiler` module)
//! - **Diagnostics**: non-fatal problem reports and their rendering
//!   (`diagnostics` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use tern_engine::{lower, AstBuilder, PrettyPrint};
//!
//! let b = AstBuilder::new();
//! let module = b.module(vec![
//!     b.let_decl("x", Some(b.type_ref("i32")), Some(b.int(1))),
//! ]);
//! let interner = b.into_interner();
//!
//! let (hir, diagnostics) = lower(&module, &interner);
//! assert!(diagnostics.is_empty());
//! println!("{}", hir.pretty_print());
//! ```

#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Syntax module: spans, interner, AST, visitor and tree builder
pub mod syntax;

/// Compiler module: HIR and lowering
pub mod compiler;

/// Diagnostics module: codes, sink, collector and rendering
pub mod diagnostics;

// ============================================================================
// Re-exports
// ============================================================================

pub use syntax::{AstBuilder, Interner, Module, Node, NodeKind, Span, Symbol, Visitor};

pub use compiler::{lower, Block, BlockId, Hir, LowerOptions, Lowerer, PrettyPrint};

pub use diagnostics::{
    Diagnostic, DiagnosticCode, DiagnosticRecord, DiagnosticSink, Diagnostics, LowerError,
};

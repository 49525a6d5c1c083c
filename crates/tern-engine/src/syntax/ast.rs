//! Abstract Syntax Tree consumed by the lowering engine.
//!
//! The tree is produced by an upstream parser and is never mutated here.
//! It covers more syntax than the lowering engine accepts: unsupported shapes
//! still have a node kind so that they can be visited and reported.
//!
//! Every AST node includes a `Span` for source location tracking.

use crate::syntax::interner::Symbol;
use crate::syntax::span::Span;

pub mod expression;
pub mod kind;
pub mod pattern;
pub mod statement;
pub mod types;
pub mod visitor;

pub use expression::*;
pub use kind::*;
pub use pattern::*;
pub use statement::*;
pub use types::*;
pub use visitor::*;

/// Root node: one translation unit (source file)
///
/// # Example
/// ```
/// use tern_engine::syntax::ast::Module;
/// use tern_engine::syntax::Span;
///
/// let module = Module::new(vec![], Span::new(0, 0));
/// assert!(module.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Top-level statements, in source order
    pub statements: Vec<Statement>,

    /// Span covering the entire unit
    pub span: Span,
}

impl Module {
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// Identifier: a name for a variable, function, namespace or type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: Symbol,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }
}

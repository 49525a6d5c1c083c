//! Syntax tree definitions consumed by the lowering engine
//!
//! - `span`: source ranges
//! - `interner`: identifier interning
//! - `ast`: node types, node kinds and the visitor framework
//! - `builder`: programmatic tree construction

pub mod ast;
pub mod builder;
pub mod interner;
pub mod span;

pub use ast::{Module, Node, NodeKind, Visitor};
pub use builder::AstBuilder;
pub use interner::{Interner, Symbol};
pub use span::Span;

//! Statement AST nodes
//!
//! Declarations (variables, functions, namespaces, classes, type aliases,
//! imports/exports) and control flow statements.

use super::*;
use crate::syntax::span::Span;

/// Top-level or block-level statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable declaration: let/const/var
    VariableDecl(VariableDecl),

    /// Function declaration
    FunctionDecl(FunctionDecl),

    /// Namespace declaration: namespace ns { ... }
    NamespaceDecl(NamespaceDecl),

    /// Class declaration
    ClassDecl(ClassDecl),

    /// Type alias declaration
    TypeAliasDecl(TypeAliasDecl),

    /// Import statement
    ImportDecl(ImportDecl),

    /// Export statement wrapping a declaration
    ExportDecl(ExportDecl),

    /// Expression statement (e.g., function call)
    Expression(ExpressionStatement),

    /// If statement
    If(IfStatement),

    /// Switch statement
    Switch(SwitchStatement),

    /// While loop
    While(WhileStatement),

    /// Do-while loop
    DoWhile(DoWhileStatement),

    /// For loop
    For(ForStatement),

    /// For-of loop
    ForOf(ForOfStatement),

    /// Break statement
    Break(BreakStatement),

    /// Continue statement
    Continue(ContinueStatement),

    /// Return statement
    Return(ReturnStatement),

    /// Throw statement
    Throw(ThrowStatement),

    /// Try-catch-finally
    Try(TryStatement),

    /// Brace-delimited statement group: { ... }
    Block(BlockStatement),

    /// Empty statement (;)
    Empty(Span),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> Span {
        match self {
            Statement::VariableDecl(s) => s.span,
            Statement::FunctionDecl(s) => s.span,
            Statement::NamespaceDecl(s) => s.span,
            Statement::ClassDecl(s) => s.span,
            Statement::TypeAliasDecl(s) => s.span,
            Statement::ImportDecl(s) => s.span,
            Statement::ExportDecl(s) => s.span,
            Statement::Expression(s) => s.span,
            Statement::If(s) => s.span,
            Statement::Switch(s) => s.span,
            Statement::While(s) => s.span,
            Statement::DoWhile(s) => s.span,
            Statement::For(s) => s.span,
            Statement::ForOf(s) => s.span,
            Statement::Break(s) => s.span,
            Statement::Continue(s) => s.span,
            Statement::Return(s) => s.span,
            Statement::Throw(s) => s.span,
            Statement::Try(s) => s.span,
            Statement::Block(s) => s.span,
            Statement::Empty(span) => *span,
        }
    }

    /// Check if this statement is a declaration
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::VariableDecl(_)
                | Statement::FunctionDecl(_)
                | Statement::NamespaceDecl(_)
                | Statement::ClassDecl(_)
                | Statement::TypeAliasDecl(_)
        )
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Variable declaration: let x = 42; or const y: i32 = 10;
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub kind: VariableKind,

    /// Bound name, or a destructuring pattern
    pub pattern: Pattern,

    pub type_annotation: Option<TypeAnnotation>,

    pub initializer: Option<Expression>,

    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Let,
    Const,
    Var,
}

/// Function declaration
///
/// ```text
/// function add(x: i32, y: i32): i32 {
///     return x + y;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Identifier,

    /// Generic type parameters; empty for non-generic functions
    pub type_params: Vec<TypeParameter>,

    pub params: Vec<Parameter>,

    pub return_type: Option<TypeAnnotation>,

    pub body: BlockStatement,

    pub span: Span,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub pattern: Pattern,
    pub type_annotation: Option<TypeAnnotation>,
    /// Default value for the parameter (e.g., `x: i32 = 10`)
    pub default_value: Option<Expression>,
    pub span: Span,
}

/// How a parameter binds its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    /// Plain positional parameter: `x`
    #[default]
    Positional,
    /// Optional parameter: `x?`
    Optional,
    /// Rest parameter: `...xs`
    Rest,
}

/// Namespace declaration: namespace math { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: Identifier,
    pub members: Vec<Statement>,
    pub span: Span,
}

/// Class declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Identifier,
    pub type_params: Vec<TypeParameter>,
    pub extends: Option<TypeAnnotation>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(FunctionDecl),
}

/// Field declaration inside a class body
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: Identifier,
    pub type_annotation: Option<TypeAnnotation>,
    pub initializer: Option<Expression>,
    pub span: Span,
}

/// Type alias: type Index = i32;
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub name: Identifier,
    pub type_params: Vec<TypeParameter>,
    pub type_annotation: TypeAnnotation,
    pub span: Span,
}

/// Import declaration: import { foo, bar as baz } from "./module";
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: StringLiteral,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub name: Identifier,
    pub alias: Option<Identifier>,
}

/// Export declaration: export function f() {}
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecl {
    pub declaration: Box<Statement>,
    pub span: Span,
}

// ============================================================================
// Control Flow Statements
// ============================================================================

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// Switch statement
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// None for the default case
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    pub span: Span,
}

/// While loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Do-while loop
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
    pub span: Span,
}

/// For loop
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VariableDecl(VariableDecl),
    Expression(Expression),
}

/// For-of loop: for (const item of items) { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    pub variable: VariableDecl,
    pub iterable: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub value: Expression,
    pub span: Span,
}

/// Try-catch-finally
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub body: BlockStatement,
    pub catch_clause: Option<CatchClause>,
    pub finally_clause: Option<BlockStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: BlockStatement,
    pub span: Span,
}

/// A sequence of statements wrapped in { }.
///
/// Used for function bodies, control flow bodies and standalone groups.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Expression statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

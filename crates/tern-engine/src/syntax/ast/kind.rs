//! Node kinds and type-erased node references
//!
//! [`NodeKind`] is the closed catalogue of syntax node variants. [`Node`] is a
//! borrowed reference to any one of them, which lets code hold "some node"
//! without knowing its concrete type and hand it to [`walk_node`] for
//! dispatch.
//!
//! [`walk_node`]: super::visitor::walk_node

use super::*;
use crate::syntax::span::Span;
use std::fmt;

/// Every syntax node variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,

    // Declarations
    VariableDecl,
    FunctionDecl,
    Parameter,
    TypeParameter,
    NamespaceDecl,
    ClassDecl,
    FieldDecl,
    TypeAliasDecl,
    ImportDecl,
    ExportDecl,

    // Statements
    ExpressionStatement,
    If,
    Switch,
    SwitchCase,
    While,
    DoWhile,
    For,
    ForOf,
    Break,
    Continue,
    Return,
    Throw,
    Try,
    CatchClause,
    Block,
    Empty,

    // Expressions
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    TemplateLiteral,
    BooleanLiteral,
    NullLiteral,
    This,
    Super,
    Identifier,
    Array,
    Object,
    Property,
    Unary,
    Binary,
    Logical,
    Assignment,
    Conditional,
    Call,
    Member,
    Index,
    New,
    FunctionExpression,
    Parenthesized,
    Comma,
    InstanceOf,
    TypeCast,

    // Types
    TypeAnnotation,
    TypeReference,
    TypeName,
    FunctionType,
    ArrayType,
    UnionType,

    // Patterns
    ArrayPattern,
    ObjectPattern,
}

impl NodeKind {
    /// Human-readable name used in diagnostics
    pub fn description(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::VariableDecl => "variable declaration",
            NodeKind::FunctionDecl => "function declaration",
            NodeKind::Parameter => "parameter",
            NodeKind::TypeParameter => "type parameter",
            NodeKind::NamespaceDecl => "namespace declaration",
            NodeKind::ClassDecl => "class declaration",
            NodeKind::FieldDecl => "field declaration",
            NodeKind::TypeAliasDecl => "type alias",
            NodeKind::ImportDecl => "import declaration",
            NodeKind::ExportDecl => "export declaration",
            NodeKind::ExpressionStatement => "expression statement",
            NodeKind::If => "if statement",
            NodeKind::Switch => "switch statement",
            NodeKind::SwitchCase => "switch case",
            NodeKind::While => "while statement",
            NodeKind::DoWhile => "do-while statement",
            NodeKind::For => "for statement",
            NodeKind::ForOf => "for-of statement",
            NodeKind::Break => "break statement",
            NodeKind::Continue => "continue statement",
            NodeKind::Return => "return statement",
            NodeKind::Throw => "throw statement",
            NodeKind::Try => "try statement",
            NodeKind::CatchClause => "catch clause",
            NodeKind::Block => "block",
            NodeKind::Empty => "empty statement",
            NodeKind::IntLiteral => "integer literal",
            NodeKind::FloatLiteral => "float literal",
            NodeKind::StringLiteral => "string literal",
            NodeKind::TemplateLiteral => "template literal",
            NodeKind::BooleanLiteral => "boolean literal",
            NodeKind::NullLiteral => "null literal",
            NodeKind::This => "this expression",
            NodeKind::Super => "super expression",
            NodeKind::Identifier => "identifier",
            NodeKind::Array => "array literal",
            NodeKind::Object => "object literal",
            NodeKind::Property => "object property",
            NodeKind::Unary => "unary expression",
            NodeKind::Binary => "binary expression",
            NodeKind::Logical => "logical expression",
            NodeKind::Assignment => "assignment",
            NodeKind::Conditional => "conditional expression",
            NodeKind::Call => "call expression",
            NodeKind::Member => "member access",
            NodeKind::Index => "index access",
            NodeKind::New => "new expression",
            NodeKind::FunctionExpression => "function expression",
            NodeKind::Parenthesized => "parenthesized expression",
            NodeKind::Comma => "comma expression",
            NodeKind::InstanceOf => "instanceof expression",
            NodeKind::TypeCast => "type cast",
            NodeKind::TypeAnnotation => "type annotation",
            NodeKind::TypeReference => "type reference",
            NodeKind::TypeName => "type name",
            NodeKind::FunctionType => "function type",
            NodeKind::ArrayType => "array type",
            NodeKind::UnionType => "union type",
            NodeKind::ArrayPattern => "array pattern",
            NodeKind::ObjectPattern => "object pattern",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Borrowed reference to any syntax node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Module(&'a Module),

    VariableDecl(&'a VariableDecl),
    FunctionDecl(&'a FunctionDecl),
    Parameter(&'a Parameter),
    TypeParameter(&'a TypeParameter),
    NamespaceDecl(&'a NamespaceDecl),
    ClassDecl(&'a ClassDecl),
    FieldDecl(&'a FieldDecl),
    TypeAliasDecl(&'a TypeAliasDecl),
    ImportDecl(&'a ImportDecl),
    ExportDecl(&'a ExportDecl),

    ExpressionStatement(&'a ExpressionStatement),
    If(&'a IfStatement),
    Switch(&'a SwitchStatement),
    SwitchCase(&'a SwitchCase),
    While(&'a WhileStatement),
    DoWhile(&'a DoWhileStatement),
    For(&'a ForStatement),
    ForOf(&'a ForOfStatement),
    Break(&'a BreakStatement),
    Continue(&'a ContinueStatement),
    Return(&'a ReturnStatement),
    Throw(&'a ThrowStatement),
    Try(&'a TryStatement),
    CatchClause(&'a CatchClause),
    Block(&'a BlockStatement),
    Empty(Span),

    IntLiteral(&'a IntLiteral),
    FloatLiteral(&'a FloatLiteral),
    StringLiteral(&'a StringLiteral),
    TemplateLiteral(&'a TemplateLiteral),
    BooleanLiteral(&'a BooleanLiteral),
    NullLiteral(Span),
    This(Span),
    Super(Span),
    Identifier(&'a Identifier),
    Array(&'a ArrayExpression),
    Object(&'a ObjectExpression),
    Property(&'a Property),
    Unary(&'a UnaryExpression),
    Binary(&'a BinaryExpression),
    Logical(&'a LogicalExpression),
    Assignment(&'a AssignmentExpression),
    Conditional(&'a ConditionalExpression),
    Call(&'a CallExpression),
    Member(&'a MemberExpression),
    Index(&'a IndexExpression),
    New(&'a NewExpression),
    FunctionExpression(&'a FunctionExpression),
    Parenthesized(&'a ParenthesizedExpression),
    Comma(&'a CommaExpression),
    InstanceOf(&'a InstanceOfExpression),
    TypeCast(&'a TypeCastExpression),

    TypeAnnotation(&'a TypeAnnotation),
    TypeReference(&'a TypeReference),
    TypeName(&'a TypeName),
    FunctionType(&'a FunctionType),
    ArrayType(&'a ArrayType),
    UnionType(&'a UnionType),

    ArrayPattern(&'a ArrayPattern),
    ObjectPattern(&'a ObjectPattern),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Module(_) => NodeKind::Module,
            Node::VariableDecl(_) => NodeKind::VariableDecl,
            Node::FunctionDecl(_) => NodeKind::FunctionDecl,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::TypeParameter(_) => NodeKind::TypeParameter,
            Node::NamespaceDecl(_) => NodeKind::NamespaceDecl,
            Node::ClassDecl(_) => NodeKind::ClassDecl,
            Node::FieldDecl(_) => NodeKind::FieldDecl,
            Node::TypeAliasDecl(_) => NodeKind::TypeAliasDecl,
            Node::ImportDecl(_) => NodeKind::ImportDecl,
            Node::ExportDecl(_) => NodeKind::ExportDecl,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::If(_) => NodeKind::If,
            Node::Switch(_) => NodeKind::Switch,
            Node::SwitchCase(_) => NodeKind::SwitchCase,
            Node::While(_) => NodeKind::While,
            Node::DoWhile(_) => NodeKind::DoWhile,
            Node::For(_) => NodeKind::For,
            Node::ForOf(_) => NodeKind::ForOf,
            Node::Break(_) => NodeKind::Break,
            Node::Continue(_) => NodeKind::Continue,
            Node::Return(_) => NodeKind::Return,
            Node::Throw(_) => NodeKind::Throw,
            Node::Try(_) => NodeKind::Try,
            Node::CatchClause(_) => NodeKind::CatchClause,
            Node::Block(_) => NodeKind::Block,
            Node::Empty(_) => NodeKind::Empty,
            Node::IntLiteral(_) => NodeKind::IntLiteral,
            Node::FloatLiteral(_) => NodeKind::FloatLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::TemplateLiteral(_) => NodeKind::TemplateLiteral,
            Node::BooleanLiteral(_) => NodeKind::BooleanLiteral,
            Node::NullLiteral(_) => NodeKind::NullLiteral,
            Node::This(_) => NodeKind::This,
            Node::Super(_) => NodeKind::Super,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
            Node::Property(_) => NodeKind::Property,
            Node::Unary(_) => NodeKind::Unary,
            Node::Binary(_) => NodeKind::Binary,
            Node::Logical(_) => NodeKind::Logical,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::Conditional(_) => NodeKind::Conditional,
            Node::Call(_) => NodeKind::Call,
            Node::Member(_) => NodeKind::Member,
            Node::Index(_) => NodeKind::Index,
            Node::New(_) => NodeKind::New,
            Node::FunctionExpression(_) => NodeKind::FunctionExpression,
            Node::Parenthesized(_) => NodeKind::Parenthesized,
            Node::Comma(_) => NodeKind::Comma,
            Node::InstanceOf(_) => NodeKind::InstanceOf,
            Node::TypeCast(_) => NodeKind::TypeCast,
            Node::TypeAnnotation(_) => NodeKind::TypeAnnotation,
            Node::TypeReference(_) => NodeKind::TypeReference,
            Node::TypeName(_) => NodeKind::TypeName,
            Node::FunctionType(_) => NodeKind::FunctionType,
            Node::ArrayType(_) => NodeKind::ArrayType,
            Node::UnionType(_) => NodeKind::UnionType,
            Node::ArrayPattern(_) => NodeKind::ArrayPattern,
            Node::ObjectPattern(_) => NodeKind::ObjectPattern,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Module(n) => n.span,
            Node::VariableDecl(n) => n.span,
            Node::FunctionDecl(n) => n.span,
            Node::Parameter(n) => n.span,
            Node::TypeParameter(n) => n.span,
            Node::NamespaceDecl(n) => n.span,
            Node::ClassDecl(n) => n.span,
            Node::FieldDecl(n) => n.span,
            Node::TypeAliasDecl(n) => n.span,
            Node::ImportDecl(n) => n.span,
            Node::ExportDecl(n) => n.span,
            Node::ExpressionStatement(n) => n.span,
            Node::If(n) => n.span,
            Node::Switch(n) => n.span,
            Node::SwitchCase(n) => n.span,
            Node::While(n) => n.span,
            Node::DoWhile(n) => n.span,
            Node::For(n) => n.span,
            Node::ForOf(n) => n.span,
            Node::Break(n) => n.span,
            Node::Continue(n) => n.span,
            Node::Return(n) => n.span,
            Node::Throw(n) => n.span,
            Node::Try(n) => n.span,
            Node::CatchClause(n) => n.span,
            Node::Block(n) => n.span,
            Node::Empty(span) => *span,
            Node::IntLiteral(n) => n.span,
            Node::FloatLiteral(n) => n.span,
            Node::StringLiteral(n) => n.span,
            Node::TemplateLiteral(n) => n.span,
            Node::BooleanLiteral(n) => n.span,
            Node::NullLiteral(span) => *span,
            Node::This(span) => *span,
            Node::Super(span) => *span,
            Node::Identifier(n) => n.span,
            Node::Array(n) => n.span,
            Node::Object(n) => n.span,
            Node::Property(n) => n.span,
            Node::Unary(n) => n.span,
            Node::Binary(n) => n.span,
            Node::Logical(n) => n.span,
            Node::Assignment(n) => n.span,
            Node::Conditional(n) => n.span,
            Node::Call(n) => n.span,
            Node::Member(n) => n.span,
            Node::Index(n) => n.span,
            Node::New(n) => n.span,
            Node::FunctionExpression(n) => n.span,
            Node::Parenthesized(n) => n.span,
            Node::Comma(n) => n.span,
            Node::InstanceOf(n) => n.span,
            Node::TypeCast(n) => n.span,
            Node::TypeAnnotation(n) => n.span,
            Node::TypeReference(n) => n.span,
            Node::TypeName(n) => n.span,
            Node::FunctionType(n) => n.span,
            Node::ArrayType(n) => n.span,
            Node::UnionType(n) => n.span,
            Node::ArrayPattern(n) => n.span,
            Node::ObjectPattern(n) => n.span,
        }
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::VariableDecl(s) => Node::VariableDecl(s),
            Statement::FunctionDecl(s) => Node::FunctionDecl(s),
            Statement::NamespaceDecl(s) => Node::NamespaceDecl(s),
            Statement::ClassDecl(s) => Node::ClassDecl(s),
            Statement::TypeAliasDecl(s) => Node::TypeAliasDecl(s),
            Statement::ImportDecl(s) => Node::ImportDecl(s),
            Statement::ExportDecl(s) => Node::ExportDecl(s),
            Statement::Expression(s) => Node::ExpressionStatement(s),
            Statement::If(s) => Node::If(s),
            Statement::Switch(s) => Node::Switch(s),
            Statement::While(s) => Node::While(s),
            Statement::DoWhile(s) => Node::DoWhile(s),
            Statement::For(s) => Node::For(s),
            Statement::ForOf(s) => Node::ForOf(s),
            Statement::Break(s) => Node::Break(s),
            Statement::Continue(s) => Node::Continue(s),
            Statement::Return(s) => Node::Return(s),
            Statement::Throw(s) => Node::Throw(s),
            Statement::Try(s) => Node::Try(s),
            Statement::Block(s) => Node::Block(s),
            Statement::Empty(span) => Node::Empty(*span),
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        match expr {
            Expression::IntLiteral(e) => Node::IntLiteral(e),
            Expression::FloatLiteral(e) => Node::FloatLiteral(e),
            Expression::StringLiteral(e) => Node::StringLiteral(e),
            Expression::TemplateLiteral(e) => Node::TemplateLiteral(e),
            Expression::BooleanLiteral(e) => Node::BooleanLiteral(e),
            Expression::NullLiteral(span) => Node::NullLiteral(*span),
            Expression::This(span) => Node::This(*span),
            Expression::Super(span) => Node::Super(*span),
            Expression::Identifier(e) => Node::Identifier(e),
            Expression::Array(e) => Node::Array(e),
            Expression::Object(e) => Node::Object(e),
            Expression::Unary(e) => Node::Unary(e),
            Expression::Binary(e) => Node::Binary(e),
            Expression::Logical(e) => Node::Logical(e),
            Expression::Assignment(e) => Node::Assignment(e),
            Expression::Conditional(e) => Node::Conditional(e),
            Expression::Call(e) => Node::Call(e),
            Expression::Member(e) => Node::Member(e),
            Expression::Index(e) => Node::Index(e),
            Expression::New(e) => Node::New(e),
            Expression::Function(e) => Node::FunctionExpression(e),
            Expression::Parenthesized(e) => Node::Parenthesized(e),
            Expression::Comma(e) => Node::Comma(e),
            Expression::InstanceOf(e) => Node::InstanceOf(e),
            Expression::TypeCast(e) => Node::TypeCast(e),
        }
    }
}

impl<'a> From<&'a Type> for Node<'a> {
    fn from(ty: &'a Type) -> Self {
        match ty {
            Type::Reference(t) => Node::TypeReference(t),
            Type::Function(t) => Node::FunctionType(t),
            Type::Array(t) => Node::ArrayType(t),
            Type::Union(t) => Node::UnionType(t),
        }
    }
}

impl<'a> From<&'a Pattern> for Node<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        match pattern {
            Pattern::Identifier(p) => Node::Identifier(p),
            Pattern::Array(p) => Node::ArrayPattern(p),
            Pattern::Object(p) => Node::ObjectPattern(p),
        }
    }
}

impl<'a> From<&'a Module> for Node<'a> {
    fn from(module: &'a Module) -> Self {
        Node::Module(module)
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

impl Expression {
    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

impl Type {
    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

impl Pattern {
    pub fn kind(&self) -> NodeKind {
        Node::from(self).kind()
    }
}

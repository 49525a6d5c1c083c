//! Programmatic construction of syntax trees
//!
//! The engine has no parser of its own. [`AstBuilder`] lets front-ends, tests
//! and benches assemble trees directly: it interns every name and hands out
//! a fresh, distinct span per node so diagnostics can be told apart.
//!
//! Methods take `&self` so calls can nest freely:
//!
//! ```
//! use tern_engine::syntax::builder::AstBuilder;
//!
//! let b = AstBuilder::new();
//! let module = b.module(vec![b.let_decl("x", Some(b.type_ref("i32")), Some(b.int(1)))]);
//! let interner = b.into_interner();
//! assert_eq!(module.len(), 1);
//! assert_eq!(interner.len(), 2);
//! ```

use std::cell::{Cell, RefCell};

use crate::syntax::ast::*;
use crate::syntax::interner::{Interner, Symbol};
use crate::syntax::span::Span;

#[derive(Debug, Default)]
pub struct AstBuilder {
    interner: RefCell<Interner>,
    next_offset: Cell<usize>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building with an existing interner
    pub fn with_interner(interner: Interner) -> Self {
        Self {
            interner: RefCell::new(interner),
            next_offset: Cell::new(0),
        }
    }

    /// Finish building and take the interner that resolves all names
    pub fn into_interner(self) -> Interner {
        self.interner.into_inner()
    }

    /// Allocate the next span. Spans are one byte wide and never overlap.
    pub fn span(&self) -> Span {
        let start = self.next_offset.get();
        self.next_offset.set(start + 1);
        Span::new(start, start + 1)
    }

    pub fn intern(&self, name: &str) -> Symbol {
        self.interner.borrow_mut().intern(name)
    }

    pub fn ident(&self, name: &str) -> Identifier {
        Identifier::new(self.intern(name), self.span())
    }

    pub fn module(&self, statements: Vec<Statement>) -> Module {
        Module::new(statements, self.span())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `let name: ty = init;`
    pub fn let_decl(
        &self,
        name: &str,
        type_annotation: Option<TypeAnnotation>,
        initializer: Option<Expression>,
    ) -> Statement {
        Statement::VariableDecl(VariableDecl {
            kind: VariableKind::Let,
            pattern: Pattern::Identifier(self.ident(name)),
            type_annotation,
            initializer,
            span: self.span(),
        })
    }

    /// `let [a, b] = init;`
    pub fn destructuring_decl(&self, names: &[&str], initializer: Expression) -> Statement {
        let elements = names
            .iter()
            .map(|name| Some(Pattern::Identifier(self.ident(name))))
            .collect();
        Statement::VariableDecl(VariableDecl {
            kind: VariableKind::Let,
            pattern: Pattern::Array(ArrayPattern {
                elements,
                span: self.span(),
            }),
            type_annotation: None,
            initializer: Some(initializer),
            span: self.span(),
        })
    }

    /// `function name(params) { body }`
    pub fn function(&self, name: &str, params: Vec<Parameter>, body: Vec<Statement>) -> Statement {
        Statement::FunctionDecl(FunctionDecl {
            name: self.ident(name),
            type_params: Vec::new(),
            params,
            return_type: None,
            body: self.block_body(body),
            span: self.span(),
        })
    }

    /// `function name<T, ...>(params) { body }`
    pub fn generic_function(
        &self,
        name: &str,
        type_params: &[&str],
        params: Vec<Parameter>,
        body: Vec<Statement>,
    ) -> Statement {
        let type_params = type_params
            .iter()
            .map(|param| TypeParameter::simple(self.ident(param), self.span()))
            .collect();
        Statement::FunctionDecl(FunctionDecl {
            name: self.ident(name),
            type_params,
            params,
            return_type: None,
            body: self.block_body(body),
            span: self.span(),
        })
    }

    /// Positional parameter `name: ty`
    pub fn param(&self, name: &str, type_annotation: Option<TypeAnnotation>) -> Parameter {
        Parameter {
            kind: ParameterKind::Positional,
            pattern: Pattern::Identifier(self.ident(name)),
            type_annotation,
            default_value: None,
            span: self.span(),
        }
    }

    /// Rest parameter `...name`
    pub fn rest_param(&self, name: &str) -> Parameter {
        Parameter {
            kind: ParameterKind::Rest,
            ..self.param(name, None)
        }
    }

    /// Optional parameter `name?`
    pub fn optional_param(&self, name: &str) -> Parameter {
        Parameter {
            kind: ParameterKind::Optional,
            ..self.param(name, None)
        }
    }

    /// Parameter with a default value `name = default`
    pub fn default_param(&self, name: &str, default: Expression) -> Parameter {
        Parameter {
            default_value: Some(default),
            ..self.param(name, None)
        }
    }

    /// `namespace name { members }`
    pub fn namespace(&self, name: &str, members: Vec<Statement>) -> Statement {
        Statement::NamespaceDecl(NamespaceDecl {
            name: self.ident(name),
            members,
            span: self.span(),
        })
    }

    /// `class name {}`
    pub fn class(&self, name: &str) -> Statement {
        Statement::ClassDecl(ClassDecl {
            name: self.ident(name),
            type_params: Vec::new(),
            extends: None,
            members: Vec::new(),
            span: self.span(),
        })
    }

    /// `export <declaration>`
    pub fn export(&self, declaration: Statement) -> Statement {
        Statement::ExportDecl(ExportDecl {
            declaration: Box::new(declaration),
            span: self.span(),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn expr_stmt(&self, expression: Expression) -> Statement {
        Statement::Expression(ExpressionStatement {
            expression,
            span: self.span(),
        })
    }

    /// `if (condition) { then } else { otherwise }`
    pub fn if_(
        &self,
        condition: Expression,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    ) -> Statement {
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(self.block(then_branch)),
            else_branch: else_branch.map(|stmts| Box::new(self.block(stmts))),
            span: self.span(),
        })
    }

    /// `if` whose branches are arbitrary statements rather than brace groups
    pub fn if_stmt(
        &self,
        condition: Expression,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Statement {
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            span: self.span(),
        })
    }

    /// `while (condition) { body }`
    pub fn while_(&self, condition: Expression, body: Vec<Statement>) -> Statement {
        Statement::While(WhileStatement {
            condition,
            body: Box::new(self.block(body)),
            span: self.span(),
        })
    }

    /// `do { body } while (condition);`
    pub fn do_while(&self, body: Vec<Statement>, condition: Expression) -> Statement {
        Statement::DoWhile(DoWhileStatement {
            body: Box::new(self.block(body)),
            condition,
            span: self.span(),
        })
    }

    /// `for (;;) { body }`
    pub fn for_(
        &self,
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Vec<Statement>,
    ) -> Statement {
        Statement::For(ForStatement {
            init,
            test,
            update,
            body: Box::new(self.block(body)),
            span: self.span(),
        })
    }

    pub fn return_(&self, value: Option<Expression>) -> Statement {
        Statement::Return(ReturnStatement {
            value,
            span: self.span(),
        })
    }

    pub fn break_(&self) -> Statement {
        Statement::Break(BreakStatement {
            label: None,
            span: self.span(),
        })
    }

    pub fn throw(&self, value: Expression) -> Statement {
        Statement::Throw(ThrowStatement {
            value,
            span: self.span(),
        })
    }

    /// `{ statements }`
    pub fn block(&self, statements: Vec<Statement>) -> Statement {
        Statement::Block(self.block_body(statements))
    }

    pub fn block_body(&self, statements: Vec<Statement>) -> BlockStatement {
        BlockStatement {
            statements,
            span: self.span(),
        }
    }

    pub fn empty(&self) -> Statement {
        Statement::Empty(self.span())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn int(&self, value: i64) -> Expression {
        Expression::IntLiteral(IntLiteral {
            value,
            span: self.span(),
        })
    }

    pub fn float(&self, value: f64) -> Expression {
        Expression::FloatLiteral(FloatLiteral {
            value,
            span: self.span(),
        })
    }

    pub fn string(&self, value: &str) -> Expression {
        Expression::StringLiteral(StringLiteral {
            value: self.intern(value),
            span: self.span(),
        })
    }

    pub fn boolean(&self, value: bool) -> Expression {
        Expression::BooleanLiteral(BooleanLiteral {
            value,
            span: self.span(),
        })
    }

    pub fn null(&self) -> Expression {
        Expression::NullLiteral(self.span())
    }

    /// Identifier reference
    pub fn name(&self, name: &str) -> Expression {
        Expression::Identifier(self.ident(name))
    }

    pub fn binary(&self, operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span: self.span(),
        })
    }

    pub fn logical(&self, operator: LogicalOperator, left: Expression, right: Expression) -> Expression {
        Expression::Logical(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span: self.span(),
        })
    }

    pub fn unary(&self, operator: UnaryOperator, operand: Expression) -> Expression {
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            span: self.span(),
        })
    }

    /// `left = right`
    pub fn assign(&self, left: Expression, right: Expression) -> Expression {
        self.compound_assign(AssignmentOperator::Assign, left, right)
    }

    /// `left op= right`
    pub fn compound_assign(
        &self,
        operator: AssignmentOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span: self.span(),
        })
    }

    pub fn call(&self, callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::Call(CallExpression {
            callee: Box::new(callee),
            type_args: Vec::new(),
            arguments,
            span: self.span(),
        })
    }

    pub fn member(&self, object: Expression, property: &str) -> Expression {
        Expression::Member(MemberExpression {
            object: Box::new(object),
            property: self.ident(property),
            span: self.span(),
        })
    }

    pub fn index(&self, object: Expression, index: Expression) -> Expression {
        Expression::Index(IndexExpression {
            object: Box::new(object),
            index: Box::new(index),
            span: self.span(),
        })
    }

    pub fn array(&self, elements: Vec<Expression>) -> Expression {
        Expression::Array(ArrayExpression {
            elements,
            span: self.span(),
        })
    }

    pub fn conditional(&self, test: Expression, consequent: Expression, alternate: Expression) -> Expression {
        Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span: self.span(),
        })
    }

    pub fn paren(&self, expression: Expression) -> Expression {
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            span: self.span(),
        })
    }

    /// Anonymous `function (params) { body }`
    pub fn function_expr(&self, params: Vec<Parameter>, body: Vec<Statement>) -> Expression {
        Expression::Function(FunctionExpression {
            name: None,
            type_params: Vec::new(),
            params,
            return_type: None,
            body: self.block_body(body),
            span: self.span(),
        })
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Unqualified type reference: `i32`
    pub fn type_ref(&self, name: &str) -> TypeAnnotation {
        let reference = TypeReference::simple(self.ident(name));
        TypeAnnotation {
            span: reference.span,
            ty: Type::Reference(reference),
        }
    }

    /// Qualified type reference: `a.b.c`
    pub fn qualified_type(&self, path: &[&str]) -> TypeAnnotation {
        let mut name: Option<TypeName> = None;
        for segment in path.iter().rev() {
            let identifier = self.ident(segment);
            name = Some(TypeName {
                identifier,
                next: name.map(Box::new),
                span: identifier.span,
            });
        }
        let name = name.unwrap_or_else(|| TypeName::simple(self.ident("")));
        let span = self.span();
        TypeAnnotation {
            ty: Type::Reference(TypeReference {
                name,
                type_args: Vec::new(),
                span,
            }),
            span,
        }
    }

    /// Generic type reference: `name<args>`
    pub fn generic_type(&self, name: &str, type_args: Vec<TypeAnnotation>) -> TypeAnnotation {
        let span = self.span();
        TypeAnnotation {
            ty: Type::Reference(TypeReference {
                name: TypeName::simple(self.ident(name)),
                type_args,
                span,
            }),
            span,
        }
    }

    /// Array type: `element[]`
    pub fn array_type(&self, element: TypeAnnotation) -> TypeAnnotation {
        let span = self.span();
        TypeAnnotation {
            ty: Type::Array(ArrayType {
                element_type: Box::new(element),
                span,
            }),
            span,
        }
    }
}

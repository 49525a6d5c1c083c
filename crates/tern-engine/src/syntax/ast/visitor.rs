//! AST visitor pattern for traversing the syntax tree
//!
//! Every node variant has a `visit_*` method whose default implementation
//! calls the matching `walk_*` function, which visits the node's immediate
//! children from left to right. Overriding a method replaces that default:
//! an override that wants the children visited must call the `walk_*`
//! function itself, and one that does not call it stops descent there.
//!
//! # Example
//!
//! ```rust
//! use tern_engine::syntax::ast::*;
//!
//! struct CountIdentifiers {
//!     count: usize,
//! }
//!
//! impl Visitor for CountIdentifiers {
//!     fn visit_identifier(&mut self, _id: &Identifier) {
//!         self.count += 1;
//!     }
//! }
//! ```

use super::*;
use crate::syntax::span::Span;

/// AST visitor trait
pub trait Visitor: Sized {
    /// Single dispatch entry point: routes any node to its `visit_*` method.
    fn visit_node(&mut self, node: Node<'_>) {
        walk_node(self, node);
    }

    // Top-level
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    // Statements
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        walk_variable_decl(self, decl);
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        walk_function_decl(self, decl);
    }

    fn visit_parameter(&mut self, param: &Parameter) {
        walk_parameter(self, param);
    }

    fn visit_type_parameter(&mut self, param: &TypeParameter) {
        walk_type_parameter(self, param);
    }

    fn visit_namespace_decl(&mut self, decl: &NamespaceDecl) {
        walk_namespace_decl(self, decl);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_field_decl(&mut self, decl: &FieldDecl) {
        walk_field_decl(self, decl);
    }

    fn visit_type_alias_decl(&mut self, decl: &TypeAliasDecl) {
        walk_type_alias_decl(self, decl);
    }

    fn visit_import_decl(&mut self, decl: &ImportDecl) {
        walk_import_decl(self, decl);
    }

    fn visit_export_decl(&mut self, decl: &ExportDecl) {
        walk_export_decl(self, decl);
    }

    fn visit_expression_statement(&mut self, stmt: &ExpressionStatement) {
        walk_expression_statement(self, stmt);
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) {
        walk_if_statement(self, stmt);
    }

    fn visit_switch_statement(&mut self, stmt: &SwitchStatement) {
        walk_switch_statement(self, stmt);
    }

    fn visit_switch_case(&mut self, case: &SwitchCase) {
        walk_switch_case(self, case);
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) {
        walk_while_statement(self, stmt);
    }

    fn visit_do_while_statement(&mut self, stmt: &DoWhileStatement) {
        walk_do_while_statement(self, stmt);
    }

    fn visit_for_statement(&mut self, stmt: &ForStatement) {
        walk_for_statement(self, stmt);
    }

    fn visit_for_of_statement(&mut self, stmt: &ForOfStatement) {
        walk_for_of_statement(self, stmt);
    }

    fn visit_break_statement(&mut self, stmt: &BreakStatement) {
        walk_break_statement(self, stmt);
    }

    fn visit_continue_statement(&mut self, stmt: &ContinueStatement) {
        walk_continue_statement(self, stmt);
    }

    fn visit_return_statement(&mut self, stmt: &ReturnStatement) {
        walk_return_statement(self, stmt);
    }

    fn visit_throw_statement(&mut self, stmt: &ThrowStatement) {
        walk_throw_statement(self, stmt);
    }

    fn visit_try_statement(&mut self, stmt: &TryStatement) {
        walk_try_statement(self, stmt);
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) {
        walk_catch_clause(self, clause);
    }

    fn visit_block_statement(&mut self, stmt: &BlockStatement) {
        walk_block_statement(self, stmt);
    }

    fn visit_empty_statement(&mut self, _span: Span) {
        // Leaf node
    }

    // Expressions
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_int_literal(&mut self, _lit: &IntLiteral) {}

    fn visit_float_literal(&mut self, _lit: &FloatLiteral) {}

    fn visit_string_literal(&mut self, _lit: &StringLiteral) {}

    fn visit_template_literal(&mut self, lit: &TemplateLiteral) {
        walk_template_literal(self, lit);
    }

    fn visit_boolean_literal(&mut self, _lit: &BooleanLiteral) {}

    fn visit_null_literal(&mut self, _span: Span) {}

    fn visit_this(&mut self, _span: Span) {}

    fn visit_super(&mut self, _span: Span) {}

    fn visit_identifier(&mut self, _id: &Identifier) {
        // Leaf node - no traversal needed
    }

    fn visit_array_expression(&mut self, expr: &ArrayExpression) {
        walk_array_expression(self, expr);
    }

    fn visit_object_expression(&mut self, expr: &ObjectExpression) {
        walk_object_expression(self, expr);
    }

    fn visit_property(&mut self, prop: &Property) {
        walk_property(self, prop);
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpression) {
        walk_unary_expression(self, expr);
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression) {
        walk_binary_expression(self, expr);
    }

    fn visit_logical_expression(&mut self, expr: &LogicalExpression) {
        walk_logical_expression(self, expr);
    }

    fn visit_assignment_expression(&mut self, expr: &AssignmentExpression) {
        walk_assignment_expression(self, expr);
    }

    fn visit_conditional_expression(&mut self, expr: &ConditionalExpression) {
        walk_conditional_expression(self, expr);
    }

    fn visit_call_expression(&mut self, expr: &CallExpression) {
        walk_call_expression(self, expr);
    }

    fn visit_member_expression(&mut self, expr: &MemberExpression) {
        walk_member_expression(self, expr);
    }

    fn visit_index_expression(&mut self, expr: &IndexExpression) {
        walk_index_expression(self, expr);
    }

    fn visit_new_expression(&mut self, expr: &NewExpression) {
        walk_new_expression(self, expr);
    }

    fn visit_function_expression(&mut self, func: &FunctionExpression) {
        walk_function_expression(self, func);
    }

    fn visit_parenthesized_expression(&mut self, expr: &ParenthesizedExpression) {
        walk_parenthesized_expression(self, expr);
    }

    fn visit_comma_expression(&mut self, expr: &CommaExpression) {
        walk_comma_expression(self, expr);
    }

    fn visit_instanceof_expression(&mut self, expr: &InstanceOfExpression) {
        walk_instanceof_expression(self, expr);
    }

    fn visit_type_cast_expression(&mut self, expr: &TypeCastExpression) {
        walk_type_cast_expression(self, expr);
    }

    // Types
    fn visit_type_annotation(&mut self, ty: &TypeAnnotation) {
        walk_type_annotation(self, ty);
    }

    fn visit_type_reference(&mut self, ty: &TypeReference) {
        walk_type_reference(self, ty);
    }

    fn visit_type_name(&mut self, name: &TypeName) {
        walk_type_name(self, name);
    }

    fn visit_function_type(&mut self, func: &FunctionType) {
        walk_function_type(self, func);
    }

    fn visit_array_type(&mut self, arr: &ArrayType) {
        walk_array_type(self, arr);
    }

    fn visit_union_type(&mut self, union: &UnionType) {
        walk_union_type(self, union);
    }

    // Patterns
    fn visit_pattern(&mut self, pattern: &Pattern) {
        walk_pattern(self, pattern);
    }

    fn visit_array_pattern(&mut self, pattern: &ArrayPattern) {
        walk_array_pattern(self, pattern);
    }

    fn visit_object_pattern(&mut self, pattern: &ObjectPattern) {
        walk_object_pattern(self, pattern);
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Route a type-erased node to the visitor method for its kind.
pub fn walk_node<V: Visitor>(visitor: &mut V, node: Node<'_>) {
    match node {
        Node::Module(n) => visitor.visit_module(n),
        Node::VariableDecl(n) => visitor.visit_variable_decl(n),
        Node::FunctionDecl(n) => visitor.visit_function_decl(n),
        Node::Parameter(n) => visitor.visit_parameter(n),
        Node::TypeParameter(n) => visitor.visit_type_parameter(n),
        Node::NamespaceDecl(n) => visitor.visit_namespace_decl(n),
        Node::ClassDecl(n) => visitor.visit_class_decl(n),
        Node::FieldDecl(n) => visitor.visit_field_decl(n),
        Node::TypeAliasDecl(n) => visitor.visit_type_alias_decl(n),
        Node::ImportDecl(n) => visitor.visit_import_decl(n),
        Node::ExportDecl(n) => visitor.visit_export_decl(n),
        Node::ExpressionStatement(n) => visitor.visit_expression_statement(n),
        Node::If(n) => visitor.visit_if_statement(n),
        Node::Switch(n) => visitor.visit_switch_statement(n),
        Node::SwitchCase(n) => visitor.visit_switch_case(n),
        Node::While(n) => visitor.visit_while_statement(n),
        Node::DoWhile(n) => visitor.visit_do_while_statement(n),
        Node::For(n) => visitor.visit_for_statement(n),
        Node::ForOf(n) => visitor.visit_for_of_statement(n),
        Node::Break(n) => visitor.visit_break_statement(n),
        Node::Continue(n) => visitor.visit_continue_statement(n),
        Node::Return(n) => visitor.visit_return_statement(n),
        Node::Throw(n) => visitor.visit_throw_statement(n),
        Node::Try(n) => visitor.visit_try_statement(n),
        Node::CatchClause(n) => visitor.visit_catch_clause(n),
        Node::Block(n) => visitor.visit_block_statement(n),
        Node::Empty(span) => visitor.visit_empty_statement(span),
        Node::IntLiteral(n) => visitor.visit_int_literal(n),
        Node::FloatLiteral(n) => visitor.visit_float_literal(n),
        Node::StringLiteral(n) => visitor.visit_string_literal(n),
        Node::TemplateLiteral(n) => visitor.visit_template_literal(n),
        Node::BooleanLiteral(n) => visitor.visit_boolean_literal(n),
        Node::NullLiteral(span) => visitor.visit_null_literal(span),
        Node::This(span) => visitor.visit_this(span),
        Node::Super(span) => visitor.visit_super(span),
        Node::Identifier(n) => visitor.visit_identifier(n),
        Node::Array(n) => visitor.visit_array_expression(n),
        Node::Object(n) => visitor.visit_object_expression(n),
        Node::Property(n) => visitor.visit_property(n),
        Node::Unary(n) => visitor.visit_unary_expression(n),
        Node::Binary(n) => visitor.visit_binary_expression(n),
        Node::Logical(n) => visitor.visit_logical_expression(n),
        Node::Assignment(n) => visitor.visit_assignment_expression(n),
        Node::Conditional(n) => visitor.visit_conditional_expression(n),
        Node::Call(n) => visitor.visit_call_expression(n),
        Node::Member(n) => visitor.visit_member_expression(n),
        Node::Index(n) => visitor.visit_index_expression(n),
        Node::New(n) => visitor.visit_new_expression(n),
        Node::FunctionExpression(n) => visitor.visit_function_expression(n),
        Node::Parenthesized(n) => visitor.visit_parenthesized_expression(n),
        Node::Comma(n) => visitor.visit_comma_expression(n),
        Node::InstanceOf(n) => visitor.visit_instanceof_expression(n),
        Node::TypeCast(n) => visitor.visit_type_cast_expression(n),
        Node::TypeAnnotation(n) => visitor.visit_type_annotation(n),
        Node::TypeReference(n) => visitor.visit_type_reference(n),
        Node::TypeName(n) => visitor.visit_type_name(n),
        Node::FunctionType(n) => visitor.visit_function_type(n),
        Node::ArrayType(n) => visitor.visit_array_type(n),
        Node::UnionType(n) => visitor.visit_union_type(n),
        Node::ArrayPattern(n) => visitor.visit_array_pattern(n),
        Node::ObjectPattern(n) => visitor.visit_object_pattern(n),
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_module<V: Visitor>(visitor: &mut V, module: &Module) {
    for stmt in &module.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        Statement::FunctionDecl(decl) => visitor.visit_function_decl(decl),
        Statement::NamespaceDecl(decl) => visitor.visit_namespace_decl(decl),
        Statement::ClassDecl(decl) => visitor.visit_class_decl(decl),
        Statement::TypeAliasDecl(decl) => visitor.visit_type_alias_decl(decl),
        Statement::ImportDecl(decl) => visitor.visit_import_decl(decl),
        Statement::ExportDecl(decl) => visitor.visit_export_decl(decl),
        Statement::Expression(stmt) => visitor.visit_expression_statement(stmt),
        Statement::If(stmt) => visitor.visit_if_statement(stmt),
        Statement::Switch(stmt) => visitor.visit_switch_statement(stmt),
        Statement::While(stmt) => visitor.visit_while_statement(stmt),
        Statement::DoWhile(stmt) => visitor.visit_do_while_statement(stmt),
        Statement::For(stmt) => visitor.visit_for_statement(stmt),
        Statement::ForOf(stmt) => visitor.visit_for_of_statement(stmt),
        Statement::Break(stmt) => visitor.visit_break_statement(stmt),
        Statement::Continue(stmt) => visitor.visit_continue_statement(stmt),
        Statement::Return(stmt) => visitor.visit_return_statement(stmt),
        Statement::Throw(stmt) => visitor.visit_throw_statement(stmt),
        Statement::Try(stmt) => visitor.visit_try_statement(stmt),
        Statement::Block(stmt) => visitor.visit_block_statement(stmt),
        Statement::Empty(span) => visitor.visit_empty_statement(*span),
    }
}

pub fn walk_variable_decl<V: Visitor>(visitor: &mut V, decl: &VariableDecl) {
    visitor.visit_pattern(&decl.pattern);
    if let Some(type_ann) = &decl.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_function_decl<V: Visitor>(visitor: &mut V, decl: &FunctionDecl) {
    visitor.visit_identifier(&decl.name);
    for param in &decl.type_params {
        visitor.visit_type_parameter(param);
    }
    for param in &decl.params {
        visitor.visit_parameter(param);
    }
    if let Some(return_type) = &decl.return_type {
        visitor.visit_type_annotation(return_type);
    }
    visitor.visit_block_statement(&decl.body);
}

pub fn walk_parameter<V: Visitor>(visitor: &mut V, param: &Parameter) {
    visitor.visit_pattern(&param.pattern);
    if let Some(type_ann) = &param.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(default) = &param.default_value {
        visitor.visit_expression(default);
    }
}

pub fn walk_type_parameter<V: Visitor>(visitor: &mut V, param: &TypeParameter) {
    visitor.visit_identifier(&param.name);
    if let Some(constraint) = &param.constraint {
        visitor.visit_type_annotation(constraint);
    }
    if let Some(default) = &param.default {
        visitor.visit_type_annotation(default);
    }
}

pub fn walk_namespace_decl<V: Visitor>(visitor: &mut V, decl: &NamespaceDecl) {
    visitor.visit_identifier(&decl.name);
    for member in &decl.members {
        visitor.visit_statement(member);
    }
}

pub fn walk_class_decl<V: Visitor>(visitor: &mut V, decl: &ClassDecl) {
    visitor.visit_identifier(&decl.name);
    for param in &decl.type_params {
        visitor.visit_type_parameter(param);
    }
    if let Some(extends) = &decl.extends {
        visitor.visit_type_annotation(extends);
    }
    for member in &decl.members {
        match member {
            ClassMember::Field(field) => visitor.visit_field_decl(field),
            ClassMember::Method(method) => visitor.visit_function_decl(method),
        }
    }
}

pub fn walk_field_decl<V: Visitor>(visitor: &mut V, decl: &FieldDecl) {
    visitor.visit_identifier(&decl.name);
    if let Some(type_ann) = &decl.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_type_alias_decl<V: Visitor>(visitor: &mut V, decl: &TypeAliasDecl) {
    visitor.visit_identifier(&decl.name);
    for param in &decl.type_params {
        visitor.visit_type_parameter(param);
    }
    visitor.visit_type_annotation(&decl.type_annotation);
}

pub fn walk_import_decl<V: Visitor>(visitor: &mut V, decl: &ImportDecl) {
    for spec in &decl.specifiers {
        visitor.visit_identifier(&spec.name);
        if let Some(alias) = &spec.alias {
            visitor.visit_identifier(alias);
        }
    }
    visitor.visit_string_literal(&decl.source);
}

pub fn walk_export_decl<V: Visitor>(visitor: &mut V, decl: &ExportDecl) {
    visitor.visit_statement(&decl.declaration);
}

pub fn walk_expression_statement<V: Visitor>(visitor: &mut V, stmt: &ExpressionStatement) {
    visitor.visit_expression(&stmt.expression);
}

pub fn walk_if_statement<V: Visitor>(visitor: &mut V, stmt: &IfStatement) {
    visitor.visit_expression(&stmt.condition);
    visitor.visit_statement(&stmt.then_branch);
    if let Some(else_branch) = &stmt.else_branch {
        visitor.visit_statement(else_branch);
    }
}

pub fn walk_switch_statement<V: Visitor>(visitor: &mut V, stmt: &SwitchStatement) {
    visitor.visit_expression(&stmt.discriminant);
    for case in &stmt.cases {
        visitor.visit_switch_case(case);
    }
}

pub fn walk_switch_case<V: Visitor>(visitor: &mut V, case: &SwitchCase) {
    if let Some(test) = &case.test {
        visitor.visit_expression(test);
    }
    for consequent in &case.consequent {
        visitor.visit_statement(consequent);
    }
}

pub fn walk_while_statement<V: Visitor>(visitor: &mut V, stmt: &WhileStatement) {
    visitor.visit_expression(&stmt.condition);
    visitor.visit_statement(&stmt.body);
}

pub fn walk_do_while_statement<V: Visitor>(visitor: &mut V, stmt: &DoWhileStatement) {
    visitor.visit_statement(&stmt.body);
    visitor.visit_expression(&stmt.condition);
}

pub fn walk_for_statement<V: Visitor>(visitor: &mut V, stmt: &ForStatement) {
    if let Some(init) = &stmt.init {
        match init {
            ForInit::VariableDecl(decl) => visitor.visit_variable_decl(decl),
            ForInit::Expression(expr) => visitor.visit_expression(expr),
        }
    }
    if let Some(test) = &stmt.test {
        visitor.visit_expression(test);
    }
    if let Some(update) = &stmt.update {
        visitor.visit_expression(update);
    }
    visitor.visit_statement(&stmt.body);
}

pub fn walk_for_of_statement<V: Visitor>(visitor: &mut V, stmt: &ForOfStatement) {
    visitor.visit_variable_decl(&stmt.variable);
    visitor.visit_expression(&stmt.iterable);
    visitor.visit_statement(&stmt.body);
}

pub fn walk_break_statement<V: Visitor>(visitor: &mut V, stmt: &BreakStatement) {
    if let Some(label) = &stmt.label {
        visitor.visit_identifier(label);
    }
}

pub fn walk_continue_statement<V: Visitor>(visitor: &mut V, stmt: &ContinueStatement) {
    if let Some(label) = &stmt.label {
        visitor.visit_identifier(label);
    }
}

pub fn walk_return_statement<V: Visitor>(visitor: &mut V, stmt: &ReturnStatement) {
    if let Some(value) = &stmt.value {
        visitor.visit_expression(value);
    }
}

pub fn walk_throw_statement<V: Visitor>(visitor: &mut V, stmt: &ThrowStatement) {
    visitor.visit_expression(&stmt.value);
}

pub fn walk_try_statement<V: Visitor>(visitor: &mut V, stmt: &TryStatement) {
    visitor.visit_block_statement(&stmt.body);
    if let Some(catch) = &stmt.catch_clause {
        visitor.visit_catch_clause(catch);
    }
    if let Some(finally) = &stmt.finally_clause {
        visitor.visit_block_statement(finally);
    }
}

pub fn walk_catch_clause<V: Visitor>(visitor: &mut V, clause: &CatchClause) {
    if let Some(param) = &clause.param {
        visitor.visit_pattern(param);
    }
    visitor.visit_block_statement(&clause.body);
}

pub fn walk_block_statement<V: Visitor>(visitor: &mut V, stmt: &BlockStatement) {
    for statement in &stmt.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::IntLiteral(lit) => visitor.visit_int_literal(lit),
        Expression::FloatLiteral(lit) => visitor.visit_float_literal(lit),
        Expression::StringLiteral(lit) => visitor.visit_string_literal(lit),
        Expression::TemplateLiteral(lit) => visitor.visit_template_literal(lit),
        Expression::BooleanLiteral(lit) => visitor.visit_boolean_literal(lit),
        Expression::NullLiteral(span) => visitor.visit_null_literal(*span),
        Expression::This(span) => visitor.visit_this(*span),
        Expression::Super(span) => visitor.visit_super(*span),
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Array(arr) => visitor.visit_array_expression(arr),
        Expression::Object(obj) => visitor.visit_object_expression(obj),
        Expression::Unary(unary) => visitor.visit_unary_expression(unary),
        Expression::Binary(binary) => visitor.visit_binary_expression(binary),
        Expression::Logical(logical) => visitor.visit_logical_expression(logical),
        Expression::Assignment(assign) => visitor.visit_assignment_expression(assign),
        Expression::Conditional(cond) => visitor.visit_conditional_expression(cond),
        Expression::Call(call) => visitor.visit_call_expression(call),
        Expression::Member(member) => visitor.visit_member_expression(member),
        Expression::Index(index) => visitor.visit_index_expression(index),
        Expression::New(new_expr) => visitor.visit_new_expression(new_expr),
        Expression::Function(func) => visitor.visit_function_expression(func),
        Expression::Parenthesized(paren) => visitor.visit_parenthesized_expression(paren),
        Expression::Comma(comma) => visitor.visit_comma_expression(comma),
        Expression::InstanceOf(inst) => visitor.visit_instanceof_expression(inst),
        Expression::TypeCast(cast) => visitor.visit_type_cast_expression(cast),
    }
}

pub fn walk_template_literal<V: Visitor>(visitor: &mut V, lit: &TemplateLiteral) {
    if let Some(tag) = &lit.tag {
        visitor.visit_expression(tag);
    }
    for part in &lit.parts {
        if let TemplatePart::Expression(expr) = part {
            visitor.visit_expression(expr);
        }
    }
}

pub fn walk_array_expression<V: Visitor>(visitor: &mut V, expr: &ArrayExpression) {
    for elem in &expr.elements {
        visitor.visit_expression(elem);
    }
}

pub fn walk_object_expression<V: Visitor>(visitor: &mut V, expr: &ObjectExpression) {
    for prop in &expr.properties {
        visitor.visit_property(prop);
    }
}

pub fn walk_property<V: Visitor>(visitor: &mut V, prop: &Property) {
    match &prop.key {
        PropertyKey::Identifier(id) => visitor.visit_identifier(id),
        PropertyKey::StringLiteral(lit) => visitor.visit_string_literal(lit),
        PropertyKey::Computed(expr) => visitor.visit_expression(expr),
    }
    visitor.visit_expression(&prop.value);
}

pub fn walk_unary_expression<V: Visitor>(visitor: &mut V, expr: &UnaryExpression) {
    visitor.visit_expression(&expr.operand);
}

pub fn walk_binary_expression<V: Visitor>(visitor: &mut V, expr: &BinaryExpression) {
    visitor.visit_expression(&expr.left);
    visitor.visit_expression(&expr.right);
}

pub fn walk_logical_expression<V: Visitor>(visitor: &mut V, expr: &LogicalExpression) {
    visitor.visit_expression(&expr.left);
    visitor.visit_expression(&expr.right);
}

pub fn walk_assignment_expression<V: Visitor>(visitor: &mut V, expr: &AssignmentExpression) {
    visitor.visit_expression(&expr.left);
    visitor.visit_expression(&expr.right);
}

pub fn walk_conditional_expression<V: Visitor>(visitor: &mut V, expr: &ConditionalExpression) {
    visitor.visit_expression(&expr.test);
    visitor.visit_expression(&expr.consequent);
    visitor.visit_expression(&expr.alternate);
}

pub fn walk_call_expression<V: Visitor>(visitor: &mut V, expr: &CallExpression) {
    visitor.visit_expression(&expr.callee);
    for arg in &expr.type_args {
        visitor.visit_type_annotation(arg);
    }
    for arg in &expr.arguments {
        visitor.visit_expression(arg);
    }
}

pub fn walk_member_expression<V: Visitor>(visitor: &mut V, expr: &MemberExpression) {
    visitor.visit_expression(&expr.object);
    visitor.visit_identifier(&expr.property);
}

pub fn walk_index_expression<V: Visitor>(visitor: &mut V, expr: &IndexExpression) {
    visitor.visit_expression(&expr.object);
    visitor.visit_expression(&expr.index);
}

pub fn walk_new_expression<V: Visitor>(visitor: &mut V, expr: &NewExpression) {
    visitor.visit_expression(&expr.callee);
    for arg in &expr.type_args {
        visitor.visit_type_annotation(arg);
    }
    for arg in &expr.arguments {
        visitor.visit_expression(arg);
    }
}

pub fn walk_function_expression<V: Visitor>(visitor: &mut V, func: &FunctionExpression) {
    if let Some(name) = &func.name {
        visitor.visit_identifier(name);
    }
    for param in &func.type_params {
        visitor.visit_type_parameter(param);
    }
    for param in &func.params {
        visitor.visit_parameter(param);
    }
    if let Some(return_type) = &func.return_type {
        visitor.visit_type_annotation(return_type);
    }
    visitor.visit_block_statement(&func.body);
}

pub fn walk_parenthesized_expression<V: Visitor>(visitor: &mut V, expr: &ParenthesizedExpression) {
    visitor.visit_expression(&expr.expression);
}

pub fn walk_comma_expression<V: Visitor>(visitor: &mut V, expr: &CommaExpression) {
    for e in &expr.expressions {
        visitor.visit_expression(e);
    }
}

pub fn walk_instanceof_expression<V: Visitor>(visitor: &mut V, expr: &InstanceOfExpression) {
    visitor.visit_expression(&expr.object);
    visitor.visit_type_annotation(&expr.type_name);
}

pub fn walk_type_cast_expression<V: Visitor>(visitor: &mut V, expr: &TypeCastExpression) {
    visitor.visit_expression(&expr.object);
    visitor.visit_type_annotation(&expr.target_type);
}

pub fn walk_type_annotation<V: Visitor>(visitor: &mut V, ty: &TypeAnnotation) {
    match &ty.ty {
        Type::Reference(type_ref) => visitor.visit_type_reference(type_ref),
        Type::Function(func) => visitor.visit_function_type(func),
        Type::Array(arr) => visitor.visit_array_type(arr),
        Type::Union(union) => visitor.visit_union_type(union),
    }
}

pub fn walk_type_reference<V: Visitor>(visitor: &mut V, ty: &TypeReference) {
    visitor.visit_type_name(&ty.name);
    for arg in &ty.type_args {
        visitor.visit_type_annotation(arg);
    }
}

pub fn walk_type_name<V: Visitor>(visitor: &mut V, name: &TypeName) {
    visitor.visit_identifier(&name.identifier);
    if let Some(next) = &name.next {
        visitor.visit_type_name(next);
    }
}

pub fn walk_function_type<V: Visitor>(visitor: &mut V, func: &FunctionType) {
    for param in &func.params {
        if let Some(name) = &param.name {
            visitor.visit_identifier(name);
        }
        visitor.visit_type_annotation(&param.ty);
    }
    visitor.visit_type_annotation(&func.return_type);
}

pub fn walk_array_type<V: Visitor>(visitor: &mut V, arr: &ArrayType) {
    visitor.visit_type_annotation(&arr.element_type);
}

pub fn walk_union_type<V: Visitor>(visitor: &mut V, union: &UnionType) {
    for ty in &union.types {
        visitor.visit_type_annotation(ty);
    }
}

pub fn walk_pattern<V: Visitor>(visitor: &mut V, pattern: &Pattern) {
    match pattern {
        Pattern::Identifier(id) => visitor.visit_identifier(id),
        Pattern::Array(arr) => visitor.visit_array_pattern(arr),
        Pattern::Object(obj) => visitor.visit_object_pattern(obj),
    }
}

pub fn walk_array_pattern<V: Visitor>(visitor: &mut V, pattern: &ArrayPattern) {
    for elem in pattern.elements.iter().flatten() {
        visitor.visit_pattern(elem);
    }
}

pub fn walk_object_pattern<V: Visitor>(visitor: &mut V, pattern: &ObjectPattern) {
    for prop in &pattern.properties {
        visitor.visit_identifier(&prop.key);
        visitor.visit_pattern(&prop.value);
    }
}

//! Statement Lowering
//!
//! Declarations register a `VarDecl` in the current block before anything
//! they contain is lowered. Control flow statements allocate their body
//! blocks as children of the enclosing block and append the `If`/`While`
//! statement before the bodies are filled in.

use super::Lowerer;
use crate::compiler::hir::{BlockId, DeclKind, DeclRef, Expr, Stmt};
use crate::syntax::ast::{
    BlockStatement, ExpressionStatement, FunctionDecl, IfStatement, NamespaceDecl, NodeKind,
    Parameter, ParameterKind, Statement, TypeParameter, VariableDecl, Visitor, WhileStatement,
};

impl<'a> Lowerer<'a> {
    /// `let x: T = init;`
    ///
    /// The declaration is visible to its own initializer.
    pub(super) fn lower_variable_decl(&mut self, decl: &VariableDecl) {
        let Some(name) = decl.pattern.as_identifier() else {
            self.unsupported(decl.pattern.kind(), decl.pattern.span());
            return;
        };

        let ty = self.lower_optional_type(decl.type_annotation.as_ref());
        let block = self.current_block();
        let interner = self.interner;
        let var = self
            .hir
            .add_decl(block, interner.resolve(name.name), ty, DeclKind::Local, decl.span);

        if let Some(init) = &decl.initializer {
            if let Ok(value) = self.lower_expr(init) {
                self.hir.add_stmt(
                    block,
                    Stmt::Assign {
                        target: DeclRef::new(var, name.span),
                        value,
                        span: decl.span,
                    },
                );
            }
        }
    }

    /// `function f(params) { body }` becomes `f <- (FUNC body)`
    pub(super) fn lower_function_decl(&mut self, decl: &FunctionDecl) {
        let block = self.current_block();
        let interner = self.interner;
        let name = interner.resolve(decl.name.name);

        let var = self
            .hir
            .add_decl(block, name, None, DeclKind::Function, decl.name.span);
        self.link_hoisted(block, name, var);

        let body = self.hir.create_child(block, decl.body.span);
        self.hir.add_stmt(
            block,
            Stmt::Assign {
                target: DeclRef::new(var, decl.name.span),
                value: Expr::Func {
                    body,
                    span: decl.span,
                },
                span: decl.span,
            },
        );

        self.lower_function_body(body, &decl.type_params, &decl.params, &decl.body);
    }

    /// Fill a function's body block: parameters first, then statements.
    ///
    /// Type parameters are reported but do not stop the body from lowering.
    /// Return type annotations are not lowered.
    pub(super) fn lower_function_body(
        &mut self,
        body: BlockId,
        type_params: &[TypeParameter],
        params: &[Parameter],
        statements: &BlockStatement,
    ) {
        if let Some(first) = type_params.first() {
            let span = type_params
                .iter()
                .fold(first.span, |span, param| span.merge(&param.span));
            self.unsupported(NodeKind::TypeParameter, span);
        }

        self.in_block(body, |this| {
            for param in params {
                this.lower_parameter(body, param);
            }
            this.lower_statements(&statements.statements);
        });
    }

    fn lower_parameter(&mut self, body: BlockId, param: &Parameter) {
        match param.kind {
            ParameterKind::Positional => {}
            ParameterKind::Optional => {
                self.unsupported_named("optional parameter", param.span);
                return;
            }
            ParameterKind::Rest => {
                self.unsupported_named("rest parameter", param.span);
                return;
            }
        }

        if param.default_value.is_some() {
            self.unsupported_named("default parameter value", param.span);
            return;
        }

        let Some(name) = param.pattern.as_identifier() else {
            self.unsupported(param.pattern.kind(), param.pattern.span());
            return;
        };

        let ty = self.lower_optional_type(param.type_annotation.as_ref());
        let interner = self.interner;
        self.hir
            .add_decl(body, interner.resolve(name.name), ty, DeclKind::Param, param.span);
    }

    /// Namespace members lower into their own block
    pub(super) fn lower_namespace_decl(&mut self, decl: &NamespaceDecl) {
        let parent = self.current_block();
        let block = self.hir.create_child(parent, decl.span);
        self.in_block(block, |this| this.lower_statements(&decl.members));
    }

    /// The value is discarded with `Drop` unless the expression failed
    pub(super) fn lower_expression_statement(&mut self, stmt: &ExpressionStatement) {
        if let Ok(value) = self.lower_expr(&stmt.expression) {
            let block = self.current_block();
            self.hir.add_stmt(
                block,
                Stmt::Drop {
                    value,
                    span: stmt.span,
                },
            );
        }
    }

    /// A failed condition abandons the whole statement, branches included.
    pub(super) fn lower_if(&mut self, stmt: &IfStatement) {
        let Ok(cond) = self.lower_expr(&stmt.condition) else {
            return;
        };

        let enclosing = self.current_block();
        let then_block = self.hir.create_child(enclosing, stmt.then_branch.span());
        let else_block = stmt
            .else_branch
            .as_ref()
            .map(|branch| (self.hir.create_child(enclosing, branch.span()), branch));

        self.hir.add_stmt(
            enclosing,
            Stmt::If {
                cond,
                then_block,
                else_block: else_block.as_ref().map(|(block, _)| *block),
                span: stmt.span,
            },
        );

        self.lower_branch(then_block, &stmt.then_branch);
        if let Some((block, branch)) = else_block {
            self.lower_branch(block, branch);
        }
    }

    pub(super) fn lower_while(&mut self, stmt: &WhileStatement) {
        let Ok(cond) = self.lower_expr(&stmt.condition) else {
            return;
        };

        let enclosing = self.current_block();
        let body = self.hir.create_child(enclosing, stmt.body.span());
        self.hir.add_stmt(
            enclosing,
            Stmt::While {
                cond,
                body,
                span: stmt.span,
            },
        );

        self.lower_branch(body, &stmt.body);
    }

    /// A brace group used as a branch body shares the branch's block;
    /// any other statement is lowered into it directly.
    fn lower_branch(&mut self, block: BlockId, branch: &Statement) {
        self.in_block(block, |this| match branch {
            Statement::Block(group) => this.lower_statements(&group.statements),
            other => this.visit_statement(other),
        });
    }

    /// A free-standing `{ ... }` opens a scope of its own
    pub(super) fn lower_block_statement(&mut self, stmt: &BlockStatement) {
        let parent = self.current_block();
        let block = self.hir.create_child(parent, stmt.span);
        self.in_block(block, |this| this.lower_statements(&stmt.statements));
    }
}

//! Expression Lowering
//!
//! Every expression lowers to an [`Expr`] or fails with [`Reported`] once its
//! diagnostic is out. Subexpressions are lowered left to right and the first
//! failure ends the whole expression.

use super::Lowerer;
use crate::compiler::hir::{BinaryOp, DeclRef, Expr, Stmt};
use crate::diagnostics::{LowerError, LowerResult, Reported};
use crate::syntax::ast::{
    AssignmentExpression, AssignmentOperator, BinaryExpression, BinaryOperator, CallExpression,
    Expression, FunctionExpression, Identifier,
};

impl<'a> Lowerer<'a> {
    pub(super) fn lower_expr(&mut self, expr: &Expression) -> LowerResult<Expr> {
        match expr {
            Expression::IntLiteral(lit) => Ok(Expr::Integer {
                value: lit.value,
                span: lit.span,
            }),
            Expression::FloatLiteral(lit) => Ok(Expr::Float {
                value: lit.value,
                span: lit.span,
            }),
            Expression::Identifier(id) => self.resolve_name(id).map(Expr::Ref),
            Expression::Binary(binary) => self.lower_binary(binary),
            Expression::Assignment(assign) => self.lower_assignment(assign),
            Expression::Call(call) => self.lower_call(call),
            Expression::Function(func) => self.lower_function_expr(func),
            // Grouping has no node of its own
            Expression::Parenthesized(paren) => self.lower_expr(&paren.expression),
            Expression::StringLiteral(_)
            | Expression::TemplateLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::NullLiteral(_)
            | Expression::This(_)
            | Expression::Super(_)
            | Expression::Array(_)
            | Expression::Object(_)
            | Expression::Unary(_)
            | Expression::Logical(_)
            | Expression::Conditional(_)
            | Expression::Member(_)
            | Expression::Index(_)
            | Expression::New(_)
            | Expression::Comma(_)
            | Expression::InstanceOf(_)
            | Expression::TypeCast(_) => Err(self.unsupported(expr.kind(), expr.span())),
        }
    }

    /// Search the open blocks from the innermost outwards
    fn resolve_name(&mut self, id: &Identifier) -> LowerResult<DeclRef> {
        let interner = self.interner;
        let name = interner.resolve(id.name);
        let block = self.current_block();
        match self.hir.lookup(block, name) {
            Some(decl) => Ok(DeclRef::new(decl, id.span)),
            None => Err(self.report(LowerError::name_not_found(name, id.span))),
        }
    }

    fn lower_binary(&mut self, binary: &BinaryExpression) -> LowerResult<Expr> {
        let op = match binary.operator {
            BinaryOperator::Add => BinaryOp::Add,
            BinaryOperator::Subtract => BinaryOp::Subtract,
            BinaryOperator::Multiply => BinaryOp::Multiply,
            BinaryOperator::Divide => BinaryOp::Divide,
            // Loose and strict equality are not distinguished
            BinaryOperator::Equal | BinaryOperator::StrictEqual => BinaryOp::Equal,
            BinaryOperator::Modulo
            | BinaryOperator::NotEqual
            | BinaryOperator::StrictNotEqual
            | BinaryOperator::LessThan
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterEqual
            | BinaryOperator::BitwiseAnd
            | BinaryOperator::BitwiseOr
            | BinaryOperator::BitwiseXor
            | BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::UnsignedRightShift => {
                let construct = format!("'{}' operator", binary.operator.symbol());
                return Err(self.unsupported_named(construct, binary.span));
            }
        };

        let lhs = self.lower_expr(&binary.left)?;
        let rhs = self.lower_expr(&binary.right)?;
        Ok(Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span: binary.span,
        })
    }

    /// `a = b` as an expression.
    ///
    /// ```text
    /// VAR DECL ~tmpN
    /// ref(~tmpN) <- b
    /// ref(a) <- ref(~tmpN)
    /// ```
    ///
    /// and the expression's value is `ref(~tmpN)`. The temporary is allocated
    /// before `b` is lowered, so nested assignments get higher numbers.
    fn lower_assignment(&mut self, assign: &AssignmentExpression) -> LowerResult<Expr> {
        if assign.operator != AssignmentOperator::Assign {
            let construct = format!("'{}' assignment", assign.operator.symbol());
            return Err(self.unsupported_named(construct, assign.span));
        }

        let block = self.current_block();
        let temp = self.fresh_temp(block, assign.span);

        let value = self.lower_expr(&assign.right)?;
        self.hir.add_stmt(
            block,
            Stmt::Assign {
                target: DeclRef::new(temp, assign.span),
                value,
                span: assign.span,
            },
        );

        let target = match self.lower_expr(&assign.left)? {
            Expr::Ref(target) => target,
            _ => return Err(self.invalid_assignment_target(&assign.left)),
        };
        self.hir.add_stmt(
            block,
            Stmt::Assign {
                target,
                value: Expr::Ref(DeclRef::new(temp, assign.span)),
                span: assign.span,
            },
        );

        Ok(Expr::Ref(DeclRef::new(temp, assign.span)))
    }

    fn invalid_assignment_target(&mut self, target: &Expression) -> Reported {
        let construct = format!("assignment to {}", target.kind().description());
        self.unsupported_named(construct, target.span())
    }

    /// Callee first, then arguments in source order
    fn lower_call(&mut self, call: &CallExpression) -> LowerResult<Expr> {
        if let Some(first) = call.type_args.first() {
            let span = call
                .type_args
                .iter()
                .fold(first.span, |span, arg| span.merge(&arg.span));
            return Err(self.unsupported_named("explicit type arguments", span));
        }

        let callee = self.lower_expr(&call.callee)?;
        let mut args = Vec::with_capacity(call.arguments.len());
        for arg in &call.arguments {
            args.push(self.lower_expr(arg)?);
        }

        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
            span: call.span,
        })
    }

    /// Anonymous function value; a name on the expression is not bound.
    fn lower_function_expr(&mut self, func: &FunctionExpression) -> LowerResult<Expr> {
        let parent = self.current_block();
        let body = self.hir.create_child(parent, func.body.span);
        self.lower_function_body(body, &func.type_params, &func.params, &func.body);
        Ok(Expr::Func {
            body,
            span: func.span,
        })
    }
}

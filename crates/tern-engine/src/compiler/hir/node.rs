//! HIR statements and expressions

use super::block::BlockId;
use super::decl::DeclRef;
use crate::syntax::Span;

/// Statement appended to a block
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// target <- value
    Assign {
        target: DeclRef,
        value: Expr,
        span: Span,
    },

    /// Evaluate for side effects and discard the result
    Drop { value: Expr, span: Span },

    /// Both branch blocks are children of the block holding this statement
    If {
        cond: Expr,
        then_block: BlockId,
        else_block: Option<BlockId>,
        span: Span,
    },

    While {
        cond: Expr,
        body: BlockId,
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign { span, .. }
            | Stmt::Drop { span, .. }
            | Stmt::If { span, .. }
            | Stmt::While { span, .. } => *span,
        }
    }
}

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ref(DeclRef),
    Integer { value: i64, span: Span },
    Float { value: f64, span: Span },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
    /// Function value; `body` is the function's own block
    Func { body: BlockId, span: Span },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Ref(r) => r.span,
            Expr::Integer { span, .. }
            | Expr::Float { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Func { span, .. }
            | Expr::Call { span, .. } => *span,
        }
    }

    pub fn as_decl_ref(&self) -> Option<DeclRef> {
        match self {
            Expr::Ref(r) => Some(*r),
            _ => None,
        }
    }
}

/// Binary operators known to the HIR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Covers both `==` and `===`
    Equal,
}

impl BinaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "sub",
            BinaryOp::Multiply => "mul",
            BinaryOp::Divide => "div",
            BinaryOp::Equal => "equal",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

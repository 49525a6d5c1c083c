//! Pretty-printing for HIR
//!
//! Produces a human-readable tree dump for debugging and tests. Each block
//! prints its header, then its declarations, then its statements, then its
//! nested blocks, indented two spaces per level:
//!
//! ```text
//! BLOCK 0:
//!   GLOBAL FUNC REF main
//!   BLOCK 1:
//!     VAR DECL main
//!     ref(main) <- (FUNC BLOCK 2)
//!     BLOCK 2:
//!       VAR DECL x:type(i32)
//!       (CALL ref(print) (ref(x)))
//! ```

use super::{Block, BlockId, DeclKind, DeclRef, Expr, Hir, Stmt, TypeRef};
use std::fmt;

/// Trait for pretty-printing HIR constructs
pub trait PrettyPrint {
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Hir {
    fn pretty_print(&self) -> String {
        self.blocks()
            .iter()
            .filter(|block| block.is_root())
            .map(|block| self.display_block(block.id).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Hir {
    /// Display adapter that prints `block` and everything nested in it
    pub fn display_block(&self, block: BlockId) -> BlockDisplay<'_> {
        BlockDisplay { hir: self, block }
    }

    /// Display adapter for a single expression
    pub fn display_expr<'a>(&'a self, expr: &'a Expr) -> ExprDisplay<'a> {
        ExprDisplay { hir: self, expr }
    }
}

pub struct BlockDisplay<'a> {
    hir: &'a Hir,
    block: BlockId,
}

impl fmt::Display for BlockDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hir.get_block(self.block) {
            Some(block) => write_block(self.hir, block, 0, f),
            None => write!(f, "<missing {}>", self.block),
        }
    }
}

pub struct ExprDisplay<'a> {
    hir: &'a Hir,
    expr: &'a Expr,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(self.hir, self.expr, f)
    }
}

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = indent * 2)
}

fn write_block(hir: &Hir, block: &Block, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    pad(f, indent)?;
    write!(f, "{}:", block.id)?;

    for decl_id in &block.var_decls {
        writeln!(f)?;
        pad(f, indent + 1)?;
        let decl = hir.decl(*decl_id);
        match decl.kind {
            DeclKind::GlobalFuncRef { .. } => write!(f, "GLOBAL FUNC REF {}", decl.name)?,
            _ => {
                write!(f, "VAR DECL {}", decl.name)?;
                if let Some(ty) = &decl.ty {
                    f.write_str(":")?;
                    write_type(hir, ty, f)?;
                }
            }
        }
    }

    for stmt in &block.stmts {
        writeln!(f)?;
        write_stmt(hir, stmt, indent + 1, f)?;
    }

    for child in &block.sub_blocks {
        writeln!(f)?;
        write_block(hir, hir.block(*child), indent + 1, f)?;
    }

    Ok(())
}

fn write_stmt(hir: &Hir, stmt: &Stmt, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    pad(f, indent)?;
    match stmt {
        Stmt::Assign { target, value, .. } => {
            write_ref(hir, target, f)?;
            f.write_str(" <- ")?;
            write_expr(hir, value, f)
        }
        Stmt::Drop { value, .. } => write_expr(hir, value, f),
        Stmt::If {
            cond,
            then_block,
            else_block,
            ..
        } => {
            writeln!(f, "IF:")?;
            pad(f, indent + 1)?;
            f.write_str("COND:")?;
            write_expr(hir, cond, f)?;
            writeln!(f)?;
            pad(f, indent + 1)?;
            write!(f, "THEN: {}", then_block)?;
            if let Some(else_block) = else_block {
                writeln!(f)?;
                pad(f, indent + 1)?;
                write!(f, "ELSE: {}", else_block)?;
            }
            Ok(())
        }
        Stmt::While { cond, body, .. } => {
            writeln!(f, "WHILE:")?;
            pad(f, indent + 1)?;
            f.write_str("COND:")?;
            write_expr(hir, cond, f)?;
            writeln!(f)?;
            pad(f, indent + 1)?;
            write!(f, "BODY: {}", body)
        }
    }
}

fn write_expr(hir: &Hir, expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Ref(r) => write_ref(hir, r, f),
        Expr::Integer { value, .. } => write!(f, "{}", value),
        Expr::Float { value, .. } => write!(f, "{:?}", value),
        Expr::Binary { op, lhs, rhs, .. } => {
            write!(f, "({} ", op)?;
            write_expr(hir, lhs, f)?;
            f.write_str(" ")?;
            write_expr(hir, rhs, f)?;
            f.write_str(")")
        }
        Expr::Func { body, .. } => write!(f, "(FUNC {})", body),
        Expr::Call { callee, args, .. } => {
            f.write_str("(CALL ")?;
            write_expr(hir, callee, f)?;
            f.write_str(" (")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_expr(hir, arg, f)?;
            }
            f.write_str("))")
        }
    }
}

fn write_ref(hir: &Hir, r: &DeclRef, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match hir.get_decl(r.decl) {
        Some(decl) => write!(f, "ref({})", decl.name),
        None => write!(f, "ref(?{})", r.decl.as_u32()),
    }
}

fn write_type(hir: &Hir, ty: &TypeRef, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match hir.type_decl(ty.decl) {
        Some(decl) => write!(f, "type({})", decl.name),
        None => f.write_str("type(?)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::hir::{BinaryOp, BUILTIN_TYPES};
    use crate::syntax::Span;

    fn int(value: i64) -> Expr {
        Expr::Integer {
            value,
            span: Span::default(),
        }
    }

    #[test]
    fn test_pretty_print_nested_blocks() {
        let mut hir = Hir::new();
        let types = hir.create_type_scope(&BUILTIN_TYPES);
        let i32_ty = hir
            .type_scope(types)
            .and_then(|scope| scope.find("i32"))
            .map(|decl| TypeRef {
                decl,
                span: Span::default(),
            });

        let root = hir.create_root(Span::default());
        hir.add_decl(
            root,
            "main",
            None,
            DeclKind::GlobalFuncRef { target: None },
            Span::default(),
        );
        let body = hir.create_child(root, Span::default());
        let x = hir.add_decl(body, "x", i32_ty, DeclKind::Local, Span::default());
        let then_block = hir.create_child(body, Span::default());
        hir.add_stmt(
            body,
            Stmt::Assign {
                target: DeclRef::new(x, Span::default()),
                value: int(1),
                span: Span::default(),
            },
        );
        hir.add_stmt(
            body,
            Stmt::If {
                cond: Expr::Binary {
                    op: BinaryOp::Equal,
                    lhs: Box::new(Expr::Ref(DeclRef::new(x, Span::default()))),
                    rhs: Box::new(int(1)),
                    span: Span::default(),
                },
                then_block,
                else_block: None,
                span: Span::default(),
            },
        );

        let expected = "\
BLOCK 0:
  GLOBAL FUNC REF main
  BLOCK 1:
    VAR DECL x:type(i32)
    ref(x) <- 1
    IF:
      COND:(equal ref(x) 1)
      THEN: BLOCK 2
    BLOCK 2:";
        assert_eq!(hir.pretty_print(), expected);
    }

    #[test]
    fn test_pretty_print_expressions() {
        let mut hir = Hir::new();
        let root = hir.create_root(Span::default());
        let f = hir.add_decl(root, "f", None, DeclKind::Function, Span::default());
        let func_body = hir.create_child(root, Span::default());

        let call = Expr::Call {
            callee: Box::new(Expr::Ref(DeclRef::new(f, Span::default()))),
            args: vec![
                int(1),
                Expr::Float {
                    value: 2.0,
                    span: Span::default(),
                },
                Expr::Func {
                    body: func_body,
                    span: Span::default(),
                },
            ],
            span: Span::default(),
        };
        assert_eq!(
            hir.display_expr(&call).to_string(),
            "(CALL ref(f) (1, 2.0, (FUNC BLOCK 1)))"
        );
    }

    #[test]
    fn test_pretty_print_while() {
        let mut hir = Hir::new();
        let root = hir.create_root(Span::default());
        let body = hir.create_child(root, Span::default());
        hir.add_stmt(
            root,
            Stmt::While {
                cond: int(1),
                body,
                span: Span::default(),
            },
        );

        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  WHILE:\n    COND:1\n    BODY: BLOCK 1\n  BLOCK 1:"
        );
    }
}

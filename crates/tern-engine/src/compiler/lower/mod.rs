//! AST to HIR Lowering
//!
//! Converts a syntax tree into the scope-resolved [`Hir`]. The [`Lowerer`] is
//! a [`Visitor`] that keeps a stack of open blocks: every declaration and
//! statement lands in the block on top of the stack, and every name is
//! resolved by searching outwards from it.
//!
//! Lowering never stops at the first problem. A construct that cannot be
//! lowered is reported to the [`DiagnosticSink`] and skipped, and the walk
//! carries on with its next sibling.

mod expr;
mod hoist;
mod options;
mod stmt;
mod types;

pub use options::LowerOptions;

use crate::compiler::hir::{BlockId, DeclId, DeclKind, Hir, TypeScopeId};
use crate::diagnostics::{DiagnosticSink, Diagnostics, LowerError, Reported};
use crate::syntax::ast::{
    BlockStatement, ExpressionStatement, FunctionDecl, IfStatement, Module, NamespaceDecl,
    NodeKind, Statement, VariableDecl, Visitor, WhileStatement,
};
use crate::syntax::{Interner, Span};
use hoist::FunctionHoister;

/// Lower one module with default options.
///
/// Returns the IR together with every diagnostic reported along the way.
pub fn lower(module: &Module, interner: &Interner) -> (Hir, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut lowerer = Lowerer::new(interner, &mut diagnostics);
    lowerer.lower_module(module);
    let hir = lowerer.finish();
    (hir, diagnostics)
}

/// Lowering session: turns syntax trees into HIR.
///
/// Block ids and temporary names are unique across everything lowered by one
/// session, so several modules can share a single [`Hir`].
pub struct Lowerer<'a> {
    /// Resolves identifier symbols to names
    interner: &'a Interner,
    /// Destination for diagnostics
    sink: &'a mut dyn DiagnosticSink,
    options: LowerOptions,
    /// IR under construction
    hir: Hir,
    /// Open blocks, innermost last
    block_stack: Vec<BlockId>,
    /// Active type scopes, innermost last
    type_scopes: Vec<TypeScopeId>,
    /// Counter for synthetic temporaries
    next_temp: u32,
    /// Body block of the module being lowered
    unit_body: Option<BlockId>,
}

impl<'a> Lowerer<'a> {
    pub fn new(interner: &'a Interner, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            interner,
            sink,
            options: LowerOptions::default(),
            hir: Hir::new(),
            block_stack: Vec::new(),
            type_scopes: Vec::new(),
            next_temp: 0,
            unit_body: None,
        }
    }

    /// Set lowering options.
    ///
    /// Takes effect for modules lowered afterwards; the builtin type list is
    /// read when the first module creates the global type scope.
    pub fn with_options(mut self, options: LowerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LowerOptions {
        &self.options
    }

    /// IR built so far
    pub fn hir(&self) -> &Hir {
        &self.hir
    }

    /// Lower a module, returning its unit block
    pub fn lower_module(&mut self, module: &Module) -> BlockId {
        let first_new = self.hir.blocks().len();
        self.visit_module(module);
        // The unit block is the first block this module allocated
        BlockId(first_new as u32)
    }

    /// End the session and take the IR
    pub fn finish(self) -> Hir {
        self.hir
    }

    // ========================================================================
    // Block stack
    // ========================================================================

    /// Innermost open block.
    ///
    /// Statements lowered outside any module (through the [`Visitor`]
    /// methods directly) land in a fresh root block.
    fn current_block(&mut self) -> BlockId {
        if let Some(block) = self.block_stack.last() {
            return *block;
        }
        let block = self.hir.create_root(Span::default());
        self.block_stack.push(block);
        block
    }

    /// Run `f` with `block` as the current block, then seal it.
    ///
    /// Push and pop are always paired: lowering failures are values, so `f`
    /// never leaves early.
    fn in_block<R>(&mut self, block: BlockId, f: impl FnOnce(&mut Self) -> R) -> R {
        self.block_stack.push(block);
        #[cfg(feature = "tracing")]
        tracing::debug!(block = %block, depth = self.block_stack.len(), "enter block");

        let result = f(self);

        let popped = self.block_stack.pop();
        debug_assert_eq!(popped, Some(block), "block stack out of balance");
        self.hir.seal(block);
        #[cfg(feature = "tracing")]
        tracing::debug!(block = %block, "exit block");
        result
    }

    fn lower_statements(&mut self, statements: &[Statement]) {
        for stmt in statements {
            self.visit_statement(stmt);
        }
    }

    // ========================================================================
    // Type scopes
    // ========================================================================

    /// Global type scope, created from the configured builtins on first use
    fn ensure_global_type_scope(&mut self) {
        if self.type_scopes.is_empty() {
            let scope = self.hir.create_type_scope(self.options.builtin_types.as_slice());
            self.type_scopes.push(scope);
        }
    }

    // ========================================================================
    // Hoisting
    // ========================================================================

    /// Register a placeholder in `unit` for every top-level function.
    fn hoist_functions(&mut self, unit: BlockId, module: &Module) {
        let interner = self.interner;
        for name in FunctionHoister::collect(module) {
            let name_str = interner.resolve(name.name);
            #[cfg(feature = "tracing")]
            tracing::debug!(function = name_str, "hoist module function");
            self.hir.add_decl(
                unit,
                name_str,
                None,
                DeclKind::GlobalFuncRef { target: None },
                name.span,
            );
        }
    }

    /// Link the first unlinked placeholder named `name` in the unit block to
    /// `decl`. Only declarations directly in the unit body have one.
    fn link_hoisted(&mut self, block: BlockId, name: &str, decl: DeclId) {
        if self.unit_body != Some(block) {
            return;
        }
        let Some(unit) = self.hir.block(block).parent else {
            return;
        };
        let placeholder = self.hir.block(unit).var_decls.iter().copied().find(|id| {
            let var = self.hir.decl(*id);
            var.name == name && matches!(var.kind, DeclKind::GlobalFuncRef { target: None })
        });
        if let Some(placeholder) = placeholder {
            self.hir.link_placeholder(placeholder, decl);
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Send `err` to the sink
    fn report(&mut self, err: LowerError) -> Reported {
        #[cfg(feature = "tracing")]
        tracing::debug!(code = %err.code(), span = %err.span(), "{}", err);
        let args = err.args();
        self.sink.report(err.code(), Some(err.span()), &args);
        Reported
    }

    fn unsupported(&mut self, kind: NodeKind, span: Span) -> Reported {
        self.report(LowerError::unsupported(kind.description(), span))
    }

    /// Report an unsupported construct that has no node kind of its own
    fn unsupported_named(&mut self, construct: impl Into<String>, span: Span) -> Reported {
        self.report(LowerError::unsupported(construct, span))
    }

    /// Allocate a session-unique temporary in `block`
    fn fresh_temp(&mut self, block: BlockId, span: Span) -> DeclId {
        let name = format!("{}{}", self.options.temp_prefix, self.next_temp);
        self.next_temp += 1;
        self.hir.add_decl(block, name, None, DeclKind::Temporary, span)
    }
}

impl<'a> Visitor for Lowerer<'a> {
    /// Unit block, then hoisted placeholders, then the body block
    fn visit_module(&mut self, module: &Module) {
        self.ensure_global_type_scope();

        let unit = self.hir.create_root(module.span);
        self.in_block(unit, |this| {
            if this.options.hoist_module_functions {
                this.hoist_functions(unit, module);
            }

            let body = this.hir.create_child(unit, module.span);
            let outer_body = this.unit_body.replace(body);
            this.in_block(body, |this| this.lower_statements(&module.statements));
            this.unit_body = outer_body;
        });

        #[cfg(feature = "tracing")]
        tracing::debug!("lowered module:\n{}", self.hir.display_block(unit));
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VariableDecl(decl) => self.visit_variable_decl(decl),
            Statement::FunctionDecl(decl) => self.visit_function_decl(decl),
            Statement::NamespaceDecl(decl) => self.visit_namespace_decl(decl),
            Statement::Expression(expr) => self.visit_expression_statement(expr),
            Statement::If(if_stmt) => self.visit_if_statement(if_stmt),
            Statement::While(while_stmt) => self.visit_while_statement(while_stmt),
            Statement::Block(block) => self.visit_block_statement(block),
            Statement::Empty(span) => self.visit_empty_statement(*span),
            Statement::ClassDecl(_)
            | Statement::TypeAliasDecl(_)
            | Statement::ImportDecl(_)
            | Statement::ExportDecl(_)
            | Statement::Switch(_)
            | Statement::DoWhile(_)
            | Statement::For(_)
            | Statement::ForOf(_)
            | Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Return(_)
            | Statement::Throw(_)
            | Statement::Try(_) => {
                self.unsupported(stmt.kind(), stmt.span());
            }
        }
    }

    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        self.lower_variable_decl(decl);
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        self.lower_function_decl(decl);
    }

    fn visit_namespace_decl(&mut self, decl: &NamespaceDecl) {
        self.lower_namespace_decl(decl);
    }

    fn visit_expression_statement(&mut self, stmt: &ExpressionStatement) {
        self.lower_expression_statement(stmt);
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) {
        self.lower_if(stmt);
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) {
        self.lower_while(stmt);
    }

    fn visit_block_statement(&mut self, stmt: &BlockStatement) {
        self.lower_block_statement(stmt);
    }

    fn visit_empty_statement(&mut self, _span: Span) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::hir::{PrettyPrint, Stmt};
    use crate::diagnostics::DiagnosticCode;
    use crate::syntax::AstBuilder;

    #[test]
    fn test_empty_module_has_unit_and_body() {
        let b = AstBuilder::new();
        let module = b.module(vec![]);
        let interner = b.into_interner();

        let (hir, diagnostics) = lower(&module, &interner);
        assert!(diagnostics.is_empty());
        assert_eq!(hir.pretty_print(), "BLOCK 0:\n  BLOCK 1:");
        assert!(hir.blocks().iter().all(|block| block.sealed));
    }

    #[test]
    fn test_session_shares_counters_across_modules() {
        let b = AstBuilder::new();
        let first = b.module(vec![b.let_decl("x", None, None), b.expr_stmt(b.assign(b.name("x"), b.int(1)))]);
        let second = b.module(vec![b.let_decl("y", None, None), b.expr_stmt(b.assign(b.name("y"), b.int(2)))]);
        let interner = b.into_interner();

        let mut diagnostics = Diagnostics::new();
        let mut lowerer = Lowerer::new(&interner, &mut diagnostics);
        let unit_a = lowerer.lower_module(&first);
        let unit_b = lowerer.lower_module(&second);
        let hir = lowerer.finish();

        assert_eq!(unit_a, BlockId(0));
        assert_eq!(unit_b, BlockId(2));
        assert!(hir.block(unit_b).is_root());

        let temps: Vec<_> = hir
            .decls()
            .iter()
            .filter(|decl| decl.is_temporary())
            .map(|decl| decl.name.as_str())
            .collect();
        assert_eq!(temps, vec!["~tmp0", "~tmp1"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_options_change_temp_prefix_and_builtins() {
        let b = AstBuilder::new();
        let module = b.module(vec![
            b.let_decl("n", Some(b.type_ref("int")), None),
            b.let_decl("m", Some(b.type_ref("i32")), None),
            b.expr_stmt(b.assign(b.name("n"), b.int(1))),
        ]);
        let interner = b.into_interner();

        let mut diagnostics = Diagnostics::new();
        let options = LowerOptions::default()
            .with_builtin_types(["int"])
            .with_temp_prefix("$t");
        let mut lowerer = Lowerer::new(&interner, &mut diagnostics).with_options(options);
        lowerer.lower_module(&module);
        let hir = lowerer.finish();

        assert!(hir.decls().iter().any(|decl| decl.name == "$t0"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.records()[0].code, DiagnosticCode::NameNotFound);
        assert_eq!(diagnostics.records()[0].args, vec!["i32"]);
    }

    #[test]
    fn test_temp_prefix_cannot_capture_user_name() {
        let b = AstBuilder::new();
        let module = b.module(vec![
            b.let_decl("$t0", None, None),
            b.block(vec![b.expr_stmt(b.assign(b.name("$t0"), b.int(7)))]),
        ]);
        let interner = b.into_interner();

        let mut diagnostics = Diagnostics::new();
        let options = LowerOptions::default().with_temp_prefix("$t");
        let mut lowerer = Lowerer::new(&interner, &mut diagnostics).with_options(options);
        lowerer.lower_module(&module);
        let hir = lowerer.finish();
        assert!(diagnostics.is_empty());

        let user = hir.block(BlockId(1)).var_decls[0];
        let temp = hir.block(BlockId(2)).var_decls[0];
        assert!(hir.decl(temp).is_temporary());

        match &hir.block(BlockId(2)).stmts[1] {
            Stmt::Assign { target, value, .. } => {
                assert_eq!(target.decl, user);
                assert_eq!(value.as_decl_ref().map(|r| r.decl), Some(temp));
            }
            other => panic!("expected an assignment, found {:?}", other),
        }
    }

    #[test]
    fn test_hoisting_can_be_disabled() {
        let b = AstBuilder::new();
        let module = b.module(vec![
            b.expr_stmt(b.call(b.name("later"), vec![])),
            b.function("later", vec![], vec![]),
        ]);
        let interner = b.into_interner();

        let mut diagnostics = Diagnostics::new();
        let options = LowerOptions::default().with_hoisting(false);
        let mut lowerer = Lowerer::new(&interner, &mut diagnostics).with_options(options);
        lowerer.lower_module(&module);

        assert_eq!(diagnostics.count(DiagnosticCode::NameNotFound), 1);
    }

    #[test]
    fn test_statement_outside_module_gets_root_block() {
        let b = AstBuilder::new();
        let stmt = b.let_decl("x", None, Some(b.int(3)));
        let interner = b.into_interner();

        let mut diagnostics = Diagnostics::new();
        let mut lowerer = Lowerer::new(&interner, &mut diagnostics);
        lowerer.visit_statement(&stmt);
        let hir = lowerer.finish();

        assert_eq!(hir.pretty_print(), "BLOCK 0:\n  VAR DECL x\n  ref(x) <- 3");
    }
}

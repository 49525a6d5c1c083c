//! Function hoisting pre-pass
//!
//! Module-level functions may be called before their declaration. Before a
//! unit's body is lowered, this pass collects every function declared
//! directly at the top level so the lowerer can register a placeholder for
//! each one in the unit block.

use crate::syntax::ast::{FunctionDecl, Identifier, Module, Statement, Visitor};

/// Collects the names of functions declared directly in a module.
///
/// Only the module's immediate statements are inspected: functions nested in
/// blocks, namespaces or other functions are not hoisted.
#[derive(Debug, Default)]
pub(super) struct FunctionHoister {
    pub(super) functions: Vec<Identifier>,
}

impl FunctionHoister {
    pub(super) fn collect(module: &Module) -> Vec<Identifier> {
        let mut hoister = Self::default();
        hoister.visit_module(module);
        hoister.functions
    }
}

impl Visitor for FunctionHoister {
    fn visit_module(&mut self, module: &Module) {
        for stmt in &module.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        // No descent into anything but the declaration itself
        if let Statement::FunctionDecl(decl) = stmt {
            self.visit_function_decl(decl);
        }
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        self.functions.push(decl.name);
    }
}

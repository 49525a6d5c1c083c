//! Lowering configuration

use crate::compiler::hir::BUILTIN_TYPES;

/// Options for a lowering session (passed from the embedding front-end)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerOptions {
    /// Type names pre-registered in the global type scope, in lookup order
    pub builtin_types: Vec<String>,
    /// Prefix for synthetic temporaries; the session counter is appended.
    /// Should contain a character identifiers cannot, so temps never collide
    /// with user names.
    pub temp_prefix: String,
    /// Run the hoisting pre-pass that lets module-level functions be
    /// referenced before their declaration
    pub hoist_module_functions: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            builtin_types: BUILTIN_TYPES.iter().map(|name| name.to_string()).collect(),
            temp_prefix: "~tmp".to_string(),
            hoist_module_functions: true,
        }
    }
}

impl LowerOptions {
    pub fn with_builtin_types<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.builtin_types = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    pub fn with_hoisting(mut self, enabled: bool) -> Self {
        self.hoist_module_functions = enabled;
        self
    }
}

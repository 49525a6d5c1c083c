//! Error types for lowering
//!
//! A [`LowerError`] describes one problem with source location. Once it has
//! been sent to the diagnostic sink, lowering only needs to know that the
//! current construct failed; [`Reported`] is that token and
//! [`LowerResult`] threads it through every lowering function.

use super::DiagnosticCode;
use crate::syntax::Span;
use thiserror::Error;

/// Errors that can occur during lowering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LowerError {
    /// Syntax that lowering does not handle
    #[error("Unsupported construct: {construct}")]
    UnsupportedConstruct {
        /// Human-readable description of the construct
        construct: String,
        /// Location of the construct
        span: Span,
    },

    /// Identifier or type name with no visible declaration
    #[error("Cannot find name '{name}'")]
    NameNotFound {
        /// Name that failed to resolve
        name: String,
        /// Location of the reference
        span: Span,
    },
}

impl LowerError {
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        LowerError::UnsupportedConstruct {
            construct: construct.into(),
            span,
        }
    }

    pub fn name_not_found(name: impl Into<String>, span: Span) -> Self {
        LowerError::NameNotFound {
            name: name.into(),
            span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            LowerError::UnsupportedConstruct { .. } => DiagnosticCode::UnsupportedConstruct,
            LowerError::NameNotFound { .. } => DiagnosticCode::NameNotFound,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LowerError::UnsupportedConstruct { span, .. } | LowerError::NameNotFound { span, .. } => {
                *span
            }
        }
    }

    /// Message arguments, in template order
    pub fn args(&self) -> Vec<&str> {
        match self {
            LowerError::UnsupportedConstruct { construct, .. } => vec![construct.as_str()],
            LowerError::NameNotFound { name, .. } => vec![name.as_str()],
        }
    }
}

/// Marker: the construct failed and its diagnostic has already been sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

/// Result of lowering one construct
pub type LowerResult<T> = Result<T, Reported>;

//! Diagnostics produced while lowering
//!
//! Lowering never aborts on bad input. Each problem is sent to a
//! [`DiagnosticSink`] as a `(code, span, args)` record and lowering moves on
//! to the next sibling statement. [`Diagnostics`] is the standard
//! append-only collector; [`render`] turns records into terminal or JSON
//! output.

pub mod error;
pub mod render;

pub use error::{LowerError, LowerResult, Reported};
pub use render::{create_files, Diagnostic, ErrorCode, JsonDiagnostic, JsonLabel};

use crate::syntax::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of message arguments a diagnostic carries
pub const MAX_ARGS: usize = 3;

/// Kind of problem reported during lowering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// A syntax shape lowering does not handle
    UnsupportedConstruct,
    /// An identifier or type name with no visible declaration
    NameNotFound,
}

impl DiagnosticCode {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DiagnosticCode::UnsupportedConstruct => ErrorCode("E5001"),
            DiagnosticCode::NameNotFound => ErrorCode("E5002"),
        }
    }

    /// Message template; `{0}`..`{2}` are replaced by the record's arguments
    pub fn template(&self) -> &'static str {
        match self {
            DiagnosticCode::UnsupportedConstruct => "Unsupported construct: {0}",
            DiagnosticCode::NameNotFound => "Cannot find name '{0}'",
        }
    }

    /// Fill the template with `args`. Missing arguments become empty.
    pub fn format(&self, args: &[String]) -> String {
        let mut message = self.template().to_string();
        for index in 0..MAX_ARGS {
            let placeholder = format!("{{{}}}", index);
            let value = args.get(index).map(String::as_str).unwrap_or("");
            message = message.replace(&placeholder, value);
        }
        message
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code().as_str())
    }
}

/// One reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub code: DiagnosticCode,
    pub span: Option<Span>,
    pub args: Vec<String>,
}

impl DiagnosticRecord {
    pub fn message(&self) -> String {
        self.code.format(&self.args)
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message())?;
        if let Some(span) = self.span {
            write!(f, " at {}", span)?;
        }
        Ok(())
    }
}

/// Destination for diagnostics
///
/// Implementations must accept every report: reporting never fails and
/// records are kept in call order.
pub trait DiagnosticSink {
    fn report(&mut self, code: DiagnosticCode, span: Option<Span>, args: &[&str]);
}

/// Append-only, order-preserving diagnostic collector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    records: Vec<DiagnosticRecord>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with the given code
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.records.iter().filter(|r| r.code == code).count()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, code: DiagnosticCode, span: Option<Span>, args: &[&str]) {
        debug_assert!(args.len() <= MAX_ARGS, "too many diagnostic arguments");
        self.records.push(DiagnosticRecord {
            code,
            span,
            args: args.iter().take(MAX_ARGS).map(|a| a.to_string()).collect(),
        });
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticRecord;
    type IntoIter = std::slice::Iter<'a, DiagnosticRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

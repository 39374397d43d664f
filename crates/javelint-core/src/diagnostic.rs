//! Diagnostics produced by inspection passes

use std::fmt;

use javelint_model::ExprId;
use text_size::{TextRange, TextSize};

use crate::fix::QuickFix;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    /// Code that works but carries a redundant construct
    Redundant,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Redundant => write!(f, "redundant"),
        }
    }
}

/// A single finding surfaced to the host, optionally carrying a deferred
/// quick fix.
#[derive(Debug)]
pub struct Diagnostic {
    /// Id of the inspection that produced this diagnostic
    pub inspection: String,
    pub severity: Severity,
    pub message: String,
    /// Name of the analyzed file
    pub file: String,
    /// The flagged expression in the owning model
    pub anchor: ExprId,
    /// Source range of the anchor, when the host supplied positions
    pub range: TextRange,
    /// Rewrite action, re-validated against the live model when applied
    pub fix: Option<Box<dyn QuickFix>>,
}

impl Diagnostic {
    pub fn new(
        inspection: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        anchor: ExprId,
    ) -> Self {
        Diagnostic {
            inspection: inspection.into(),
            severity,
            message: message.into(),
            file: String::new(),
            anchor,
            range: TextRange::empty(TextSize::from(0)),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_fix(mut self, fix: Box<dyn QuickFix>) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}

/// Ordered collection of diagnostics from one or more passes.
#[derive(Debug, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        DiagnosticCollection::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn redundant_count(&self) -> usize {
        self.count(Severity::Redundant)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Sort by file, then range start, then inspection id. Stable, so
    /// same-position diagnostics keep their emission order.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.range.start().cmp(&b.range.start()))
                .then(a.inspection.cmp(&b.inspection))
        });
    }
}

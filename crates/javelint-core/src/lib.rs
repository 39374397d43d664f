//! javelint-core: diagnostic and fix abstractions
//!
//! The pieces every inspection builds on:
//! - [`Diagnostic`] and [`DiagnosticCollection`] for reporting findings
//! - [`QuickFix`] for deferred, re-validated rewrites
//! - [`DeclarationVisitor`] for walking a file's declarations

mod diagnostic;
mod fix;
mod visit;

pub use diagnostic::{Diagnostic, DiagnosticCollection, Severity};
pub use fix::{FixOutcome, QuickFix, StaleReason};
pub use visit::{visit_declarations, DeclarationVisitor};

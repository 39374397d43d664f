//! Output formatters for diagnostics

mod json;
mod raw;

pub use json::JsonFormatter;
pub use raw::RawFormatter;

use javelint_core::DiagnosticCollection;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one diagnostic per line
    Raw,
    /// Structured JSON with per-file grouping
    Json,
}

impl OutputFormat {
    /// Parse a format name (case insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "raw" => Some(OutputFormat::Raw),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Raw
    }
}

/// Trait for output formatters.
pub trait Formatter {
    fn format(&self, diagnostics: &DiagnosticCollection) -> String;
}

/// Format diagnostics using the specified format.
pub fn format_diagnostics(diagnostics: &DiagnosticCollection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Raw => RawFormatter.format(diagnostics),
        OutputFormat::Json => JsonFormatter.format(diagnostics),
    }
}

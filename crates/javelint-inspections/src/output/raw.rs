//! Raw text output formatter

use javelint_core::DiagnosticCollection;

use super::Formatter;

/// Plain text formatter: `file:offset: severity: message [inspection]`,
/// one diagnostic per line.
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn format(&self, diagnostics: &DiagnosticCollection) -> String {
        let mut output = String::new();
        for diagnostic in diagnostics.diagnostics() {
            output.push_str(&format!(
                "{}:{}: {}: {} [{}]\n",
                diagnostic.file,
                u32::from(diagnostic.range.start()),
                diagnostic.severity,
                diagnostic.message,
                diagnostic.inspection
            ));
        }
        output
    }
}

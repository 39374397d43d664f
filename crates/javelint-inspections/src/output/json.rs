//! JSON output formatter

use std::collections::BTreeMap;

use javelint_core::DiagnosticCollection;
use serde::Serialize;

use super::Formatter;

/// JSON formatter: totals plus diagnostics grouped per file.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    totals: Totals,
    files: BTreeMap<String, FileDiagnostics>,
}

#[derive(Serialize)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct FileDiagnostics {
    diagnostics: usize,
    messages: Vec<FileMessage>,
}

#[derive(Serialize)]
struct FileMessage {
    message: String,
    severity: String,
    offset: u32,
    length: u32,
    inspection: String,
    fixable: bool,
}

impl Formatter for JsonFormatter {
    fn format(&self, diagnostics: &DiagnosticCollection) -> String {
        let mut files: BTreeMap<String, FileDiagnostics> = BTreeMap::new();
        for diagnostic in diagnostics.diagnostics() {
            let entry = files
                .entry(diagnostic.file.clone())
                .or_insert_with(|| FileDiagnostics {
                    diagnostics: 0,
                    messages: Vec::new(),
                });
            entry.diagnostics += 1;
            entry.messages.push(FileMessage {
                message: diagnostic.message.clone(),
                severity: diagnostic.severity.to_string(),
                offset: diagnostic.range.start().into(),
                length: diagnostic.range.len().into(),
                inspection: diagnostic.inspection.clone(),
                fixable: diagnostic.has_fix(),
            });
        }

        let output = JsonOutput {
            totals: Totals {
                diagnostics: diagnostics.len(),
                errors: diagnostics.error_count(),
                warnings: diagnostics.warning_count(),
            },
            files,
        };

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

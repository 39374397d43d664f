//! Logging infrastructure for inspection passes
//!
//! Progress logging to a file for debugging analysis runs. Disabled until
//! [`init_logger`] is called; every log call is a no-op after that check
//! fails, so hot paths stay cheap when logging is off.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use javelint_core::StaleReason;

static LOGGER: Mutex<Option<InspectionsLogger>> = Mutex::new(None);

struct InspectionsLogger {
    file: File,
    path: PathBuf,
}

/// Initialize logging to the given file, or to a timestamped file in the
/// system temp directory. Returns the path actually used.
pub fn init_logger(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::temp_dir().join(format!(
            "javelint-{}.log",
            Local::now().format("%Y%m%d-%H%M%S")
        )),
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut guard = LOGGER
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger lock poisoned"))?;
    *guard = Some(InspectionsLogger {
        file,
        path: path.clone(),
    });
    Ok(path)
}

pub fn is_enabled() -> bool {
    LOGGER.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Path of the active log file, if logging is enabled.
pub fn log_file_path() -> Option<PathBuf> {
    LOGGER
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|logger| logger.path.clone()))
}

/// Write a timestamped line to the log file.
pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_mut() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(logger.file, "[{}] {}", timestamp, message);
        }
    }
}

pub fn log_section(title: &str) {
    log(&"=".repeat(60));
    log(title);
    log(&"=".repeat(60));
}

pub fn log_subsection(title: &str) {
    log(&"-".repeat(40));
    log(title);
}

pub fn log_pass_start(file: &str) {
    log_section(&format!("ANALYSIS PASS: {}", file));
}

pub fn log_pass_complete(file: &str, diagnostics: usize) {
    log(&format!(
        "Analysis of {} complete: {} diagnostic(s)",
        file, diagnostics
    ));
}

pub fn log_batch_start(files: usize) {
    log_section(&format!("BATCH ANALYSIS: {} file(s)", files));
}

pub fn log_inspection_result(id: &str, findings: usize) {
    log(&format!("Inspection {}: {} finding(s)", id, findings));
}

pub fn log_inspection_skipped(id: &str) {
    log(&format!("Inspection {} disabled by profile", id));
}

pub fn log_fix_applied(name: &str) {
    log(&format!("Fix applied: {}", name));
}

pub fn log_fix_stale(name: &str, reason: StaleReason) {
    log(&format!("Fix skipped: {} ({})", name, reason));
}

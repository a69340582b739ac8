//! Console rendering of log entries.

use crate::command::{LogEntry, Severity};

/// Human-readable form of a log entry.
pub fn render(entry: &LogEntry) -> String {
    let message = &entry.message;
    match entry.severity {
        Severity::Info => message.clone(),
        Severity::Warning => format!("WARNING: {message}"),
        Severity::Error => format!("ERROR: {message}"),
        Severity::Halt if message.is_empty() => "Execution Halted.".to_string(),
        Severity::Halt => format!("Execution Halted: {message}"),
    }
}

/// Render an encoded `"<code>,<message>"` entry. `None` if it does not decode.
pub fn render_encoded(encoded: &str) -> Option<String> {
    LogEntry::decode(encoded).map(|entry| render(&entry))
}

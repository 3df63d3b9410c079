//! CSV results writer.
//!
//! One row per attempted problem under a fixed header. Fields are quoted
//! only when they contain a comma, quote, or line break.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;

use satmath_core::session::{LogEntry, SessionLog};

/// Column names, in order.
pub const CSV_HEADER: [&str; 6] = [
    "Problem",
    "Your Answer",
    "Correct Answer",
    "Result",
    "Timestamp",
    "Duration",
];

/// Escape a single CSV field.
fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let row: Vec<Cow<'_, str>> = fields.into_iter().map(csv_escape).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

fn entry_fields(entry: &LogEntry) -> [String; 6] {
    [
        entry.statement.clone(),
        entry.learner_answer.to_string(),
        entry.canonical_answer.to_string(),
        entry.verdict.to_string(),
        entry
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Micros, true),
        format!("{:.6}", entry.duration_secs),
    ]
}

/// Render a session log as CSV text.
pub fn generate_csv(log: &SessionLog) -> String {
    let mut csv = String::new();
    push_row(&mut csv, CSV_HEADER);
    for entry in log.entries() {
        let fields = entry_fields(entry);
        push_row(&mut csv, fields.iter().map(String::as_str));
    }
    csv
}

/// Write a session log as CSV to `path`, creating parent directories.
pub fn write_csv_report(log: &SessionLog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, generate_csv(log))
        .with_context(|| format!("failed to write results to {}", path.display()))?;
    Ok(())
}

//! JSON formatter for machine processing
//!
//! Field names are stable snake_case; rows arrive pre-sorted by name. The
//! document carries the rows plus the same summary the table footer shows.

use crate::domain::ReportRow;
use crate::output::{ReportFormatter, Summary};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonReport<'a> {
    /// One entry per pod, sorted by name
    pods: &'a [ReportRow],
    /// Per-status counts
    summary: Summary,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, rows: &[ReportRow], writer: &mut dyn Write) -> std::io::Result<()> {
        let report = JsonReport {
            pods: rows,
            summary: Summary::of(rows),
        };
        let rendered = serde_json::to_string_pretty(&report)?;
        writeln!(writer, "{}", rendered)
    }
}

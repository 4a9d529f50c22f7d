//! Output formatting for the pod report
//!
//! This module provides:
//! - Table output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TableFormatter;

use crate::domain::ReportRow;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table output
    #[default]
    Table,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (table, json)
    pub format: OutputFormat,
    /// Whether to render status as emoji glyphs
    pub emoji: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            emoji: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, no_emoji: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        };

        Self {
            format,
            emoji: !no_emoji,
        }
    }
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and write the full report
    fn format(&self, rows: &[ReportRow], writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a report formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn ReportFormatter> {
    match config.format {
        OutputFormat::Table => Box::new(TableFormatter::new(config.emoji)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Per-status counts shared by both formatters
#[derive(Debug, Default, serde::Serialize)]
pub struct Summary {
    pub total: usize,
    pub up_to_date: usize,
    pub outdated: usize,
    pub not_installed: usize,
    pub unknown: usize,
    pub would_update: usize,
}

impl Summary {
    /// Tally rows into per-status counts
    pub fn of(rows: &[ReportRow]) -> Self {
        use crate::domain::PodStatus;

        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };
        for row in rows {
            match row.status {
                PodStatus::UpToDate => summary.up_to_date += 1,
                PodStatus::Outdated => summary.outdated += 1,
                PodStatus::NotInstalled => summary.not_installed += 1,
                PodStatus::Unknown => summary.unknown += 1,
            }
            if row.would_update {
                summary.would_update += 1;
            }
        }
        summary
    }
}

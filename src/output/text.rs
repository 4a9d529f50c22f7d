//! Table formatter for human-readable display
//!
//! Fixed-width columns, middle-ellipsis truncation for overlong cells, and a
//! one-line summary footer. Status renders as an emoji glyph unless the caller
//! asked for plain text.

use crate::domain::{PodStatus, ReportRow};
use crate::output::{ReportFormatter, Summary};
use colored::Colorize;
use std::io::Write;

const NAME_WIDTH: usize = 24;
const VERSION_WIDTH: usize = 12;
const CONSTRAINT_WIDTH: usize = 14;
const SOURCE_WIDTH: usize = 20;

/// Table formatter for the pod report
pub struct TableFormatter {
    /// Whether to render status as emoji glyphs
    emoji: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(emoji: bool) -> Self {
        Self { emoji }
    }

    fn status_cell(&self, status: PodStatus) -> String {
        let glyph = status.glyph(self.emoji);
        if self.emoji {
            return glyph.to_string();
        }
        match status {
            PodStatus::UpToDate => glyph.green().to_string(),
            PodStatus::Outdated => glyph.yellow().to_string(),
            PodStatus::NotInstalled => glyph.red().to_string(),
            PodStatus::Unknown => glyph.dimmed().to_string(),
        }
    }
}

/// Shortens `text` to `width` by replacing the middle with `…`.
///
/// Both ends survive so names stay recognizable and versions keep their
/// suffix. Width is counted in characters, not bytes.
fn ellipsize(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    // no room for an ellipsis below 3 columns; cut hard instead
    if width < 3 {
        return chars[..width].iter().collect();
    }
    let head = (width - 1) / 2;
    let tail = width - 1 - head;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

fn pad(text: &str, width: usize) -> String {
    let cell = ellipsize(text, width);
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

impl ReportFormatter for TableFormatter {
    fn format(&self, rows: &[ReportRow], writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {} {} {} {} {} {}  STATUS",
            pad("NAME", NAME_WIDTH),
            pad("LOCKED", VERSION_WIDTH),
            pad("CONSTRAINT", CONSTRAINT_WIDTH),
            pad("SOURCE", SOURCE_WIDTH),
            pad("SATISFYING", VERSION_WIDTH),
            pad("LATEST", VERSION_WIDTH),
            pad("UPDATE?", 7),
        )?;

        for row in rows {
            let locked = row.locked.as_deref().unwrap_or("-");
            let satisfying = row.latest_satisfying.as_deref().unwrap_or("-");
            let latest = row.latest.as_deref().unwrap_or("-");
            let update = if row.would_update { "yes" } else { "no" };

            write!(
                writer,
                "{} {} {} {} {} {} {}  {}",
                pad(&row.name, NAME_WIDTH),
                pad(locked, VERSION_WIDTH),
                pad(&row.constraint, CONSTRAINT_WIDTH),
                pad(&row.source, SOURCE_WIDTH),
                pad(satisfying, VERSION_WIDTH),
                pad(latest, VERSION_WIDTH),
                pad(update, 7),
                self.status_cell(row.status),
            )?;
            if row.note.is_empty() {
                writeln!(writer)?;
            } else {
                writeln!(writer, "  ({})", row.note.dimmed())?;
            }
        }

        let summary = Summary::of(rows);
        writeln!(
            writer,
            "\n{} pods: {} up to date, {} outdated, {} not installed, {} unknown; {} would update",
            summary.total,
            summary.up_to_date,
            summary.outdated,
            summary.not_installed,
            summary.unknown,
            summary.would_update,
        )?;

        Ok(())
    }
}

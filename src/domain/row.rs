//! Report row and status classification

use serde::Serialize;
use std::fmt;

/// Classification of a pod's locked state against the registry or remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PodStatus {
    /// Locked version equals the latest available
    UpToDate,
    /// Locked version is present but differs from the latest
    Outdated,
    /// No locked version recorded in the lockfile
    NotInstalled,
    /// Locked state exists but the external query failed or is ambiguous
    Unknown,
}

impl PodStatus {
    /// Status glyph for the table, emoji or plain text
    pub fn glyph(self, emoji: bool) -> &'static str {
        if emoji {
            match self {
                PodStatus::UpToDate => "✅",
                PodStatus::Outdated => "⚠️",
                PodStatus::NotInstalled => "❌",
                PodStatus::Unknown => "❓",
            }
        } else {
            match self {
                PodStatus::UpToDate => "ok",
                PodStatus::Outdated => "outdated",
                PodStatus::NotInstalled => "missing",
                PodStatus::Unknown => "unknown",
            }
        }
    }
}

impl fmt::Display for PodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph(false))
    }
}

/// One line of the update report, covering a single pod
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Pod name
    pub name: String,
    /// Locked version (trunk) or commit SHA (git), if recorded
    pub locked: Option<String>,
    /// Declared constraint text (empty when unconstrained)
    pub constraint: String,
    /// Source description, e.g. `trunk` or `git (branch develop)`
    pub source: String,
    /// Newest version satisfying the constraint
    pub latest_satisfying: Option<String>,
    /// Newest version available regardless of constraint
    pub latest: Option<String>,
    /// Whether deleting the lockfile and re-resolving would change the pod
    pub would_update: bool,
    /// Status classification
    pub status: PodStatus,
    /// Free-text note explaining degraded or surprising results
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
}

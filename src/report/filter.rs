//! Row filtering for the `--outdated` view

use crate::domain::{PodStatus, ReportRow};

/// Keeps rows that are outdated or that an update would change.
///
/// A row whose status is `UpToDate` can still carry `would_update` when the
/// constraint admits a newer release; those rows survive the filter.
pub fn only_outdated(rows: Vec<ReportRow>) -> Vec<ReportRow> {
    rows.into_iter()
        .filter(|row| row.status == PodStatus::Outdated || row.would_update)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, status: PodStatus, would_update: bool) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            locked: Some("1.0.0".to_string()),
            constraint: String::new(),
            source: "trunk".to_string(),
            latest_satisfying: None,
            latest: None,
            would_update,
            status,
            note: String::new(),
        }
    }

    #[test]
    fn test_keeps_outdated_and_updatable_rows() {
        let rows = vec![
            row("A", PodStatus::UpToDate, false),
            row("B", PodStatus::Outdated, true),
            row("C", PodStatus::UpToDate, true),
            row("D", PodStatus::Unknown, false),
            row("E", PodStatus::NotInstalled, false),
            row("F", PodStatus::Outdated, false),
        ];

        let kept = only_outdated(rows);
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "F"]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(only_outdated(Vec::new()).is_empty());
    }
}

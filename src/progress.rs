//! Progress display while pods are being checked
//!
//! Thin wrapper over indicatif. Disabled for JSON output and non-verbose
//! stderr stays quiet; the bar always draws to stderr so stdout remains
//! machine-readable.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the check run
pub struct Progress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Start a bar for a known number of pods
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .expect("Invalid template")
                .progress_chars("█▓▒░"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Record one finished pod
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar so the report can print cleanly
    pub fn finish_and_clear(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        self.bar = None;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_disabled_is_inert() {
        let mut progress = Progress::disabled();
        progress.start(10, "Checking pods");
        progress.inc();
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_progress_enabled_counts() {
        let mut progress = Progress::new(true);
        progress.start(2, "Checking pods");
        progress.inc();
        progress.inc();
        progress.finish_and_clear();
    }
}

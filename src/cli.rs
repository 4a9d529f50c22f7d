//! CLI argument parsing module for podup

use clap::Parser;
use std::path::PathBuf;

/// CocoaPods dependency update checker
#[derive(Parser, Debug, Clone)]
#[command(name = "podup", version, about = "CocoaPods dependency update checker")]
pub struct CliArgs {
    /// Project directory containing Podfile and Podfile.lock (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show only pods that are outdated or that an update would change
    #[arg(long)]
    pub outdated: bool,

    /// Render status as plain text instead of emoji
    #[arg(long)]
    pub no_emoji: bool,

    // Resolution options
    /// Include prerelease versions when matching constraints
    #[arg(long)]
    pub prerelease: bool,

    /// Per-command timeout in seconds for trunk and git queries
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose diagnostics on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Path to the project's Podfile
    pub fn podfile_path(&self) -> PathBuf {
        self.path.join("Podfile")
    }

    /// Path to the project's Podfile.lock
    pub fn lockfile_path(&self) -> PathBuf {
        self.path.join("Podfile.lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["podup"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.json);
        assert!(!args.outdated);
        assert!(!args.prerelease);
        assert!(!args.no_emoji);
        assert!(!args.verbose);
        assert_eq!(args.timeout, 30);
    }

    #[test]
    fn test_positional_path_and_flags() {
        let args = CliArgs::parse_from([
            "podup",
            "ios/App",
            "--json",
            "--outdated",
            "--prerelease",
            "--timeout",
            "5",
        ]);
        assert_eq!(args.path, PathBuf::from("ios/App"));
        assert!(args.json);
        assert!(args.outdated);
        assert!(args.prerelease);
        assert_eq!(args.timeout, 5);
    }

    #[test]
    fn test_file_paths_derive_from_project_dir() {
        let args = CliArgs::parse_from(["podup", "ios/App"]);
        assert_eq!(args.podfile_path(), PathBuf::from("ios/App/Podfile"));
        assert_eq!(args.lockfile_path(), PathBuf::from("ios/App/Podfile.lock"));
    }
}

//! Parsing of `pod trunk info` output
//!
//! The trunk CLI prints a `Versions:` heading followed by bullet lines like
//! `- 5.4.0 (2021-04-21 01:10:21 UTC)`. Some proxy setups collapse the list
//! onto the heading line itself (`Versions: 1.0.0, 1.1.0`); that form is the
//! fallback.

use crate::domain::PodVersion;

/// Registry CLI binary name
pub const TRUNK_PROGRAM: &str = "pod";

/// Arguments for the trunk info query
pub fn trunk_info_args(name: &str) -> Vec<String> {
    vec!["trunk".to_string(), "info".to_string(), name.to_string()]
}

/// Extracts the version list from trunk info stdout.
///
/// Returns an empty vector when no versions could be parsed; the caller
/// treats that as a failed query.
pub fn parse_trunk_versions(stdout: &str) -> Vec<PodVersion> {
    let mut versions = Vec::new();
    let mut in_versions = false;

    for line in stdout.lines() {
        let trimmed = line.trim();
        // the heading may itself be rendered as a bullet (`- Versions:`)
        let heading = trimmed.strip_prefix('-').map_or(trimmed, str::trim_start);
        if heading.starts_with("Versions") {
            in_versions = true;
            continue;
        }
        if !in_versions {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if let Some(token) = rest.split_whitespace().next() {
                if let Some(version) = PodVersion::parse(token, true) {
                    versions.push(version);
                }
            }
        }
    }

    if !versions.is_empty() {
        return versions;
    }

    // Fallback: inline comma-separated list on the heading line
    for line in stdout.lines() {
        if let Some((_, tail)) = line.split_once("Versions:") {
            for token in tail.split(',') {
                if let Some(version) = PodVersion::parse(token, true) {
                    versions.push(version);
                }
            }
            if !versions.is_empty() {
                break;
            }
        }
    }

    versions
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLET_OUTPUT: &str = "\

    Alamofire
    - Versions:
    - 5.4.0 (2021-04-21 01:10:21 UTC)
    - 5.9.1 (2024-04-10 22:34:02 UTC)
    - 5.10.2 (2024-11-26 03:02:50 UTC)
    - Owners:
";

    #[test]
    fn test_parse_bullet_listing() {
        // "- Owners:" would also look like a bullet, but is not a version
        let versions = parse_trunk_versions(BULLET_OUTPUT);
        assert_eq!(
            versions,
            vec![
                PodVersion::new(5, 4, 0),
                PodVersion::new(5, 9, 1),
                PodVersion::new(5, 10, 2),
            ]
        );
    }

    #[test]
    fn test_parse_inline_fallback() {
        let versions = parse_trunk_versions("Versions: 1.0.0, 1.1.0, 2.0.0-beta.1\n");
        assert_eq!(
            versions,
            vec![
                PodVersion::new(1, 0, 0),
                PodVersion::new(1, 1, 0),
                PodVersion::new(2, 0, 0).with_prerelease("beta.1"),
            ]
        );
    }

    #[test]
    fn test_bullets_win_over_inline() {
        let output = "Versions:\n- 3.0.0\n";
        assert_eq!(parse_trunk_versions(output), vec![PodVersion::new(3, 0, 0)]);
    }

    #[test]
    fn test_no_versions_yields_empty() {
        assert!(parse_trunk_versions("").is_empty());
        assert!(parse_trunk_versions("[!] No pod found\n").is_empty());
        assert!(parse_trunk_versions("Versions:\n- Owners:\n").is_empty());
    }

    #[test]
    fn test_bullets_before_heading_are_ignored() {
        let output = "- 9.9.9\nVersions:\n- 1.0.0\n";
        assert_eq!(parse_trunk_versions(output), vec![PodVersion::new(1, 0, 0)]);
    }

    #[test]
    fn test_trunk_info_args() {
        assert_eq!(trunk_info_args("Alamofire"), vec!["trunk", "info", "Alamofire"]);
    }
}

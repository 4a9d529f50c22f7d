//! Podfile.lock parser
//!
//! Extracts two mappings from the lockfile text:
//! - pod name → locked version string, from bullet lines in the `PODS:`
//!   section
//! - pod name → locked commit SHA, from the `CHECKOUT OPTIONS` entries
//!
//! Like the Podfile parser this is line-oriented and forgiving; lines that do
//! not match the grammar are skipped.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// `- Name (1.2.3)` — name charset covers subspecs like Firebase/Core
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s+([A-Za-z0-9_\-+./]+)\s*\(([^)]+)\)").unwrap());

// An indented bare identifier with a trailing colon opens a checkout entry
static CHECKOUT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+([A-Za-z0-9_\-+.]+):\s*$").unwrap());

// `:commit: abc123` (optionally quoted)
static COMMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":commit:\s*['"]?([0-9A-Fa-f]+)['"]?"#).unwrap());

/// Parsed lockfile contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockContents {
    /// Pod name → locked version string
    pub versions: HashMap<String, String>,
    /// Pod name → locked commit SHA (git-sourced pods)
    pub checkouts: HashMap<String, String>,
}

impl LockContents {
    /// Locked version for a pod, matched case-insensitively
    pub fn version_of(&self, name: &str) -> Option<&str> {
        lookup(&self.versions, name)
    }

    /// Locked commit SHA for a pod, matched case-insensitively
    pub fn checkout_of(&self, name: &str) -> Option<&str> {
        lookup(&self.checkouts, name)
    }
}

fn lookup<'a>(map: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    if let Some(value) = map.get(name) {
        return Some(value);
    }
    map.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Parses Podfile.lock text. Pure text in, structured result out; no I/O.
pub fn parse_lockfile(content: &str) -> LockContents {
    let mut lock = LockContents::default();
    let mut in_pods_section = false;
    let mut current_checkout: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        match trimmed {
            "PODS:" => {
                in_pods_section = true;
                continue;
            }
            "DEPENDENCIES:" | "SPEC REPOS:" => {
                in_pods_section = false;
                continue;
            }
            _ => {}
        }

        if in_pods_section {
            if let Some(caps) = BULLET_RE.captures(line) {
                let name = caps[1].split('/').next().unwrap_or(&caps[1]).to_string();
                lock.versions.insert(name, caps[2].to_string());
                continue;
            }
        }

        // Checkout entries are tracked independently of the section state
        if let Some(caps) = CHECKOUT_NAME_RE.captures(line) {
            current_checkout = Some(caps[1].to_string());
        } else if let Some(caps) = COMMIT_RE.captures(line) {
            if let Some(name) = current_checkout.take() {
                lock.checkouts.insert(name, caps[1].to_string());
            }
        }
    }

    lock
}

//! Podfile parser
//!
//! Line-oriented and forgiving: a line that does not match the `pod` grammar
//! is skipped, never an error. Handles:
//! - `pod 'Alamofire'`
//! - `pod 'Alamofire', '~> 5.4'`
//! - `pod 'Quick', '>= 1.0', '< 2.0'`
//! - `pod 'MyKit', :git => 'https://…', :branch => 'develop'`

use crate::domain::{GitRef, PodDependency, PodSource, Requirement};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// A dependency declaration: `pod 'Name'` plus whatever options follow
static POD_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^pod\s+['"]([^'"]+)['"](.*)$"#).unwrap());

// Quoted tokens in the options tail
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"]([^'"]*)['"]"#).unwrap());

// Git source markers, both `:git => '…'` and `git: '…'` syntax
static GIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?::git\s*=>|\bgit:)\s*['"]([^'"]+)['"]"#).unwrap());
static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?::branch\s*=>|\bbranch:)\s*['"]([^'"]+)['"]"#).unwrap());
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?::tag\s*=>|\btag:)\s*['"]([^'"]+)['"]"#).unwrap());
static COMMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?::commit\s*=>|\bcommit:)\s*['"]([^'"]+)['"]"#).unwrap());

/// Branch assumed when a git source names no ref
const DEFAULT_BRANCH: &str = "main";

/// Parses Podfile text into dependencies keyed by name.
///
/// Pure text in, structured result out; no I/O. When a name repeats, the
/// last declaration wins.
pub fn parse_podfile(content: &str) -> HashMap<String, PodDependency> {
    let mut pods = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        let Some(caps) = POD_LINE_RE.captures(line) else {
            continue;
        };

        let name = caps[1].to_string();
        let tail = caps.get(2).map_or("", |m| m.as_str());

        let dependency = if let Some(git) = GIT_RE.captures(tail) {
            let url = git[1].to_string();
            let reference = git_reference(tail);
            PodDependency::git(name.clone(), url, reference)
        } else {
            let tokens: Vec<&str> = QUOTED_RE
                .captures_iter(tail)
                .take(2)
                .filter_map(|c| c.get(1).map(|m| m.as_str()))
                .collect();
            PodDependency::trunk(name.clone(), Requirement::parse_tokens(&tokens))
        };

        pods.insert(name, dependency);
    }

    pods
}

/// Picks the git ref with precedence branch > tag > commit > default branch
fn git_reference(tail: &str) -> GitRef {
    if let Some(caps) = BRANCH_RE.captures(tail) {
        GitRef::Branch(caps[1].to_string())
    } else if let Some(caps) = TAG_RE.captures(tail) {
        GitRef::Tag(caps[1].to_string())
    } else if let Some(caps) = COMMIT_RE.captures(tail) {
        GitRef::Commit(caps[1].to_string())
    } else {
        GitRef::Branch(DEFAULT_BRANCH.to_string())
    }
}

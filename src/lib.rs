//! podup - CocoaPods dependency update checker library
//!
//! This library reports what `pod update` would do without touching the
//! project:
//! - parses the Podfile for declared pods, constraints, and git sources
//! - parses Podfile.lock for resolved versions and checked-out commits
//! - queries `pod trunk info` and `git ls-remote` for the latest state
//! - classifies every pod and renders a table or JSON report

pub mod cli;
pub mod domain;
pub mod error;
pub mod output;
pub mod parser;
pub mod progress;
pub mod report;
pub mod resolver;

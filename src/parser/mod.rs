//! Text parsers for the CocoaPods manifest and lockfile
//!
//! Both parsers are pure `text -> structured result` functions with no I/O,
//! so they can be unit-tested against literal fixture strings. Both are
//! line-oriented and forgiving: lines that do not match the expected grammar
//! are skipped silently, favoring partial results over strict validation.

mod lockfile;
mod podfile;

pub use lockfile::{parse_lockfile, LockContents};
pub use podfile::parse_podfile;

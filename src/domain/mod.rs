//! Core domain models for podup
//!
//! This module contains the fundamental types used throughout the application:
//! - Pod version values with CocoaPods ordering
//! - Requirement expressions for version constraints
//! - Declared dependency and source structures
//! - Report rows and status classification

mod dependency;
mod requirement;
mod row;
mod version;

pub use dependency::{GitRef, PodDependency, PodSource};
pub use requirement::{Bound, BoundOp, Requirement};
pub use row::{PodStatus, ReportRow};
pub use version::PodVersion;

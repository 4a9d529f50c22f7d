//! Process-lifetime cache of discovered version lists
//!
//! Keyed by pod name, populated on the first successful trunk query and read
//! on every later lookup in the same run. Guarded by a single mutex; duplicate
//! concurrent queries for the same name are tolerated (last write wins).
//! Nothing is persisted across runs.

use crate::domain::PodVersion;
use std::collections::HashMap;
use std::sync::Mutex;

/// Concurrency-safe name → version-list cache
#[derive(Debug, Default)]
pub struct VersionCache {
    inner: Mutex<HashMap<String, Vec<PodVersion>>>,
}

impl VersionCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached version list for a pod, if any
    pub fn get(&self, name: &str) -> Option<Vec<PodVersion>> {
        self.inner
            .lock()
            .expect("version cache lock poisoned")
            .get(name)
            .cloned()
    }

    /// Stores a version list for a pod, replacing any previous entry
    pub fn put(&self, name: &str, versions: Vec<PodVersion>) {
        self.inner
            .lock()
            .expect("version cache lock poisoned")
            .insert(name.to_string(), versions);
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.inner.lock().expect("version cache lock poisoned").len()
    }

    /// True when nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

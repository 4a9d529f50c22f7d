//! Report assembly: joining Podfile, lockfile, and resolver output
//!
//! One row per pod in the union of the Podfile and lockfile key sets. Rows
//! are evaluated concurrently (bounded worker pool) since the only shared
//! state is the resolver cache. Query failures degrade the affected row to
//! `Unknown`/`NotInstalled`; they never abort the report.

mod filter;

pub use filter::only_outdated;

use crate::domain::{
    PodDependency, PodSource, PodStatus, PodVersion, ReportRow, Requirement,
};
use crate::parser::LockContents;
use crate::progress::Progress;
use crate::resolver::Resolver;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Upper limit on concurrent external queries
const MAX_CONCURRENT_QUERIES: usize = 8;

/// Builds the per-pod update report
pub struct ReportBuilder {
    resolver: Arc<Resolver>,
    allow_prerelease: bool,
}

impl ReportBuilder {
    /// Creates a builder over a shared resolver
    pub fn new(resolver: Arc<Resolver>, allow_prerelease: bool) -> Self {
        Self {
            resolver,
            allow_prerelease,
        }
    }

    /// Produces one row per pod, sorted case-insensitively by name
    pub async fn build(
        &self,
        manifest: &HashMap<String, PodDependency>,
        lock: &LockContents,
        progress: &mut Progress,
    ) -> Vec<ReportRow> {
        let names = union_of_names(manifest, lock);
        if names.is_empty() {
            return Vec::new();
        }

        progress.start(names.len() as u64, "Checking pods");

        let permits = names.len().min(MAX_CONCURRENT_QUERIES);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut set = JoinSet::new();

        for name in names {
            let dependency = manifest
                .get(&name)
                .cloned()
                .unwrap_or_else(|| PodDependency::implicit(name.clone()));
            let locked_version = lock.version_of(&name).map(str::to_string);
            let locked_commit = lock.checkout_of(&name).map(str::to_string);
            let resolver = self.resolver.clone();
            let semaphore = semaphore.clone();
            let allow_prerelease = self.allow_prerelease;

            set.spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                evaluate(
                    resolver,
                    name,
                    dependency,
                    locked_version,
                    locked_commit,
                    allow_prerelease,
                )
                .await
            });
        }

        let mut rows = Vec::new();
        while let Some(joined) = set.join_next().await {
            if let Ok(row) = joined {
                progress.inc();
                rows.push(row);
            }
        }
        progress.finish_and_clear();

        rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        rows
    }
}

/// Union of manifest and lock names, deduplicated case-insensitively with
/// the manifest's casing preferred, sorted case-insensitively
fn union_of_names(manifest: &HashMap<String, PodDependency>, lock: &LockContents) -> Vec<String> {
    let mut names: Vec<String> = manifest.keys().cloned().collect();
    for name in lock.versions.keys().chain(lock.checkouts.keys()) {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            names.push(name.clone());
        }
    }
    names.sort_by_key(|n| n.to_lowercase());
    names.dedup();
    names
}

/// Evaluates a single pod into a report row
async fn evaluate(
    resolver: Arc<Resolver>,
    name: String,
    dependency: PodDependency,
    locked_version: Option<String>,
    locked_commit: Option<String>,
    allow_prerelease: bool,
) -> ReportRow {
    let constraint = dependency.requirement.to_string();
    let source = dependency.source.to_string();

    match &dependency.source {
        PodSource::Trunk => {
            evaluate_trunk(
                resolver,
                name,
                &dependency.requirement,
                locked_version,
                constraint,
                source,
                allow_prerelease,
            )
            .await
        }
        PodSource::Git { url, reference } => {
            let head = resolver.git_head(url, reference).await;
            evaluate_git(name, locked_commit, locked_version, head, constraint, source)
        }
    }
}

async fn evaluate_trunk(
    resolver: Arc<Resolver>,
    name: String,
    requirement: &Requirement,
    locked_version: Option<String>,
    constraint: String,
    source: String,
    allow_prerelease: bool,
) -> ReportRow {
    let mut note = String::new();
    if requirement.is_raw() {
        note = "constraint not evaluated; treated as satisfied".to_string();
    }

    let mut candidates = match resolver.trunk_versions(&name).await {
        Some(versions) => versions,
        None => {
            let status = if locked_version.is_some() {
                PodStatus::Unknown
            } else {
                PodStatus::NotInstalled
            };
            return ReportRow {
                name,
                locked: locked_version,
                constraint,
                source,
                latest_satisfying: None,
                latest: None,
                would_update: false,
                status,
                note: "trunk lookup failed".to_string(),
            };
        }
    };

    if !allow_prerelease {
        candidates.retain(|v| !v.is_prerelease());
    }

    if candidates.is_empty() {
        return ReportRow {
            name,
            locked: locked_version.clone(),
            constraint,
            source,
            latest_satisfying: None,
            latest: None,
            would_update: false,
            status: if locked_version.is_some() {
                PodStatus::Unknown
            } else {
                PodStatus::NotInstalled
            },
            note: "only prerelease versions published".to_string(),
        };
    }

    // "latest" mirrors the raw trunk listing; entries compare as text there
    let latest = candidates
        .iter()
        .map(|v| v.to_string())
        .max()
        .unwrap_or_default();

    let latest_satisfying = match requirement {
        Requirement::Any => candidates.iter().max().cloned(),
        req => candidates
            .iter()
            .filter(|v| req.matches(v, allow_prerelease))
            .max()
            .cloned(),
    };

    if latest_satisfying.is_none() && note.is_empty() {
        note = "no published version satisfies the constraint".to_string();
    }

    let locked_parsed = locked_version
        .as_deref()
        .and_then(|s| PodVersion::parse(s, true));

    let status = match &locked_version {
        None => PodStatus::NotInstalled,
        Some(locked) if locked == &latest => PodStatus::UpToDate,
        Some(_) => PodStatus::Outdated,
    };

    let would_update = matches!(
        (&locked_parsed, &latest_satisfying),
        (Some(locked), Some(best)) if locked < best
    );

    ReportRow {
        name,
        locked: locked_version,
        constraint,
        source,
        latest_satisfying: latest_satisfying.map(|v| v.to_string()),
        latest: Some(latest),
        would_update,
        status,
        note,
    }
}

fn evaluate_git(
    name: String,
    locked_commit: Option<String>,
    locked_version: Option<String>,
    head: Option<String>,
    constraint: String,
    source: String,
) -> ReportRow {
    let locked = locked_commit.clone().or(locked_version);

    match head {
        Some(head) => {
            let (status, note) = match &locked_commit {
                Some(sha) if sha == &head => (PodStatus::UpToDate, String::new()),
                Some(_) => (PodStatus::Outdated, String::new()),
                None => (
                    PodStatus::Unknown,
                    "no checkout recorded in lockfile".to_string(),
                ),
            };
            let would_update = locked_commit.as_deref().is_some_and(|sha| sha != head);

            ReportRow {
                name,
                locked,
                constraint,
                source,
                latest_satisfying: Some(head.clone()),
                latest: Some(head),
                would_update,
                status,
                note,
            }
        }
        None => ReportRow {
            name,
            locked: locked.clone(),
            constraint,
            source,
            latest_satisfying: None,
            latest: None,
            would_update: false,
            status: if locked.is_some() {
                PodStatus::Unknown
            } else {
                PodStatus::NotInstalled
            },
            note: "could not resolve remote ref".to_string(),
        },
    }
}

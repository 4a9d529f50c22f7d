//! Version resolution against external authorities
//!
//! Two independent query paths with distinct failure handling:
//! - trunk-hosted pods: `pod trunk info <name>` via subprocess, output parsed
//!   for the full version list, memoized per pod name for the process
//!   lifetime
//! - git-hosted pods: `git ls-remote` for the head commit of a branch or tag;
//!   pinned commits resolve locally
//!
//! Both paths are read-only. Failures produce `None`, never an error; the
//! report degrades the affected row instead of aborting.

mod cache;
mod git;
mod runner;
mod trunk;

pub use cache::VersionCache;
pub use runner::{
    CommandError, CommandOutput, CommandRunner, SystemRunner, DEFAULT_COMMAND_TIMEOUT,
};

#[cfg(test)]
pub(crate) use runner::testing::ScriptedRunner;

use crate::domain::{GitRef, PodVersion};
use std::sync::Arc;

/// Resolves latest versions and head commits, caching trunk listings
pub struct Resolver {
    runner: Arc<dyn CommandRunner>,
    cache: VersionCache,
    verbose: bool,
}

impl Resolver {
    /// Creates a resolver over the given command runner
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            cache: VersionCache::new(),
            verbose: false,
        }
    }

    /// Enables diagnostic logging to stderr (builder pattern)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Full published version list for a trunk-hosted pod.
    ///
    /// Cache first; on miss the trunk CLI is invoked and its stdout parsed
    /// regardless of exit code. `None` means the query failed or yielded no
    /// versions; successful results populate the cache.
    pub async fn trunk_versions(&self, name: &str) -> Option<Vec<PodVersion>> {
        if let Some(versions) = self.cache.get(name) {
            if self.verbose {
                eprintln!("podup: cache hit for {}", name);
            }
            return Some(versions);
        }

        if self.verbose {
            eprintln!("podup: querying trunk for {}", name);
        }

        let output = match self
            .runner
            .run(trunk::TRUNK_PROGRAM, &trunk::trunk_info_args(name))
            .await
        {
            Ok(output) => output,
            Err(e) => {
                if self.verbose {
                    eprintln!("podup: trunk query for {} failed: {}", name, e);
                }
                return None;
            }
        };

        let versions = trunk::parse_trunk_versions(&output.stdout);
        if versions.is_empty() {
            return None;
        }

        self.cache.put(name, versions.clone());
        Some(versions)
    }

    /// Head commit for a git-hosted pod's ref.
    ///
    /// Pinned commits return directly. Branch and tag refs run
    /// `git ls-remote`; a failed HTTPS query is retried once with a bearer
    /// token from [`git::GIT_TOKEN_ENV`] before giving up.
    pub async fn git_head(&self, url: &str, reference: &GitRef) -> Option<String> {
        let spec = match git::refspec(reference) {
            Some(spec) => spec,
            None => {
                if let GitRef::Commit(sha) = reference {
                    return Some(sha.clone());
                }
                return None;
            }
        };

        if self.verbose {
            eprintln!("podup: listing {} {}", url, spec);
        }

        if let Some(hash) = self.ls_remote(&git::ls_remote_args(url, &spec)).await {
            return Some(hash);
        }

        if url.starts_with("https://") {
            if let Ok(token) = std::env::var(git::GIT_TOKEN_ENV) {
                if self.verbose {
                    eprintln!("podup: retrying {} with bearer token", url);
                }
                return self
                    .ls_remote(&git::ls_remote_args_with_token(url, &spec, &token))
                    .await;
            }
        }

        None
    }

    async fn ls_remote(&self, args: &[String]) -> Option<String> {
        match self.runner.run(git::GIT_PROGRAM, args).await {
            Ok(output) => git::parse_ls_remote(&output.stdout),
            Err(e) => {
                if self.verbose {
                    eprintln!("podup: git query failed: {}", e);
                }
                None
            }
        }
    }
}

//! Declared dependency structures

use super::Requirement;
use std::fmt;

/// Where a pod is resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodSource {
    /// Published to the CocoaPods trunk registry
    Trunk,
    /// Pinned to a remote git repository
    Git { url: String, reference: GitRef },
}

/// The ref a git-sourced pod follows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef {
    Branch(String),
    Tag(String),
    Commit(String),
}

impl fmt::Display for PodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodSource::Trunk => write!(f, "trunk"),
            PodSource::Git { reference, .. } => match reference {
                GitRef::Branch(name) => write!(f, "git (branch {})", name),
                GitRef::Tag(name) => write!(f, "git (tag {})", name),
                GitRef::Commit(sha) => write!(f, "git (commit {})", sha),
            },
        }
    }
}

/// One dependency declared in the Podfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodDependency {
    /// Pod name as written in the Podfile
    pub name: String,
    /// Declared version requirement
    pub requirement: Requirement,
    /// Declared source
    pub source: PodSource,
}

impl PodDependency {
    /// Creates a trunk-hosted dependency
    pub fn trunk(name: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            source: PodSource::Trunk,
        }
    }

    /// Creates a git-hosted dependency
    pub fn git(name: impl Into<String>, url: impl Into<String>, reference: GitRef) -> Self {
        Self {
            name: name.into(),
            requirement: Requirement::Any,
            source: PodSource::Git {
                url: url.into(),
                reference,
            },
        }
    }

    /// Default spec for a pod that only appears in the lockfile
    pub fn implicit(name: impl Into<String>) -> Self {
        Self::trunk(name, Requirement::Any)
    }
}

impl fmt::Display for PodDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PodVersion;

    #[test]
    fn test_trunk_constructor() {
        let dep = PodDependency::trunk(
            "Alamofire",
            Requirement::Compatible(PodVersion::new(5, 4, 0)),
        );
        assert_eq!(dep.name, "Alamofire");
        assert_eq!(dep.source, PodSource::Trunk);
    }

    #[test]
    fn test_git_constructor_defaults_to_any() {
        let dep = PodDependency::git(
            "MyKit",
            "https://github.com/acme/mykit.git",
            GitRef::Branch("develop".to_string()),
        );
        assert_eq!(dep.requirement, Requirement::Any);
        assert!(matches!(dep.source, PodSource::Git { .. }));
    }

    #[test]
    fn test_implicit_is_unconstrained_trunk() {
        let dep = PodDependency::implicit("FBSnapshotTestCase");
        assert_eq!(dep.requirement, Requirement::Any);
        assert_eq!(dep.source, PodSource::Trunk);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(PodSource::Trunk.to_string(), "trunk");

        let git = PodSource::Git {
            url: "https://example.com/repo.git".to_string(),
            reference: GitRef::Branch("develop".to_string()),
        };
        assert_eq!(git.to_string(), "git (branch develop)");

        let tag = PodSource::Git {
            url: "https://example.com/repo.git".to_string(),
            reference: GitRef::Tag("1.0.0".to_string()),
        };
        assert_eq!(tag.to_string(), "git (tag 1.0.0)");
    }

    #[test]
    fn test_dependency_display() {
        let dep = PodDependency::trunk("SnapKit", Requirement::Any);
        assert_eq!(dep.to_string(), "SnapKit [trunk]");
    }
}

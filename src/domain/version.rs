//! Pod version type with CocoaPods ordering semantics
//!
//! Handles versions like `1.2.3`, `1.2`, `1` (missing components default to 0)
//! and prerelease forms like `1.2.3-beta.1`. A release always sorts above a
//! prerelease of the same numeric triple.

use std::cmp::Ordering;
use std::fmt;

/// An immutable major.minor.patch version with an optional prerelease tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PodVersion {
    /// Major component
    pub major: u64,
    /// Minor component (0 when absent)
    pub minor: u64,
    /// Patch component (0 when absent)
    pub patch: u64,
    /// Prerelease tag, e.g. `beta.1` for `1.2.3-beta.1`
    pub prerelease: Option<String>,
}

impl PodVersion {
    /// Creates a version from its numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Attaches a prerelease tag (builder pattern)
    pub fn with_prerelease(mut self, tag: impl Into<String>) -> Self {
        self.prerelease = Some(tag.into());
        self
    }

    /// Parses a version string.
    ///
    /// Returns `None` if the major segment is absent or non-numeric, or if a
    /// prerelease tag is present while `allow_prerelease` is false.
    pub fn parse(text: &str, allow_prerelease: bool) -> Option<Self> {
        let text = text.trim();
        let (numeric, prerelease) = match text.split_once('-') {
            Some((n, pre)) if !pre.is_empty() => (n, Some(pre.to_string())),
            Some((n, _)) => (n, None),
            None => (text, None),
        };

        if prerelease.is_some() && !allow_prerelease {
            return None;
        }

        let mut parts = numeric.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(s) => s.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(s) => s.parse().ok()?,
            None => 0,
        };

        Some(Self {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// Returns true if this version carries a prerelease tag
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// The first version the pessimistic (`~>`) operator considers breaking.
    ///
    /// A non-zero patch bumps the minor, otherwise the major is bumped.
    pub fn next_breaking(&self) -> Self {
        if self.patch != 0 {
            Self::new(self.major, self.minor + 1, 0)
        } else {
            Self::new(self.major + 1, 0, 0)
        }
    }
}

impl Ord for PodVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                // a release outranks a prerelease of the same triple
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for PodVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PodVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> PodVersion {
        PodVersion::parse(text, true).unwrap()
    }

    #[test]
    fn test_parse_full_triple() {
        let ver = v("1.2.3");
        assert_eq!(ver.major, 1);
        assert_eq!(ver.minor, 2);
        assert_eq!(ver.patch, 3);
        assert!(ver.prerelease.is_none());
    }

    #[test]
    fn test_parse_missing_components_default_to_zero() {
        assert_eq!(v("1.2"), PodVersion::new(1, 2, 0));
        assert_eq!(v("1"), PodVersion::new(1, 0, 0));
    }

    #[test]
    fn test_parse_prerelease() {
        let ver = v("1.2.3-beta.1");
        assert_eq!(ver.prerelease.as_deref(), Some("beta.1"));
    }

    #[test]
    fn test_parse_prerelease_disallowed() {
        assert!(PodVersion::parse("1.2.3-beta.1", false).is_none());
        assert!(PodVersion::parse("1.2.3", false).is_some());
    }

    #[test]
    fn test_parse_invalid_major() {
        assert!(PodVersion::parse("", true).is_none());
        assert!(PodVersion::parse("abc", true).is_none());
        assert!(PodVersion::parse("x.2.3", true).is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(v("  5.4.0 "), PodVersion::new(5, 4, 0));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["1.2.3", "0.0.1", "10.20.30", "1.2.3-beta.1", "2.0.0-rc1"] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[test]
    fn test_ordering_chain() {
        assert!(v("1.2.3") < v("1.2.4"));
        assert!(v("1.2.4") < v("1.3.0"));
        assert!(v("1.3.0") < v("2.0.0"));
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        assert!(v("1.2.3-beta") < v("1.2.3"));
        assert!(v("1.2.3-alpha") < v("1.2.3-beta"));
        assert!(v("1.2.3-beta") > v("1.2.2"));
    }

    #[test]
    fn test_short_form_equals_padded_form() {
        assert_eq!(v("1.2"), v("1.2.0"));
    }

    #[test]
    fn test_next_breaking_nonzero_patch_bumps_minor() {
        assert_eq!(v("1.2.3").next_breaking(), PodVersion::new(1, 3, 0));
    }

    #[test]
    fn test_next_breaking_zero_patch_bumps_major() {
        assert_eq!(v("1.0.0").next_breaking(), PodVersion::new(2, 0, 0));
        assert_eq!(v("5.4.0").next_breaking(), PodVersion::new(6, 0, 0));
    }

    #[test]
    fn test_with_prerelease_builder() {
        let ver = PodVersion::new(1, 2, 3).with_prerelease("rc1");
        assert_eq!(ver.to_string(), "1.2.3-rc1");
    }
}

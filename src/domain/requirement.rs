//! Version requirement expressions from Podfile constraints
//!
//! Handles:
//! - Pessimistic constraints: `~> 5.4`, `~> 5.4.1`
//! - Exact versions: `= 1.2.3`, `1.2.3`
//! - Single bounds: `>= 1.0`, `< 2.0`
//! - Two-token ranges: `'>= 1.0', '< 2.0'`
//! - Anything else falls back to `Raw` and is never used for update
//!   computation

use super::PodVersion;
use std::fmt;

/// Comparison operator of a range bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundOp {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl BoundOp {
    fn symbol(self) -> &'static str {
        match self {
            BoundOp::Greater => ">",
            BoundOp::GreaterOrEqual => ">=",
            BoundOp::Less => "<",
            BoundOp::LessOrEqual => "<=",
        }
    }

    /// True for `>` / `>=`, which supply a lower bound
    fn is_lower(self) -> bool {
        matches!(self, BoundOp::Greater | BoundOp::GreaterOrEqual)
    }
}

/// One side of a version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub op: BoundOp,
    pub version: PodVersion,
}

impl Bound {
    /// Parses a bound token like `>= 1.0.0` or `<2.0`
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (op, rest) = if let Some(rest) = token.strip_prefix(">=") {
            (BoundOp::GreaterOrEqual, rest)
        } else if let Some(rest) = token.strip_prefix("<=") {
            (BoundOp::LessOrEqual, rest)
        } else if let Some(rest) = token.strip_prefix('>') {
            (BoundOp::Greater, rest)
        } else if let Some(rest) = token.strip_prefix('<') {
            (BoundOp::Less, rest)
        } else {
            return None;
        };

        let version = PodVersion::parse(rest, true)?;
        Some(Self { op, version })
    }

    /// Whether a version lies on the admitted side of this bound
    pub fn admits(&self, version: &PodVersion) -> bool {
        match self.op {
            BoundOp::Greater => version > &self.version,
            BoundOp::GreaterOrEqual => version >= &self.version,
            BoundOp::Less => version < &self.version,
            BoundOp::LessOrEqual => version <= &self.version,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op.symbol(), self.version)
    }
}

/// A requirement over a pod version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// No constraint declared; always matches
    Any,
    /// Exactly this version
    Exact(PodVersion),
    /// Pessimistic range: `v <= x < v.next_breaking()`
    Compatible(PodVersion),
    /// Explicit lower/upper bounds; the raw text is kept for display
    Range {
        lower: Option<Bound>,
        upper: Option<Bound>,
        raw: String,
    },
    /// Unparseable constraint text. Reports `matches = true`; callers must
    /// treat this as "cannot evaluate", not "is satisfied".
    Raw(String),
}

impl Requirement {
    /// Parses the quoted constraint tokens following a pod name.
    ///
    /// Zero tokens mean unconstrained; one token is a single constraint; two
    /// tokens are combined into a range. Tokens that fit no known shape fall
    /// back to `Raw`.
    pub fn parse_tokens(tokens: &[&str]) -> Self {
        match tokens {
            [] => Requirement::Any,
            [single] => Self::parse_single(single),
            pair => Self::parse_pair(pair),
        }
    }

    fn parse_single(token: &str) -> Self {
        let token = token.trim();

        if let Some(rest) = token.strip_prefix("~>") {
            if let Some(version) = PodVersion::parse(rest, true) {
                return Requirement::Compatible(version);
            }
            return Requirement::Raw(token.to_string());
        }

        if let Some(rest) = token.strip_prefix('=') {
            if let Some(version) = PodVersion::parse(rest, true) {
                return Requirement::Exact(version);
            }
            return Requirement::Raw(token.to_string());
        }

        if let Some(bound) = Bound::parse(token) {
            let raw = token.to_string();
            return if bound.op.is_lower() {
                Requirement::Range {
                    lower: Some(bound),
                    upper: None,
                    raw,
                }
            } else {
                Requirement::Range {
                    lower: None,
                    upper: Some(bound),
                    raw,
                }
            };
        }

        if let Some(version) = PodVersion::parse(token, true) {
            return Requirement::Exact(version);
        }

        Requirement::Raw(token.to_string())
    }

    fn parse_pair(tokens: &[&str]) -> Self {
        let raw = tokens
            .iter()
            .map(|t| t.trim())
            .collect::<Vec<_>>()
            .join(", ");

        let mut lower: Option<Bound> = None;
        let mut upper: Option<Bound> = None;
        for token in tokens {
            if let Some(bound) = Bound::parse(token) {
                let slot = if bound.op.is_lower() {
                    &mut lower
                } else {
                    &mut upper
                };
                // two bounds on the same side is not a range we can evaluate
                if slot.is_some() {
                    return Requirement::Raw(raw);
                }
                *slot = Some(bound);
            }
        }

        if lower.is_none() && upper.is_none() {
            return Requirement::Raw(raw);
        }

        Requirement::Range { lower, upper, raw }
    }

    /// Whether a version satisfies this requirement.
    ///
    /// Prerelease versions are rejected up front unless `allow_prerelease`.
    pub fn matches(&self, version: &PodVersion, allow_prerelease: bool) -> bool {
        if version.is_prerelease() && !allow_prerelease {
            return false;
        }

        match self {
            Requirement::Any => true,
            Requirement::Exact(expected) => version == expected,
            Requirement::Compatible(base) => {
                version >= base && version < &base.next_breaking()
            }
            Requirement::Range { lower, upper, .. } => {
                lower.as_ref().is_none_or(|b| b.admits(version))
                    && upper.as_ref().is_none_or(|b| b.admits(version))
            }
            Requirement::Raw(_) => true,
        }
    }

    /// True when the constraint text could not be understood
    pub fn is_raw(&self) -> bool {
        matches!(self, Requirement::Raw(_))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Any => Ok(()),
            Requirement::Exact(v) => write!(f, "= {}", v),
            Requirement::Compatible(v) => write!(f, "~> {}", v),
            Requirement::Range { raw, .. } => write!(f, "{}", raw),
            Requirement::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

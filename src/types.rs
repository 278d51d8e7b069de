/// Core data structures for extracted version metadata
///
/// This module defines the values that flow from the git extractor to the
/// source emitter and the CLI summary.
use serde::{Deserialize, Serialize};

/// Sentinel used for every string field when no revision could be read
pub const UNKNOWN: &str = "Unknown";

/// Number of characters kept in the short revision
pub const SHORT_REVISION_LEN: usize = 8;

/// Working-tree cleanliness, only computed by the extended variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanState {
    /// No differences at all, untracked files included
    pub strict_clean: bool,
    /// No differences except untracked files
    pub loose_clean: bool,
}

/// Version metadata for the current HEAD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    pub branch: String,
    pub revision_full: String,
    pub revision_short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<CleanState>,
}

impl RevisionInfo {
    /// Build from a branch and a full commit id, deriving the short revision
    pub fn new(branch: impl Into<String>, revision_full: impl Into<String>, clean: Option<CleanState>) -> Self {
        let revision_full = revision_full.into();
        let revision_short = short_revision(&revision_full);
        RevisionInfo { branch: branch.into(), revision_full, revision_short, clean }
    }

    /// Placeholder emitted when the repository is missing or unreadable.
    ///
    /// With `with_clean_state` the boolean fields are present and false, so code
    /// compiled against the extended variant keeps building.
    pub fn unknown(with_clean_state: bool) -> Self {
        RevisionInfo {
            branch: UNKNOWN.to_string(),
            revision_full: UNKNOWN.to_string(),
            revision_short: UNKNOWN.to_string(),
            clean: with_clean_state.then_some(CleanState { strict_clean: false, loose_clean: false }),
        }
    }
}

/// First eight characters of a commit id; shorter ids are returned whole
pub fn short_revision(revision_full: &str) -> String {
    revision_full.chars().take(SHORT_REVISION_LEN).collect()
}

/// Why extraction fell back to the sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum DegradeCause {
    /// No `.git` anywhere between the project dir and the filesystem root
    NoRepository,
    /// Open, resolve or status failure swallowed under the soft policy
    Failed(String),
}

impl std::fmt::Display for DegradeCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegradeCause::NoRepository => write!(f, "no git repository found"),
            DegradeCause::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// Result of an extraction under a given failure policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Resolved { info: RevisionInfo },
    Degraded { sentinel: RevisionInfo, cause: DegradeCause },
}

impl Outcome {
    /// The record to render, real or sentinel
    pub fn info(&self) -> &RevisionInfo {
        match self {
            Outcome::Resolved { info } => info,
            Outcome::Degraded { sentinel, .. } => sentinel,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_revision_takes_eight_chars() {
        let info = RevisionInfo::new("main", "abcdef1234567890", None);
        assert_eq!(info.revision_short, "abcdef12");
        assert!(info.revision_full.starts_with(&info.revision_short));
    }

    #[test]
    fn test_short_revision_keeps_short_ids_whole() {
        assert_eq!(short_revision("abc"), "abc");
        assert_eq!(short_revision(""), "");
    }

    #[test]
    fn test_unknown_without_clean_state() {
        let info = RevisionInfo::unknown(false);
        assert_eq!(info.branch, "Unknown");
        assert_eq!(info.revision_full, "Unknown");
        assert_eq!(info.revision_short, "Unknown");
        assert!(info.clean.is_none());
    }

    #[test]
    fn test_unknown_with_clean_state_is_not_clean() {
        let info = RevisionInfo::unknown(true);
        assert_eq!(info.clean, Some(CleanState { strict_clean: false, loose_clean: false }));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = Outcome::Degraded { sentinel: RevisionInfo::unknown(false), cause: DegradeCause::NoRepository };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["cause"]["kind"], "no-repository");
        assert_eq!(json["sentinel"]["branch"], "Unknown");
        assert!(json["sentinel"].get("clean").is_none());
    }
}

//! Validation verdict for a single (diff, message) pair

use serde::{Deserialize, Serialize};

use super::{CommitQuality, DiffStats, IssueTag};

/// Accept/reject decision with reasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// True iff `issues` is empty
    pub valid: bool,
    /// Issues in the order the checks ran
    pub issues: Vec<IssueTag>,
    /// Present whenever the diff was non-empty
    pub diff_stats: Option<DiffStats>,
    /// Present whenever the message was non-empty
    pub commit_analysis: Option<CommitQuality>,
}

impl ValidationVerdict {
    /// Whether a specific issue fired
    #[must_use]
    pub fn has(&self, issue: IssueTag) -> bool {
        self.issues.contains(&issue)
    }
}

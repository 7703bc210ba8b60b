//! Dataset-level validation report

use serde::{Deserialize, Serialize};

use super::{IssueCount, IssueTag};

/// Summary of validating a whole corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Samples seen
    pub total_samples: usize,
    /// Samples with no issues
    pub valid_samples: usize,
    /// `total_samples - valid_samples`
    pub invalid_samples: usize,
    /// `valid_samples / total_samples`, or 0 for an empty corpus
    pub validity_rate: f64,
    /// Issue frequencies, most common first
    pub common_issues: Vec<IssueCount>,
}

impl DatasetReport {
    /// Count recorded for an issue, 0 if it never fired
    #[must_use]
    pub fn issue_count(&self, issue: IssueTag) -> usize {
        self.common_issues
            .iter()
            .find(|c| c.issue == issue)
            .map_or(0, |c| c.count)
    }
}

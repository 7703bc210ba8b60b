//! Diff/message samples
//!
//! A sample is what flows in from a history reader or a dataset file. The
//! text fields accept the alternative names used by public commit datasets
//! (`patch`, `message`). When both names are present `diff` wins over
//! `patch` and `message` wins over `commit_message`; `null` counts as
//! missing.

use serde::{Deserialize, Serialize};

/// One (diff, commit message) pair plus optional provenance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSample")]
pub struct Sample {
    /// Unified diff text
    pub diff: String,
    /// Commit message text
    pub commit_message: String,
    /// Commit SHA the pair was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author date (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Wire form of a sample as found in dataset files
#[derive(Deserialize)]
struct RawSample {
    diff: Option<String>,
    patch: Option<String>,
    message: Option<String>,
    commit_message: Option<String>,
    commit_hash: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

impl From<RawSample> for Sample {
    fn from(raw: RawSample) -> Self {
        Self {
            diff: raw.diff.or(raw.patch).unwrap_or_default(),
            commit_message: raw.message.or(raw.commit_message).unwrap_or_default(),
            commit_hash: raw.commit_hash,
            author: raw.author,
            date: raw.date,
        }
    }
}

impl Sample {
    /// Create a sample with no provenance
    #[must_use]
    pub fn new(diff: impl Into<String>, commit_message: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            commit_message: commit_message.into(),
            ..Self::default()
        }
    }
}

//! Validation issue tags
//!
//! Each tag names one reason a (diff, message) pair was rejected.

use serde::{Deserialize, Serialize};

/// A reason a sample failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    /// Diff is empty or whitespace
    EmptyDiff,
    /// Diff has no added or removed lines
    MeaninglessDiff,
    /// Diff exceeds the character limit
    DiffTooLong,
    /// Message is empty or whitespace
    EmptyCommitMessage,
    /// Message is below the minimum length
    CommitMessageTooShort,
    /// Message exceeds the maximum length
    CommitMessageTooLong,
    /// Message contains more than three periods
    TooManySentences,
}

impl IssueTag {
    /// The snake_case literal used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyDiff => "empty_diff",
            Self::MeaninglessDiff => "meaningless_diff",
            Self::DiffTooLong => "diff_too_long",
            Self::EmptyCommitMessage => "empty_commit_message",
            Self::CommitMessageTooShort => "commit_message_too_short",
            Self::CommitMessageTooLong => "commit_message_too_long",
            Self::TooManySentences => "too_many_sentences",
        }
    }
}

impl std::fmt::Display for IssueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often an issue fired across a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCount {
    /// The issue
    pub issue: IssueTag,
    /// Number of invalid samples carrying it
    pub count: usize,
}

//! Commit categories
//!
//! Coarse classification of a commit message by keyword.

use serde::{Deserialize, Serialize};

/// Category assigned by [`categorize_commit_type`](crate::core::services::categorize_commit_type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitCategory {
    /// Bug fixes
    BugFix,
    /// New functionality
    Feature,
    /// Restructuring without behavior change
    Refactor,
    /// Documentation
    Docs,
    /// Tests
    Test,
    /// Formatting and linting
    Style,
    /// Build, CI and maintenance
    Chore,
    /// Speed improvements
    Performance,
    /// Security fixes
    Security,
    /// Nothing matched
    Other,
}

impl CommitCategory {
    /// The snake_case tag for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BugFix => "bug_fix",
            Self::Feature => "feature",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Style => "style",
            Self::Chore => "chore",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

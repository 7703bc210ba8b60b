//! Diff statistics
//!
//! Counters extracted from one unified diff. Built by
//! [`parse_diff_stats`](crate::core::services::parse_diff_stats) and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// Line and file counters for a unified diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of `diff --git` headers seen
    pub files_changed: usize,
    /// Added lines (`+`, excluding `+++` headers)
    pub insertions: usize,
    /// Removed lines (`-`, excluding `---` headers)
    pub deletions: usize,
    /// Always `insertions + deletions`
    pub lines_changed: usize,
    /// Lines reporting `Binary files ... differ`
    pub binary_files: usize,
    /// `new file mode` headers
    pub new_files: usize,
    /// `deleted file mode` headers
    pub deleted_files: usize,
    /// `+++` headers whose target is not `/dev/null`
    pub modified_files: usize,
}

impl DiffStats {
    /// Whether no counter was incremented
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

//! Commit history port
//!
//! Defines where raw (diff, message) samples come from.

use crate::core::models::Sample;

/// A source of commit samples
///
/// Implementations read version-control history or a stored dataset.
#[cfg_attr(test, mockall::automock)]
pub trait CommitSource: Send + Sync {
    /// Short human-readable description for logs
    fn describe(&self) -> String;

    /// Load every sample the source yields
    fn samples(&self) -> crate::Result<Vec<Sample>>;
}

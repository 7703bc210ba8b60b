//! Commit message quality record

use serde::{Deserialize, Serialize};

/// Upper bound of [`CommitQuality::quality_score`]
pub const MAX_QUALITY_SCORE: u8 = 10;

/// Advisory quality metadata for one commit message
///
/// Produced by [`analyze_commit_quality`](crate::core::services::analyze_commit_quality).
/// Nothing in the pipeline gates on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct CommitQuality {
    /// Length in characters
    pub length: usize,
    /// Contains at least one `.`
    pub has_period: bool,
    /// First character is an uppercase letter
    pub starts_capital: bool,
    /// First word is a known imperative verb
    pub has_imperative: bool,
    /// Shorter than 10 characters
    pub too_short: bool,
    /// Longer than 200 characters
    pub too_long: bool,
    /// Contains a digit
    pub has_numbers: bool,
    /// Contains characters outside letters, digits, whitespace and `.,!?-`
    pub has_special_chars: bool,
    /// Score in `0..=10`
    pub quality_score: u8,
}

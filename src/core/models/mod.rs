//! Domain models for commit-corpus
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`DiffStats`] - Counters parsed from a unified diff
//! - [`CommitQuality`] - Advisory quality record for a message
//! - [`CommitCategory`] - Keyword-based commit classification
//! - [`IssueTag`] - Why a pair was rejected
//! - [`ValidationVerdict`] - Per-pair decision
//! - [`Sample`] - A (diff, message) pair with provenance
//! - [`DatasetReport`] - Corpus-level summary

mod category;
mod diff_stats;
mod issue;
mod quality;
mod report;
mod sample;
mod verdict;

pub use category::CommitCategory;
pub use diff_stats::DiffStats;
pub use issue::{IssueCount, IssueTag};
pub use quality::{CommitQuality, MAX_QUALITY_SCORE};
pub use report::DatasetReport;
pub use sample::Sample;
pub use verdict::ValidationVerdict;

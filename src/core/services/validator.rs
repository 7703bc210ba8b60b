//! Pair validation
//!
//! Decides whether a (diff, message) sample is usable for training and
//! aggregates verdicts over a corpus.
//!
//! Per-sample verdicts are independent, so corpus validation can be split
//! into shards whose tallies are merged afterwards. Merging is additive and
//! keeps first-seen issue order, so sharded and sequential runs produce the
//! same report.

use std::num::NonZeroUsize;

use super::diff_parser::parse_diff_stats;
use super::normalizer::analyze_commit_quality;
use super::sanitizer::{DEFAULT_MIN_CHANGES, is_meaningful_diff};
use crate::core::models::{DatasetReport, IssueCount, IssueTag, Sample, ValidationVerdict};

/// Diffs longer than this many characters are rejected
pub const MAX_DIFF_CHARS: usize = 50_000;

/// Messages shorter than this many characters are rejected
pub const MIN_MESSAGE_CHARS: usize = 5;

/// Messages longer than this many characters are rejected
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Messages with more periods than this are rejected
pub const MAX_PERIODS: usize = 3;

/// Validate one (diff, message) pair
///
/// Diff checks and message checks are each a first-failure chain; the
/// period count is evaluated independently, so several issues may fire.
///
/// ```
/// use commit_corpus::core::models::IssueTag;
/// use commit_corpus::core::services::validate_diff_commit_pair;
///
/// let verdict = validate_diff_commit_pair("", "Fix bug.");
/// assert!(!verdict.valid);
/// assert!(verdict.has(IssueTag::EmptyDiff));
/// ```
#[must_use]
pub fn validate_diff_commit_pair(diff: &str, commit_message: &str) -> ValidationVerdict {
    let mut issues = Vec::new();

    if diff.trim().is_empty() {
        issues.push(IssueTag::EmptyDiff);
    } else if !is_meaningful_diff(diff, DEFAULT_MIN_CHANGES) {
        issues.push(IssueTag::MeaninglessDiff);
    } else if diff.chars().count() > MAX_DIFF_CHARS {
        issues.push(IssueTag::DiffTooLong);
    }

    let message_len = commit_message.chars().count();
    if commit_message.trim().is_empty() {
        issues.push(IssueTag::EmptyCommitMessage);
    } else if message_len < MIN_MESSAGE_CHARS {
        issues.push(IssueTag::CommitMessageTooShort);
    } else if message_len > MAX_MESSAGE_CHARS {
        issues.push(IssueTag::CommitMessageTooLong);
    }

    if commit_message.matches('.').count() > MAX_PERIODS {
        issues.push(IssueTag::TooManySentences);
    }

    ValidationVerdict {
        valid: issues.is_empty(),
        issues,
        diff_stats: (!diff.is_empty()).then(|| parse_diff_stats(diff)),
        commit_analysis: (!commit_message.is_empty())
            .then(|| analyze_commit_quality(commit_message)),
    }
}

/// Validate a [`Sample`]
#[must_use]
pub fn validate_sample(sample: &Sample) -> ValidationVerdict {
    validate_diff_commit_pair(&sample.diff, &sample.commit_message)
}

/// Running counts for corpus validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetTally {
    total: usize,
    valid: usize,
    issues: Vec<IssueCount>,
}

impl DatasetTally {
    /// Record one verdict
    pub fn record(&mut self, verdict: &ValidationVerdict) {
        self.total += 1;
        if verdict.valid {
            self.valid += 1;
            return;
        }
        for &issue in &verdict.issues {
            self.add_issue(issue, 1);
        }
    }

    fn add_issue(&mut self, issue: IssueTag, count: usize) {
        if let Some(entry) = self.issues.iter_mut().find(|c| c.issue == issue) {
            entry.count += count;
        } else {
            self.issues.push(IssueCount { issue, count });
        }
    }

    /// Fold another tally into this one
    ///
    /// Issues first seen only in `other` are appended after this tally's.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total += other.total;
        self.valid += other.valid;
        for entry in other.issues {
            self.add_issue(entry.issue, entry.count);
        }
        self
    }

    /// Samples recorded so far
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Finish into a report with issues sorted by descending count
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn into_report(self) -> DatasetReport {
        let mut common_issues = self.issues;
        // Stable sort: equal counts keep first-seen order.
        common_issues.sort_by(|a, b| b.count.cmp(&a.count));

        let validity_rate = if self.total > 0 {
            self.valid as f64 / self.total as f64
        } else {
            0.0
        };

        DatasetReport {
            total_samples: self.total,
            valid_samples: self.valid,
            invalid_samples: self.total - self.valid,
            validity_rate,
            common_issues,
        }
    }
}

fn tally(samples: &[Sample]) -> DatasetTally {
    samples.iter().fold(DatasetTally::default(), |mut tally, sample| {
        tally.record(&validate_sample(sample));
        tally
    })
}

/// Validate every sample and summarize
#[must_use]
pub fn validate_dataset(samples: &[Sample]) -> DatasetReport {
    tally(samples).into_report()
}

/// Number of shards actually used for `requested` shards over `samples`
///
/// Capped by the available parallelism and by the sample count; never 0.
#[must_use]
pub fn shard_count(requested: usize, samples: usize) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    requested.min(cores).min(samples).max(1)
}

/// Validate contiguous shards on scoped threads and merge in order
///
/// `shards` is clamped with [`shard_count`]. Produces the same report as
/// [`validate_dataset`].
#[must_use]
pub fn validate_dataset_sharded(samples: &[Sample], shards: usize) -> DatasetReport {
    let shards = shard_count(shards, samples.len());
    if shards <= 1 {
        return validate_dataset(samples);
    }

    let chunk_size = samples.len().div_ceil(shards);
    std::thread::scope(|scope| {
        let handles: Vec<_> = samples
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || tally(chunk)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .fold(DatasetTally::default(), DatasetTally::merge)
            .into_report()
    })
}

//! Tests for pair and dataset validation

use commit_corpus::core::models::{IssueTag, Sample};
use commit_corpus::core::services::{
    shard_count, validate_dataset, validate_dataset_sharded, validate_diff_commit_pair,
};

const ONE_LINE_DIFF: &str = "diff --git a/a.rs b/a.rs\n+++ b/a.rs\n+let x = 1;";

// =============================================================================
// PAIR VALIDATION
// =============================================================================

#[test]
fn test_empty_diff() {
    let verdict = validate_diff_commit_pair("", "Fix bug.");
    assert!(!verdict.valid);
    assert!(verdict.has(IssueTag::EmptyDiff));
    assert!(verdict.diff_stats.is_none());
    assert!(verdict.commit_analysis.is_some());
}

#[test]
fn test_message_too_short() {
    let verdict = validate_diff_commit_pair(ONE_LINE_DIFF, "Fix.");
    assert!(!verdict.valid);
    assert_eq!(verdict.issues, vec![IssueTag::CommitMessageTooShort]);
}

#[test]
fn test_meaningless_diff() {
    let verdict = validate_diff_commit_pair("diff --git a/x b/x\nindex 1..2", "Touch file x");
    assert_eq!(verdict.issues, vec![IssueTag::MeaninglessDiff]);
    assert_eq!(verdict.diff_stats.map(|s| s.files_changed), Some(1));
}

#[test]
fn test_diff_too_long() {
    let diff = format!("+{}", "a".repeat(50_000));
    let verdict = validate_diff_commit_pair(&diff, "Add a lot of a");
    assert_eq!(verdict.issues, vec![IssueTag::DiffTooLong]);

    let at_limit = format!("+{}", "a".repeat(49_999));
    assert!(validate_diff_commit_pair(&at_limit, "Add a lot of a").valid);
}

#[test]
fn test_message_too_long() {
    let message = "a".repeat(301);
    let verdict = validate_diff_commit_pair(ONE_LINE_DIFF, &message);
    assert_eq!(verdict.issues, vec![IssueTag::CommitMessageTooLong]);
    assert!(validate_diff_commit_pair(ONE_LINE_DIFF, &"a".repeat(300)).valid);
}

#[test]
fn test_too_many_sentences_is_independent() {
    let verdict = validate_diff_commit_pair("", "");
    assert_eq!(verdict.issues, vec![IssueTag::EmptyDiff, IssueTag::EmptyCommitMessage]);

    let verdict = validate_diff_commit_pair("", "a.b.c.d.e");
    assert_eq!(verdict.issues, vec![IssueTag::EmptyDiff, IssueTag::TooManySentences]);

    let verdict = validate_diff_commit_pair(ONE_LINE_DIFF, "Bump to 1.2.3.4.");
    assert_eq!(verdict.issues, vec![IssueTag::TooManySentences]);
}

#[test]
fn test_three_periods_is_fine() {
    assert!(validate_diff_commit_pair(ONE_LINE_DIFF, "Bump to v1.2.3.").valid);
}

#[test]
fn test_whitespace_message_is_empty() {
    let verdict = validate_diff_commit_pair(ONE_LINE_DIFF, "   ");
    assert_eq!(verdict.issues, vec![IssueTag::EmptyCommitMessage]);
    // Analysis still runs because the raw message is non-empty.
    assert!(verdict.commit_analysis.is_some());
}

#[test]
fn test_issue_tag_literals() {
    assert_eq!(IssueTag::EmptyDiff.to_string(), "empty_diff");
    assert_eq!(IssueTag::CommitMessageTooShort.to_string(), "commit_message_too_short");
    assert_eq!(
        serde_json::to_string(&IssueTag::TooManySentences).unwrap(),
        "\"too_many_sentences\""
    );
}

// =============================================================================
// DATASET VALIDATION
// =============================================================================

fn corpus() -> Vec<Sample> {
    vec![
        Sample::new(ONE_LINE_DIFF, "Add variable x"),
        Sample::new("", "Fix."),
        Sample::new("", "Add nothing at all"),
        Sample::new(ONE_LINE_DIFF, ""),
        Sample::new(ONE_LINE_DIFF, "Remove the thing"),
    ]
}

#[test]
fn test_dataset_report() {
    let report = validate_dataset(&corpus());
    assert_eq!(report.total_samples, 5);
    assert_eq!(report.valid_samples, 2);
    assert_eq!(report.invalid_samples, 3);
    assert!((report.validity_rate - 0.4).abs() < 1e-9);

    let issues: Vec<(IssueTag, usize)> =
        report.common_issues.iter().map(|c| (c.issue, c.count)).collect();
    assert_eq!(
        issues,
        vec![
            (IssueTag::EmptyDiff, 2),
            (IssueTag::CommitMessageTooShort, 1),
            (IssueTag::EmptyCommitMessage, 1),
        ]
    );
}

#[test]
fn test_empty_dataset() {
    let report = validate_dataset(&[]);
    assert_eq!(report.total_samples, 0);
    assert_eq!(report.invalid_samples, 0);
    assert!(report.validity_rate.abs() < f64::EPSILON);
}

#[test]
fn test_sharded_matches_sequential() {
    let samples: Vec<Sample> = corpus().into_iter().cycle().take(23).collect();
    let sequential = validate_dataset(&samples);
    for shards in [0, 1, 2, 3, 7, 64] {
        assert_eq!(validate_dataset_sharded(&samples, shards), sequential, "shards={shards}");
    }
}

#[test]
fn test_shard_count_is_clamped() {
    let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    assert_eq!(shard_count(0, 10), 1);
    assert_eq!(shard_count(1, 10), 1);
    assert_eq!(shard_count(100_000, 0), 1);
    assert_eq!(shard_count(100_000, 3), cores.min(3));
    assert_eq!(shard_count(100_000, 1_000_000), cores);
}

#[test]
fn test_huge_job_count_matches_sequential() {
    let samples: Vec<Sample> = corpus().into_iter().cycle().take(500).collect();
    assert_eq!(validate_dataset_sharded(&samples, 100_000), validate_dataset(&samples));
}

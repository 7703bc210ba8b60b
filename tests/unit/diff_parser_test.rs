//! Tests for diff statistics parsing

use commit_corpus::core::models::DiffStats;
use commit_corpus::core::services::parse_diff_stats;

use crate::common::fixtures::{DELETED_FILE_DIFF, MIXED_DIFF, NEW_FILE_DIFF};

#[test]
fn test_empty_diff_is_all_zero() {
    assert_eq!(parse_diff_stats(""), DiffStats::default());
}

#[test]
fn test_garbage_input_degrades_to_zero() {
    let stats = parse_diff_stats("hello\nworld\n@@ nothing @@");
    assert!(stats.is_empty());
}

#[test]
fn test_mixed_diff() {
    let stats = parse_diff_stats(MIXED_DIFF);
    assert_eq!(
        stats,
        DiffStats {
            files_changed: 2,
            insertions: 2,
            deletions: 1,
            lines_changed: 3,
            binary_files: 1,
            new_files: 0,
            deleted_files: 0,
            modified_files: 1,
        }
    );
}

#[test]
fn test_new_file_is_double_counted_as_modified() {
    // Known quirk: the +++ target of a created file is not /dev/null, so it
    // lands in modified_files as well as new_files.
    let stats = parse_diff_stats(NEW_FILE_DIFF);
    assert_eq!(stats.new_files, 1);
    assert_eq!(stats.modified_files, 1);
    assert_eq!(stats.insertions, 1);
}

#[test]
fn test_deleted_file() {
    let stats = parse_diff_stats(DELETED_FILE_DIFF);
    assert_eq!(stats.deleted_files, 1);
    assert_eq!(stats.modified_files, 0);
    assert_eq!(stats.deletions, 2);
    assert_eq!(stats.lines_changed, 2);
}

#[test]
fn test_header_without_path_tokens() {
    let stats = parse_diff_stats("diff --git\n+++ b/x\n+y");
    assert_eq!(stats.files_changed, 1);
    assert_eq!(stats.modified_files, 1);
    assert_eq!(stats.insertions, 1);
}

#[test]
fn test_crlf_lines_are_still_classified() {
    let stats = parse_diff_stats("diff --git a/x b/x\r\n+added\r\n-removed\r\n");
    assert_eq!(stats.files_changed, 1);
    assert_eq!(stats.insertions, 1);
    assert_eq!(stats.deletions, 1);
}

#[test]
fn test_binary_notice_anywhere_in_line() {
    let diff = "diff --git a/x.bin b/x.bin\n  Binary files a/x.bin and b/x.bin differ";
    let stats = parse_diff_stats(diff);
    assert_eq!(stats.binary_files, 1);
    assert_eq!(stats.lines_changed, 0);
}

#[test]
fn test_binary_notice_wins_over_change_line() {
    let stats = parse_diff_stats("+see Binary files section\n-old line");
    assert_eq!(stats.binary_files, 1);
    assert_eq!(stats.insertions, 0);
    assert_eq!(stats.deletions, 1);
}

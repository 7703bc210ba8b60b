//! Diff sanitizing
//!
//! Strips binary hunks and bounds the size of a diff before it is used as
//! model input. Everything here is a pure function of its input.

use std::collections::BTreeSet;

use super::diff_parser::{BINARY_FILES, DIFF_HEADER, is_change_line};

/// Line inserted where a long diff was cut
pub const TRUNCATION_MARKER: &str = "... (diff truncated due to length) ...";

/// Default line budget for [`clean_diff_content`]
pub const DEFAULT_MAX_DIFF_LINES: usize = 1000;

/// Default threshold for [`is_meaningful_diff`]
pub const DEFAULT_MIN_CHANGES: usize = 1;

const BINARY_PATCH: &str = "GIT binary patch";
const MAX_EXTENSION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    SkippingBinary,
}

fn is_binary_marker(line: &str) -> bool {
    line.contains(BINARY_FILES) || line.contains(BINARY_PATCH)
}

/// Remove binary hunks, then truncate to at most `max_lines` lines
///
/// A binary marker line and everything after it is dropped until the next
/// `diff --git` header. If more than `max_lines` lines remain, the first and
/// last `max_lines / 2` lines are kept around a [`TRUNCATION_MARKER`] line.
///
/// ```
/// use commit_corpus::core::services::{clean_diff_content, TRUNCATION_MARKER};
///
/// let diff = "1\n2\n3\n4\n5\n6\n7\n8";
/// let cleaned = clean_diff_content(diff, 4);
/// assert_eq!(cleaned, format!("1\n2\n{TRUNCATION_MARKER}\n7\n8"));
/// ```
#[must_use]
pub fn clean_diff_content(diff_content: &str, max_lines: usize) -> String {
    let mut state = ScanState::Normal;
    let mut kept: Vec<&str> = Vec::new();

    for line in diff_content.split('\n') {
        if line.starts_with(DIFF_HEADER) {
            state = ScanState::Normal;
        } else if is_binary_marker(line) {
            state = ScanState::SkippingBinary;
            continue;
        }

        if state == ScanState::Normal {
            kept.push(line);
        }
    }

    if kept.len() > max_lines {
        let half = max_lines / 2;
        let mut truncated = Vec::with_capacity(2 * half + 1);
        truncated.extend_from_slice(&kept[..half]);
        truncated.push(TRUNCATION_MARKER);
        truncated.extend_from_slice(&kept[kept.len() - half..]);
        kept = truncated;
    }

    kept.join("\n")
}

/// Sorted, lowercase file extensions named on `diff --git` headers
///
/// Extensions of 10 or more characters are ignored.
#[must_use]
pub fn extract_file_types(diff_content: &str) -> Vec<String> {
    let mut file_types = BTreeSet::new();

    for line in diff_content.split('\n') {
        if !line.starts_with(DIFF_HEADER) {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }

        let file_path = parts[parts.len() - 1];
        if !file_path.contains('.') {
            continue;
        }

        if let Some(ext) = file_path.rsplit('.').next() {
            let ext = ext.to_lowercase();
            if !ext.is_empty() && ext.chars().count() < MAX_EXTENSION_CHARS {
                file_types.insert(ext);
            }
        }
    }

    file_types.into_iter().collect()
}

/// Whether the diff has at least `min_changes` added or removed lines
///
/// Stops scanning as soon as the threshold is reached. Whitespace-only input
/// is never meaningful.
#[must_use]
pub fn is_meaningful_diff(diff_content: &str, min_changes: usize) -> bool {
    if diff_content.trim().is_empty() {
        return false;
    }

    let mut change_count = 0;
    for line in diff_content.split('\n') {
        if is_change_line(line) {
            change_count += 1;
            if change_count >= min_changes {
                return true;
            }
        }
    }

    false
}

//! Unified diff statistics
//!
//! Single forward scan over the lines of a diff. Ill-formed input never
//! fails; it just yields sparse or all-zero counters.

use crate::core::models::DiffStats;

/// Header line that opens each file section
pub const DIFF_HEADER: &str = "diff --git";

/// Substring git prints for binary deltas
pub const BINARY_FILES: &str = "Binary files";

const NEW_FILE_MODE: &str = "new file mode";
const DELETED_FILE_MODE: &str = "deleted file mode";
const NEW_FILE_MARKER: &str = "+++";
const OLD_FILE_MARKER: &str = "---";
const DEV_NULL: &str = "/dev/null";

/// Parse counters from unified diff text
///
/// Each line is classified by the first rule that matches, in this order:
/// file header, new file mode, deleted file mode, `+++` target (inside a
/// file section), binary notice, added line, removed line.
///
/// A `+++` target that is not `/dev/null` counts toward `modified_files`,
/// so a newly created file is counted as both new and modified.
///
/// ```
/// use commit_corpus::core::services::parse_diff_stats;
///
/// let stats = parse_diff_stats("diff --git a/x.rs b/x.rs\n+++ b/x.rs\n+a\n-b\n-c");
/// assert_eq!(stats.files_changed, 1);
/// assert_eq!(stats.insertions, 1);
/// assert_eq!(stats.deletions, 2);
/// assert_eq!(stats.lines_changed, 3);
/// ```
#[must_use]
pub fn parse_diff_stats(diff_content: &str) -> DiffStats {
    let mut stats = DiffStats::default();
    let mut current_file: Option<&str> = None;
    let mut in_diff = false;

    for line in diff_content.split('\n') {
        if line.starts_with(DIFF_HEADER) {
            stats.files_changed += 1;
            current_file = line.split_whitespace().last();
            in_diff = true;
        } else if line.starts_with(NEW_FILE_MODE) {
            stats.new_files += 1;
        } else if line.starts_with(DELETED_FILE_MODE) {
            stats.deleted_files += 1;
        } else if in_diff && line.starts_with(NEW_FILE_MARKER) && !line.ends_with(DEV_NULL) {
            if current_file.is_some_and(|file| !file.ends_with(DEV_NULL)) {
                stats.modified_files += 1;
            }
        } else if line.contains(BINARY_FILES) {
            stats.binary_files += 1;
        } else if is_added_line(line) {
            stats.insertions += 1;
            stats.lines_changed += 1;
        } else if is_removed_line(line) {
            stats.deletions += 1;
            stats.lines_changed += 1;
        }
    }

    stats
}

/// `+` line that is not a `+++` file marker
#[must_use]
pub fn is_added_line(line: &str) -> bool {
    line.starts_with('+') && !line.starts_with(NEW_FILE_MARKER)
}

/// `-` line that is not a `---` file marker
#[must_use]
pub fn is_removed_line(line: &str) -> bool {
    line.starts_with('-') && !line.starts_with(OLD_FILE_MARKER)
}

/// Added or removed content line
#[must_use]
pub fn is_change_line(line: &str) -> bool {
    is_added_line(line) || is_removed_line(line)
}

//! Patch text rendering

use chrono::{DateTime, FixedOffset};
use git2::{Diff, DiffFormat, Time};

/// Render a tree diff as unified patch text
///
/// Content lines keep their `+`/`-`/` ` origin prefix; headers and binary
/// notices are emitted as libgit2 prints them.
pub fn render_patch(diff: &Diff<'_>) -> crate::Result<String> {
    let mut text = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if matches!(line.origin(), '+' | '-' | ' ') {
            text.push(line.origin());
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;
    Ok(text)
}

/// Format a libgit2 timestamp as RFC 3339 in its own offset
#[must_use]
pub fn format_time(time: Time) -> Option<String> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)?;
    DateTime::from_timestamp(time.seconds(), 0).map(|utc| utc.with_timezone(&offset).to_rfc3339())
}

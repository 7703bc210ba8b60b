//! Diff sanitizing

use std::path::Path;

use commit_corpus::core::services::clean_diff_content;
use commit_corpus::output::OutputMode;

/// Print a diff with binary hunks removed and length bounded
pub fn clean_diff(file: Option<&Path>, max_lines: usize, mode: OutputMode) -> anyhow::Result<()> {
    let diff = super::read_input(file)?;
    let cleaned = clean_diff_content(&diff, max_lines);
    log::debug!(
        "Cleaned diff from {} to {} line(s)",
        diff.split('\n').count(),
        cleaned.split('\n').count()
    );

    match mode {
        OutputMode::Human => println!("{cleaned}"),
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "max_lines": max_lines,
                "diff": cleaned,
            }))?
        ),
    }
    Ok(())
}

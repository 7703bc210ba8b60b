//! Diff statistics

use std::path::Path;

use commit_corpus::core::services::{
    DEFAULT_MIN_CHANGES, extract_file_types, is_meaningful_diff, parse_diff_stats,
};
use commit_corpus::output::{OutputMode, StatsResult};

/// Print statistics for a diff
pub fn stats(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let diff = super::read_input(file)?;

    let result = StatsResult {
        stats: parse_diff_stats(&diff),
        file_types: extract_file_types(&diff),
        meaningful: is_meaningful_diff(&diff, DEFAULT_MIN_CHANGES),
    };
    result.render(mode);
    Ok(())
}

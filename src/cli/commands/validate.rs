//! Dataset validation

use std::path::Path;

use anyhow::Context;
use commit_corpus::adapters::jsonl::read_jsonl;
use commit_corpus::core::services::{shard_count, validate_dataset_sharded};
use commit_corpus::output::{OutputMode, ValidateResult};

/// Validate every pair in a JSONL dataset
pub fn validate(dataset: &Path, jobs: usize, mode: OutputMode) -> anyhow::Result<()> {
    let samples =
        read_jsonl(dataset).with_context(|| format!("Failed to load {}", dataset.display()))?;
    log::info!(
        "Validating {} sample(s) with {} job(s)",
        samples.len(),
        shard_count(jobs, samples.len())
    );

    let result = ValidateResult {
        dataset: dataset.display().to_string(),
        report: validate_dataset_sharded(&samples, jobs),
    };
    result.render(mode);
    Ok(())
}

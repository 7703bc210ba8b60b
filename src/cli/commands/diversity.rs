//! Prediction diversity

use std::path::Path;

use anyhow::Context;
use commit_corpus::core::services::analyze_generation_diversity;
use commit_corpus::output::{DiversityResult, OutputMode};

/// Report lexical diversity over one prediction per line
pub fn diversity(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let predictions: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

    let result = DiversityResult {
        predictions: predictions.len(),
        report: analyze_generation_diversity(&predictions),
    };
    result.render(mode);
    Ok(())
}

//! Dataset preparation pipeline
//!
//! Pulls samples from a [`CommitSource`], validates each pair and renders
//! the accepted ones into training records.

use log::{debug, info};

use super::formatter::{TemplateFormat, TrainingRecord, format_for_training};
use super::validator::{DatasetTally, validate_sample};
use crate::core::models::{DatasetReport, Sample};
use crate::core::ports::CommitSource;

/// Output of [`prepare_dataset`]
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    /// Rendered records, in source order
    pub records: Vec<TrainingRecord>,
    /// Samples the source produced
    pub extracted: usize,
    /// Samples dropped for failing validation
    pub rejected: usize,
    /// Validation summary over everything extracted
    pub report: DatasetReport,
}

/// Extract, validate and render a training dataset
///
/// Invalid samples are dropped unless `keep_invalid` is set; they are
/// counted in the report either way.
pub fn prepare_dataset(
    source: &dyn CommitSource,
    format: TemplateFormat,
    keep_invalid: bool,
) -> crate::Result<PreparedDataset> {
    info!("Loading samples from {}", source.describe());
    let samples = source.samples()?;
    let extracted = samples.len();

    let mut tally = DatasetTally::default();
    let mut accepted: Vec<Sample> = Vec::with_capacity(extracted);
    let mut rejected = 0;

    for sample in samples {
        let verdict = validate_sample(&sample);
        tally.record(&verdict);

        if verdict.valid || keep_invalid {
            accepted.push(sample);
        } else {
            debug!(
                "Rejected {}: {}",
                sample.commit_hash.as_deref().unwrap_or("sample"),
                verdict.issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
            );
            rejected += 1;
        }
    }

    info!("Formatting {} sample(s) as {format}", accepted.len());
    Ok(PreparedDataset {
        records: format_for_training(&accepted, format),
        extracted,
        rejected,
        report: tally.into_report(),
    })
}

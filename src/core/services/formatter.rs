//! Training text templates
//!
//! Renders accepted samples into the text a causal language model is
//! fine-tuned on. The original sample fields travel alongside the text.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::models::Sample;

/// Template used to render a sample
///
/// Names are matched case-insensitively everywhere, config files included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    /// `### Input:` / `### Output:` instruction blocks
    #[default]
    Instruction,
    /// Diff and message separated by a blank line
    Simple,
}

impl std::fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instruction => write!(f, "instruction"),
            Self::Simple => write!(f, "simple"),
        }
    }
}

impl std::str::FromStr for TemplateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instruction" => Ok(Self::Instruction),
            "simple" => Ok(Self::Simple),
            _ => Err(format!("Invalid template format: {s}. Use: instruction, simple")),
        }
    }
}

impl<'de> Deserialize<'de> for TemplateFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A rendered training example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Model input text
    pub text: String,
    /// The sample it was rendered from
    #[serde(flatten)]
    pub sample: Sample,
}

/// Render a single sample
#[must_use]
pub fn render_sample(sample: &Sample, format: TemplateFormat) -> String {
    match format {
        TemplateFormat::Instruction => format!(
            "### Input:\n{}\n\n### Output:\n{}",
            sample.diff, sample.commit_message
        ),
        TemplateFormat::Simple => format!("{}\n\n{}", sample.diff, sample.commit_message),
    }
}

/// Render every sample into a training record
#[must_use]
pub fn format_for_training(samples: &[Sample], format: TemplateFormat) -> Vec<TrainingRecord> {
    samples
        .iter()
        .map(|sample| TrainingRecord {
            text: render_sample(sample, format),
            sample: sample.clone(),
        })
        .collect()
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{CommitCategory, CommitQuality, DatasetReport, DiffStats};
use crate::core::services::DiversityReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Join lines into a block ending with a newline
fn block(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Result of the `stats` command
#[derive(Debug, Serialize)]
pub struct StatsResult {
    /// Parsed counters
    pub stats: DiffStats,
    /// Extensions named on file headers
    pub file_types: Vec<String>,
    /// Whether the diff has at least one change line
    pub meaningful: bool,
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let s = &self.stats;
        let mut lines = vec![
            format!("Files changed:  {}", s.files_changed),
            format!(
                "  new {}, deleted {}, modified {}, binary {}",
                s.new_files, s.deleted_files, s.modified_files, s.binary_files
            ),
            format!("Insertions:     {}", s.insertions),
            format!("Deletions:      {}", s.deletions),
            format!("Lines changed:  {}", s.lines_changed),
        ];
        if !self.file_types.is_empty() {
            lines.push(format!("File types:     {}", self.file_types.join(", ")));
        }
        if !self.meaningful {
            lines.push("\nNo added or removed lines.".to_string());
        }
        block(&lines)
    }
}

/// Result of the `message` command
#[derive(Debug, Serialize)]
pub struct MessageResult {
    /// Input as given
    pub original: String,
    /// Normalized message
    pub normalized: String,
    /// Keyword category
    pub category: CommitCategory,
    /// Quality of the normalized message
    pub quality: CommitQuality,
}

impl MessageResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.normalized.is_empty() {
            return "Message is empty after normalization.\n".to_string();
        }

        let q = &self.quality;
        let mut lines = vec![
            self.normalized.clone(),
            format!("\nCategory: {}", self.category),
            format!("Quality:  {}/10", q.quality_score),
        ];

        let mut notes = Vec::new();
        if q.too_short {
            notes.push("too short");
        }
        if q.too_long {
            notes.push("too long");
        }
        if !q.starts_capital {
            notes.push("not capitalized");
        }
        if !q.has_imperative {
            notes.push("not imperative");
        }
        if q.has_special_chars && !q.has_numbers {
            notes.push("unusual characters");
        }
        if !notes.is_empty() {
            lines.push(format!("Notes:    {}", notes.join(", ")));
        }
        block(&lines)
    }
}

/// Result of the `validate` command
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Dataset file that was validated
    pub dataset: String,
    /// Validation summary
    #[serde(flatten)]
    pub report: DatasetReport,
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let r = &self.report;
        if r.total_samples == 0 {
            return format!("No samples in {}.\n", self.dataset);
        }

        let mut lines = vec![
            format!("Validated {} sample(s) from {}\n", r.total_samples, self.dataset),
            format!("Valid:   {} ({:.1}%)", r.valid_samples, r.validity_rate * 100.0),
            format!("Invalid: {}", r.invalid_samples),
        ];

        if !r.common_issues.is_empty() {
            lines.push("\nIssues:".to_string());
            lines.extend(
                r.common_issues
                    .iter()
                    .map(|entry| format!("  {:<26} {}", entry.issue.as_str(), entry.count)),
            );
        }
        block(&lines)
    }
}

/// Result of the `prepare` command
#[derive(Debug, Serialize)]
pub struct PrepareResult {
    /// Where records were written
    pub output: String,
    /// Samples read from the source
    pub extracted: usize,
    /// Records written
    pub written: usize,
    /// Samples dropped by validation
    pub rejected: usize,
}

impl PrepareResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut lines = vec![format!("Extracted {} sample(s)", self.extracted)];
        if self.rejected > 0 {
            lines.push(format!("Rejected {} invalid sample(s)", self.rejected));
        }
        lines.push(format!("Wrote {} record(s) to {}", self.written, self.output));
        block(&lines)
    }
}

/// Result of the `diversity` command
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiversityResult {
    /// Predictions analyzed
    pub predictions: usize,
    /// Diversity figures, absent for an empty batch
    pub report: Option<DiversityReport>,
}

impl DiversityResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let Some(report) = &self.report else {
            return "No predictions.\n".to_string();
        };

        block(&[
            format!("Predictions:      {}", self.predictions),
            format!("Average length:   {:.2} tokens", report.avg_length),
            format!("Unique unigrams:  {}", report.unique_unigrams),
            format!("Unique bigrams:   {}", report.unique_bigrams),
            format!("Diversity ratio:  {:.3}", report.diversity_ratio),
        ])
    }
}

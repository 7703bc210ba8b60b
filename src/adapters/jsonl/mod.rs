//! JSON Lines datasets
//!
//! One JSON object per line. Reading accepts the `patch`/`message` field
//! names used by public commit datasets; blank lines are skipped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::core::models::Sample;
use crate::core::ports::CommitSource;

/// Parse samples from JSONL text
pub fn parse_jsonl(content: &str) -> crate::Result<Vec<Sample>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| crate::Error::Json {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Read samples from a JSONL file
pub fn read_jsonl(path: &Path) -> crate::Result<Vec<Sample>> {
    let content = fs::read_to_string(path)?;
    parse_jsonl(&content)
}

/// Write records as JSONL, creating parent directories
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!("Saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// A stored dataset used as a [`CommitSource`]
///
/// Records missing either a diff or a message are dropped on load.
#[derive(Debug, Clone)]
pub struct JsonlDataset {
    path: PathBuf,
}

impl JsonlDataset {
    /// Dataset backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitSource for JsonlDataset {
    fn describe(&self) -> String {
        format!("dataset {}", self.path.display())
    }

    fn samples(&self) -> crate::Result<Vec<Sample>> {
        let samples = read_jsonl(&self.path)?;
        let total = samples.len();
        let samples: Vec<Sample> = samples
            .into_iter()
            .filter(|s| !s.diff.is_empty() && !s.commit_message.is_empty())
            .collect();
        info!("Loaded {} of {total} record(s) from {}", samples.len(), self.path.display());
        Ok(samples)
    }
}

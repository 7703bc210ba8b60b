//! Dataset preparation

use std::path::PathBuf;

use anyhow::Context;
use commit_corpus::adapters::jsonl::write_jsonl;
use commit_corpus::adapters::{GitHistory, JsonlDataset};
use commit_corpus::config::Config;
use commit_corpus::core::ports::CommitSource;
use commit_corpus::core::services::{TemplateFormat, prepare_dataset};
use commit_corpus::output::{OutputMode, PrepareResult};

/// Arguments for [`prepare`]; unset options fall back to config
#[derive(Debug)]
pub struct PrepareArgs {
    pub repo: Option<PathBuf>,
    pub dataset: Option<PathBuf>,
    pub branch: Option<String>,
    pub max_commits: Option<usize>,
    pub format: Option<String>,
    pub output: PathBuf,
    pub keep_invalid: bool,
}

/// Build a training dataset and write it as JSONL
pub fn prepare(args: PrepareArgs, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let format = match &args.format {
        Some(name) => name.parse::<TemplateFormat>().map_err(anyhow::Error::msg)?,
        None => config.format.template,
    };

    let source: Box<dyn CommitSource> = match (args.repo, args.dataset) {
        (Some(repo), _) => {
            let mut settings = config.extract.clone();
            if let Some(branch) = args.branch {
                settings.branch = branch;
            }
            if let Some(max_commits) = args.max_commits {
                settings.max_commits = max_commits;
            }
            Box::new(GitHistory::with_settings(repo, settings))
        },
        (None, Some(dataset)) => Box::new(JsonlDataset::new(dataset)),
        (None, None) => anyhow::bail!("Either --repo or --dataset is required"),
    };

    let prepared = prepare_dataset(source.as_ref(), format, args.keep_invalid)
        .with_context(|| format!("Failed to prepare dataset from {}", source.describe()))?;

    if prepared.records.is_empty() {
        anyhow::bail!("No samples left to write");
    }

    write_jsonl(&args.output, &prepared.records)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let result = PrepareResult {
        output: args.output.display().to_string(),
        extracted: prepared.extracted,
        written: prepared.records.len(),
        rejected: prepared.rejected,
    };
    result.render(mode);
    Ok(())
}

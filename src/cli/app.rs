//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, PrepareArgs};
use commit_corpus::config::Config;
use commit_corpus::output::OutputMode;

/// commit-corpus - Diff/commit-message training data from git history
#[derive(Parser, Debug)]
#[command(
    name = "commit-corpus",
    version,
    about = "Diff/commit-message training data from git history",
    long_about = "Prepare training data for commit message generation.\n\n\
                  Diffs are stripped of binary hunks and truncated, messages are\n\
                  normalized, and every pair is validated before it is written."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/commit-corpus/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show statistics for a diff
    Stats {
        /// Diff file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Strip binary hunks and truncate a diff
    CleanDiff {
        /// Diff file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Maximum lines to keep
        #[arg(short, long)]
        max_lines: Option<usize>,
    },

    /// Normalize and analyze a commit message
    Message {
        /// The commit message
        text: String,
    },

    /// Validate a JSONL dataset of diff/message pairs
    Validate {
        /// Dataset file
        dataset: PathBuf,

        /// Number of worker threads
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,
    },

    /// Extract, validate and format a training dataset
    Prepare {
        /// Git repository to extract from
        #[arg(long, conflicts_with = "dataset", required_unless_present = "dataset")]
        repo: Option<PathBuf>,

        /// Existing JSONL dataset to use instead of a repository
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Branch to extract from
        #[arg(short, long)]
        branch: Option<String>,

        /// Maximum commits to extract
        #[arg(long)]
        max_commits: Option<usize>,

        /// Template: instruction, simple
        #[arg(short, long)]
        format: Option<String>,

        /// Output JSONL file
        #[arg(short, long)]
        output: PathBuf,

        /// Keep samples that fail validation
        #[arg(long)]
        keep_invalid: bool,
    },

    /// Measure lexical diversity of generated messages (one per line)
    Diversity {
        /// Predictions file
        file: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Stats { file }) => commands::stats(file.as_deref(), output_mode),
        Some(Command::CleanDiff { file, max_lines }) => commands::clean_diff(
            file.as_deref(),
            max_lines.unwrap_or(config.extract.max_diff_lines),
            output_mode,
        ),
        Some(Command::Message { text }) => commands::message(&text, output_mode),
        Some(Command::Validate { dataset, jobs }) => {
            commands::validate(&dataset, jobs, output_mode)
        },
        Some(Command::Prepare {
            repo,
            dataset,
            branch,
            max_commits,
            format,
            output,
            keep_invalid,
        }) => commands::prepare(
            PrepareArgs {
                repo,
                dataset,
                branch,
                max_commits,
                format,
                output,
                keep_invalid,
            },
            &config,
            output_mode,
        ),
        Some(Command::Diversity { file }) => commands::diversity(&file, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("commit-corpus v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("commit-corpus v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'commit-corpus --help' for usage");
            }
            Ok(())
        },
    }
}

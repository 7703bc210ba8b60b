//! Business logic services
//!
//! Pure text transforms over in-memory strings. Nothing here performs I/O
//! or keeps mutable shared state, so every function is safe to call from
//! any thread.
//!
//! - [`diff_parser`] - Counters from unified diff text
//! - [`sanitizer`] - Binary stripping, truncation, file types
//! - [`normalizer`] - Message cleanup, quality and category
//! - [`validator`] - Per-pair verdicts and corpus reports
//! - [`formatter`] - Training text templates
//! - [`diversity`] - Lexical diversity of predictions
//! - [`pipeline`] - Source → validate → format

pub mod diff_parser;
pub mod diversity;
pub mod formatter;
pub mod normalizer;
pub mod pipeline;
pub mod sanitizer;
pub mod validator;

pub use diff_parser::parse_diff_stats;
pub use diversity::{DiversityReport, analyze_generation_diversity};
pub use formatter::{TemplateFormat, TrainingRecord, format_for_training, render_sample};
pub use normalizer::{analyze_commit_quality, categorize_commit_type, clean_commit_message};
pub use pipeline::{PreparedDataset, prepare_dataset};
pub use sanitizer::{
    DEFAULT_MAX_DIFF_LINES, DEFAULT_MIN_CHANGES, TRUNCATION_MARKER, clean_diff_content,
    extract_file_types, is_meaningful_diff,
};
pub use validator::{
    DatasetTally, shard_count, validate_dataset, validate_dataset_sharded,
    validate_diff_commit_pair, validate_sample,
};

//! Commit message analysis

use commit_corpus::core::services::{
    analyze_commit_quality, categorize_commit_type, clean_commit_message,
};
use commit_corpus::output::{MessageResult, OutputMode};

/// Normalize a message and report its category and quality
pub fn message(text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let normalized = clean_commit_message(text);

    let result = MessageResult {
        original: text.to_string(),
        category: categorize_commit_type(&normalized),
        quality: analyze_commit_quality(&normalized),
        normalized,
    };
    result.render(mode);
    Ok(())
}

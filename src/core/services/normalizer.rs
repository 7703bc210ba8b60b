//! Commit message normalization and analysis
//!
//! - [`clean_commit_message`] - canonical single-line form
//! - [`analyze_commit_quality`] - advisory quality record
//! - [`categorize_commit_type`] - keyword classification
//!
//! All regexes and keyword tables are immutable statics built on first use.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CommitCategory, CommitQuality, MAX_QUALITY_SCORE};

static CONVENTIONAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(fix|feat|docs?|style|refactor|test|chore|perf|ci|build|revert):\s*")
        .expect("Invalid conventional prefix regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+$").expect("Invalid punctuation regex"));

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

static SPECIAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s.,!?-]").expect("Invalid special char regex"));

/// First words that mark a message as imperative
pub const IMPERATIVE_VERBS: &[&str] = &[
    "add", "fix", "update", "remove", "change", "refactor", "improve", "modify", "create",
    "delete", "merge", "revert",
];

/// Keyword sets checked in order; the first category with a hit wins
pub const CATEGORY_KEYWORDS: &[(CommitCategory, &[&str])] = &[
    (CommitCategory::BugFix, &["fix", "bug", "error", "issue", "problem"]),
    (CommitCategory::Feature, &["add", "new", "feature", "implement"]),
    (CommitCategory::Refactor, &["refactor", "clean", "restructure", "optimize"]),
    (CommitCategory::Docs, &["doc", "readme", "comment", "documentation"]),
    (CommitCategory::Test, &["test", "spec", "assert"]),
    (CommitCategory::Style, &["style", "format", "lint", "prettier"]),
    (CommitCategory::Chore, &["chore", "build", "ci", "config", "dependency"]),
    (CommitCategory::Performance, &["perf", "performance", "speed", "optimize"]),
    (CommitCategory::Security, &["security", "auth", "encrypt", "vulnerability"]),
];

const TOO_SHORT_BELOW: usize = 10;
const TOO_LONG_ABOVE: usize = 200;

/// Normalize a commit message
///
/// Trims, drops one conventional-commit prefix (`fix:`, `feat:`, ...),
/// collapses whitespace to single spaces, collapses trailing `.!?` runs to a
/// single `.`, and uppercases a leading lowercase letter. Returns an empty
/// string for unusable input.
///
/// ```
/// use commit_corpus::core::services::clean_commit_message;
///
/// assert_eq!(clean_commit_message("fix: Update the parser."), "Update the parser.");
/// assert_eq!(clean_commit_message("feat:  add   retries!!"), "Add retries.");
/// assert_eq!(clean_commit_message("   "), "");
/// ```
#[must_use]
pub fn clean_commit_message(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        return String::new();
    }

    let message = CONVENTIONAL_PREFIX.replace(message, "");
    let message = WHITESPACE_RUN.replace_all(&message, " ");
    let message = TRAILING_PUNCTUATION.replace(&message, ".");

    capitalize_first(&message).trim().to_string()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

/// Compute the advisory quality record for a message
///
/// The score starts at 10 and loses 3 when too short, 2 when too long, 1
/// when not capitalized, 1 when not imperative, and 1 when special
/// characters appear without any digit.
#[must_use]
pub fn analyze_commit_quality(message: &str) -> CommitQuality {
    let length = message.chars().count();
    let starts_capital = message.chars().next().is_some_and(char::is_uppercase);
    let too_short = length < TOO_SHORT_BELOW;
    let too_long = length > TOO_LONG_ABOVE;
    let has_numbers = DIGIT.is_match(message);
    let has_special_chars = SPECIAL_CHAR.is_match(message);

    let has_imperative = message
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .is_some_and(|word| IMPERATIVE_VERBS.contains(&word.as_str()));

    let mut score = MAX_QUALITY_SCORE;
    if too_short {
        score = score.saturating_sub(3);
    }
    if too_long {
        score = score.saturating_sub(2);
    }
    if !starts_capital {
        score = score.saturating_sub(1);
    }
    if !has_imperative {
        score = score.saturating_sub(1);
    }
    if has_special_chars && !has_numbers {
        score = score.saturating_sub(1);
    }

    CommitQuality {
        length,
        has_period: message.contains('.'),
        starts_capital,
        has_imperative,
        too_short,
        too_long,
        has_numbers,
        has_special_chars,
        quality_score: score,
    }
}

/// Classify a message by the first matching keyword set
#[must_use]
pub fn categorize_commit_type(message: &str) -> CommitCategory {
    let lowered = message.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(CommitCategory::Other, |(category, _)| *category)
}

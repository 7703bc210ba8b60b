//! Tests for configuration loading and saving

use std::fs;

use commit_corpus::Error;
use commit_corpus::config::Config;
use commit_corpus::core::services::{DEFAULT_MAX_DIFF_LINES, TemplateFormat};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.extract.branch, "main");
    assert_eq!(config.extract.max_commits, 5000);
    assert_eq!(config.extract.max_diff_lines, DEFAULT_MAX_DIFF_LINES);
    assert_eq!(config.format.template, TemplateFormat::Instruction);
}

#[test]
fn test_config_path_is_global() {
    let path = Config::config_path();
    assert!(path.ends_with("commit-corpus/config.toml"));
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_parse_empty() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_parse_partial() {
    let config = Config::parse(
        r#"
[extract]
branch = "trunk"

[format]
template = "simple"
"#,
    )
    .unwrap();

    assert_eq!(config.extract.branch, "trunk");
    assert_eq!(config.extract.max_commits, 5000);
    assert_eq!(config.format.template, TemplateFormat::Simple);
}

#[test]
fn test_parse_template_is_case_insensitive() {
    let config = Config::parse("[format]\ntemplate = \"Simple\"\n").unwrap();
    assert_eq!(config.format.template, TemplateFormat::Simple);

    let config = Config::parse("[format]\ntemplate = \"INSTRUCTION\"\n").unwrap();
    assert_eq!(config.format.template, TemplateFormat::Instruction);
}

#[test]
fn test_parse_invalid_template() {
    let err = Config::parse("[format]\ntemplate = \"chatml\"\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
    assert!(err.to_string().contains("Invalid template format"));
}

// =============================================================================
// FILES
// =============================================================================

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(p) if p == path));
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.extract.max_commits = 42;
    config.extract.max_diff_lines = 200;
    config.format.template = TemplateFormat::Simple;
    config.save_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("max_commits = 42"));
    assert!(content.contains("template = \"simple\""));

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

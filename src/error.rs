//! Error types for the I/O layers
//!
//! The core pipeline is total and never fails; these errors come from
//! reading repositories, dataset files and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the pure core
#[derive(Debug, Error)]
pub enum Error {
    /// Repository path does not exist
    #[error("repository path does not exist: {}", .0.display())]
    RepositoryNotFound(PathBuf),

    /// Underlying libgit2 failure
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// None of the candidate branches yielded commits
    #[error("no commits found in branches: {}", .0.join(", "))]
    NoCommits(Vec<String>),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset line could not be decoded
    #[error("invalid JSON on line {line}: {source}")]
    Json {
        /// 1-based line number
        line: usize,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// Config file does not exist
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

//! Adapters implementing port traits and file formats
//!
//! - [`git`] - Commit history via libgit2
//! - [`jsonl`] - JSON Lines datasets

pub mod git;
pub mod jsonl;

pub use git::GitHistory;
pub use jsonl::JsonlDataset;

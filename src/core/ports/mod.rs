//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (git repositories, dataset files).
//!
//! Implementations live in the `adapters` module.

mod history;

pub use history::CommitSource;

#[cfg(test)]
pub use history::MockCommitSource;

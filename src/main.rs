//! commit-corpus - Diff/commit-message training data from git history
//!
//! Extracts (diff, message) pairs from a repository, cleans and validates
//! them, and writes training records for a commit message model.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the commit-corpus CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}

//! Command implementations

mod clean_diff;
mod diversity;
mod message;
mod prepare;
mod stats;
mod validate;

pub use clean_diff::clean_diff;
pub use diversity::diversity;
pub use message::message;
pub use prepare::{PrepareArgs, prepare};
pub use stats::stats;
pub use validate::validate;

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read a file, or stdin when `path` is `None` or `-`
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
            Ok(input)
        },
    }
}

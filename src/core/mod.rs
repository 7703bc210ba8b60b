//! Core domain logic for commit-corpus
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`DiffStats`, `ValidationVerdict`, `Sample`)
//! - `services/` - Parsing, sanitizing, normalizing and validation
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

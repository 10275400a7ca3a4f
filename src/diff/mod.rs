//! Diff engine
//!
//! Computes a minimal line-level edit script between two sequences using
//! the classic quadratic-time distance table with a backtrace. The output
//! is a [`Patch`] of insert/delete operations; equal lines cost nothing
//! and are never materialized.

pub mod engine;

pub use engine::{compute, table_cells};

use crate::patch::Patch;

/// Diff two text bodies line by line.
pub fn diff_text(old: &str, new: &str) -> Patch {
    compute(&split_lines(old), &split_lines(new))
}

/// Split a text body into the line sequence the engine operates on. No
/// trailing newline is kept per line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

//! Patch representation, text format and application
//!
//! A patch is an ordered list of line-level insert/delete operations as
//! produced by the diff engine. This module owns the data model, the
//! line-oriented text format shared between `diff` output and `patch`
//! input, and the algorithm that applies a patch back onto a source
//! sequence.

pub mod applying;
pub mod model;
pub mod parsing;

// Re-export the main types for easier use
pub use applying::{apply, ApplyError};
pub use model::{Operation, Patch};
pub use parsing::{parse_patch, render_patch, MalformedRecord};

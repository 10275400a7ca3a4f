pub mod cli;
pub mod config;
pub mod diff;
pub mod files;
pub mod patch;

pub use diff::*;
pub use patch::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "linediff")]
#[command(version = "0.1.0")]
#[command(about = "A minimal line-level diff and patch tool for text files")]
#[command(
    long_about = "LineDiff computes a minimal line-level edit script between two text files and can re-apply that script as a patch. Diff output and patch input share the same record format, so a diff can be piped straight back into patch."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the line-level difference between two files
    Diff {
        /// File the edit script starts from
        #[arg(value_name = "FILE1")]
        file1: PathBuf,

        /// File the edit script arrives at
        #[arg(value_name = "FILE2")]
        file2: PathBuf,

        /// Output format
        #[arg(long, default_value = "records", help = "Output format")]
        format: DiffOutputFormat,
    },

    /// Apply a patch to a file
    Patch {
        /// File to patch
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Patch file as produced by `diff`
        #[arg(value_name = "PATCHFILE")]
        patch_file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffOutputFormat {
    /// One `<action> <position> <content>` record per line
    Records,
    /// JSON array of operations for scripting
    Json,
}

impl Cli {
    pub fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

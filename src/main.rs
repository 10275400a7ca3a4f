use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;

use linediff::{
    cli::{Cli, Command, DiffOutputFormat},
    config::LineDiffConfig,
    diff, files, patch,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.setup_logging();

    let config = LineDiffConfig::from_env();
    if let Err(err) = config.validate() {
        bail!("invalid configuration: {err}");
    }

    match &cli.command {
        Command::Diff {
            file1,
            file2,
            format,
        } => run_diff(file1, file2, *format, &config),
        Command::Patch { file, patch_file } => run_patch(file, patch_file, &config),
    }
}

fn run_diff(
    file1: &Path,
    file2: &Path,
    format: DiffOutputFormat,
    config: &LineDiffConfig,
) -> Result<()> {
    let source = files::read_lines(file1)?;
    let destination = files::read_lines(file2)?;

    let cells = diff::table_cells(source.len(), destination.len());
    if cells > config.limits.max_table_cells {
        bail!(
            "diffing {} against {} needs {} table cells, above the limit of {} (set LINEDIFF_MAX_TABLE_CELLS to raise it)",
            file1.display(),
            file2.display(),
            cells,
            config.limits.max_table_cells,
        );
    }

    let patch = diff::compute(&source, &destination);
    tracing::debug!(
        "computed {} operation(s): {} insertion(s), {} deletion(s)",
        patch.len(),
        patch.insertions(),
        patch.deletions(),
    );

    match format {
        DiffOutputFormat::Records => {
            for op in &patch {
                println!("{op}");
            }
        }
        DiffOutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&patch)?);
        }
    }

    Ok(())
}

fn run_patch(file: &Path, patch_file: &Path, config: &LineDiffConfig) -> Result<()> {
    let source = files::read_lines(file)?;
    let body = files::read_text(patch_file)?;

    let parsed = match patch::parse_patch(&body) {
        Ok(parsed) => parsed,
        Err(errors) => {
            for err in &errors {
                eprintln!(
                    "{}:{}: invalid patch record `{}`: {}",
                    patch_file.display(),
                    err.line_number,
                    err.line,
                    err.reason,
                );
            }
            bail!(
                "refusing to apply {}: {} malformed record(s)",
                patch_file.display(),
                errors.len(),
            );
        }
    };

    let patched = patch::apply(&source, &parsed)?;

    for line in &patched {
        println!("{line}");
    }

    let output = files::derived_output_path(file, &config.output.patched_prefix);
    files::write_lines(&output, &patched)?;
    tracing::info!("wrote patched result to {}", output.display());

    Ok(())
}

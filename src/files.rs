use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read a file as a sequence of lines, line terminators stripped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    Ok(crate::diff::split_lines(&read_text(path)?))
}

/// Read a whole file as text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write a sequence of lines, each followed by a newline.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut body = lines.join("\n");
    if !lines.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

/// Path the patched result is persisted under: the input file name with a
/// prefix, in the same directory.
pub fn derived_output_path<P: AsRef<Path>>(path: P, prefix: &str) -> PathBuf {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{prefix}{name}"))
}

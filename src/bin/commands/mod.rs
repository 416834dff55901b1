use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use bond_forge::io::{read_json_document, write_json_document};
use bond_forge::Document;

pub mod bridge;
pub mod info;

/// Loads one structural document from a JSON file.
pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    read_json_document(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON input from {}", path.display()))
}

/// Writes one structural document as pretty-printed JSON.
pub fn save_document(path: &Path, document: &Document) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    write_json_document(BufWriter::new(file), document)
        .with_context(|| format!("Failed to write JSON output to {}", path.display()))
}

/// Collects the `.json` files directly under a directory, sorted by file
/// name so runs are deterministic. Subdirectories are not descended into.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read source directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Runs a closure while displaying an indeterminate spinner on stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}

/// Builds the per-file progress bar used by directory-scoped commands.
pub fn file_progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template("{bar:40.green} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

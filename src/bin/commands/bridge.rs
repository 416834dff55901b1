use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use log::{error, info, warn};

use bond_forge::bridge_document;

use crate::commands::{discover_json_files, file_progress_bar, load_document, save_document};

/// Rewrites protein-protein bonds as ligand bridges for every JSON
/// document in a directory.
#[derive(Debug, Args)]
pub struct BridgeArgs {
    /// Directory containing input JSON documents.
    #[arg(short, long, value_name = "DIR")]
    pub source_dir: PathBuf,
    /// Directory receiving the rewritten documents, created if absent.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,
}

pub fn run(args: &BridgeArgs) -> Result<()> {
    if !args.source_dir.is_dir() {
        bail!(
            "source directory {} does not exist or is not a directory",
            args.source_dir.display()
        );
    }
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let files = discover_json_files(&args.source_dir)?;
    if files.is_empty() {
        warn!(
            "no .json files found in {}",
            args.source_dir.display()
        );
        return Ok(());
    }

    let bar = file_progress_bar(files.len());
    let mut written = 0usize;
    let mut modified = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let name = path
            .file_name()
            .ok_or_else(|| anyhow!("input path {} has no file name", path.display()))?;
        bar.set_message(name.to_string_lossy().to_string());

        match process_file(args, path) {
            Ok(is_identity) => {
                written += 1;
                if !is_identity {
                    modified += 1;
                }
            }
            // One bad file never stops the batch; the document that
            // failed is simply not written to the output directory.
            Err(e) => {
                if e.downcast_ref::<bond_forge::io::Error>().is_some() {
                    warn!("skipping unreadable input {}: {:#}", path.display(), e);
                } else {
                    error!("failed to process {}: {:#}", path.display(), e);
                }
                failed += 1;
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(
        "wrote {}/{} documents ({} modified, {} failed)",
        written,
        files.len(),
        modified,
        failed
    );
    Ok(())
}

fn process_file(args: &BridgeArgs, path: &std::path::Path) -> Result<bool> {
    let mut document = load_document(path)?;
    let report = bridge_document(&mut document)
        .with_context(|| format!("Failed to bridge bonds in {}", path.display()))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("input path {} has no file name", path.display()))?;
    save_document(&args.output_dir.join(file_name), &document)?;
    Ok(report.is_identity())
}

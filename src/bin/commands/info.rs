use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{format, row, Table};

use bond_forge::ops::find_protein_bonds;
use bond_forge::{BondRecord, ChainEntry, Document};

use crate::commands::{load_document, run_with_spinner};

/// Report-only command that inspects a document without modifying it.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Input JSON document.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
}

struct ChainReport {
    id: String,
    kind: &'static str,
    content: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let (reports, protein_bonds, total_bonds) =
        run_with_spinner("Analyzing document", || {
            let document = load_document(&args.input)?;
            let reports = collect_chain_reports(&document);
            let protein_bonds = find_protein_bonds(&document);
            Ok((reports, protein_bonds, document.bond_count()))
        })?;

    print_tables(&reports, &protein_bonds, total_bonds)?;
    Ok(())
}

fn collect_chain_reports(document: &Document) -> Vec<ChainReport> {
    document
        .sequences
        .iter()
        .map(|entry| ChainReport {
            id: entry.id().unwrap_or("?").to_string(),
            kind: entry_kind(entry),
            content: entry_content(entry),
        })
        .collect()
}

fn entry_kind(entry: &ChainEntry) -> &'static str {
    match entry {
        ChainEntry::Protein(_) => "Protein",
        ChainEntry::Ligand(_) => "Ligand",
        ChainEntry::Dna(_) => "DNA",
        ChainEntry::Rna(_) => "RNA",
    }
}

fn entry_content(entry: &ChainEntry) -> String {
    match entry {
        ChainEntry::Protein(protein) => format!("{} residues", protein.len()),
        ChainEntry::Ligand(ligand) => ligand.ccd_codes.join(", "),
        ChainEntry::Dna(_) | ChainEntry::Rna(_) => "-".to_string(),
    }
}

fn print_tables(
    reports: &[ChainReport],
    protein_bonds: &[BondRecord],
    total_bonds: usize,
) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "BondForge Document Report")?;
    writeln!(&mut stderr)?;

    let mut chain_table = Table::new();
    print_boxed_label(&mut stderr, "Chain Inventory")?;
    chain_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    chain_table.set_titles(row!["Chain", "Kind", "Content"]);
    for report in reports {
        chain_table.add_row(row![report.id, report.kind, report.content]);
    }
    chain_table
        .print(&mut stderr)
        .context("Failed to render chain inventory")?;
    writeln!(&mut stderr)?;

    let mut bond_table = Table::new();
    print_boxed_label(&mut stderr, "Bond Summary")?;
    bond_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    bond_table.set_titles(row!["Metric", "Value"]);
    bond_table.add_row(row!["Total bonds", total_bonds]);
    bond_table.add_row(row!["Protein-protein bonds", protein_bonds.len()]);
    bond_table
        .print(&mut stderr)
        .context("Failed to render bond summary")?;

    if !protein_bonds.is_empty() {
        writeln!(&mut stderr)?;
        let mut detail_table = Table::new();
        print_boxed_label(&mut stderr, "Protein-Protein Bonds")?;
        detail_table.set_format(*format::consts::FORMAT_BOX_CHARS);
        detail_table.set_titles(row!["#", "Bond"]);
        for (index, bond) in protein_bonds.iter().enumerate() {
            detail_table.add_row(row![index + 1, bond]);
        }
        detail_table
            .print(&mut stderr)
            .context("Failed to render bond details")?;
    }

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}

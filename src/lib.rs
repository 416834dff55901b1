//! # BondForge
//!
//! **BondForge** is a pure-Rust preparation tool for structure-prediction job
//! documents that rewrites covalent protein-protein bonds into explicit
//! single-residue ligand bridges. Each flagged bond splits a protein chain at
//! the bonded residue, lifts that residue out as a CCD ligand entry, restores
//! the severed backbone with peptide bonds, and renumbers every other bond in
//! the document to match, so downstream pipelines see chemistry they can
//! actually model.
//!
//! ## Features
//!
//! - **Faithful document model** – `Document`, chain entries, and bond
//!   records deserialize from job JSON while carrying unknown fields through
//!   untouched, so a rewrite never loses metadata it does not understand.
//! - **Original-coordinate bookkeeping** – A residue position registry maps
//!   every residue of every original chain to its current home across any
//!   number of successive splits.
//! - **Compositional operations** – Classification, splitting, bond
//!   correction, and whole-document bridging live under `ops`, producing
//!   interoperable results with a unified error type.
//! - **Buffered JSON I/O** – Readers and writers over `BufRead`/`Write`
//!   capture precise line and column diagnostics on malformed input.

mod model;

pub mod io;
pub mod ops;

pub use model::bond::{AtomRef, BondRecord};
pub use model::document::{ChainEntry, Document, LigandChain, ProteinChain};
pub use model::types::AminoAcid;

pub use ops::{bridge_document, BridgeReport};

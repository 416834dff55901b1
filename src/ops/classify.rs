//! Protein-protein bond detection.
//!
//! Classification runs once, up front, against the original document:
//! later splits rename chains, but the bond list to resolve is fixed by
//! what the input declared.

use std::collections::HashSet;

use log::debug;

use crate::model::bond::BondRecord;
use crate::model::document::Document;

/// Returns every bond whose two endpoints both name protein chains of the
/// document, in source order. Same-chain and cross-chain bonds both
/// qualify. Records without exactly two endpoints never qualify.
pub fn find_protein_bonds(document: &Document) -> Vec<BondRecord> {
    let protein_ids: HashSet<&str> = document
        .iter_proteins()
        .map(|protein| protein.id.as_str())
        .collect();

    let mut protein_bonds = Vec::new();
    for bond in &document.bonded_atom_pairs {
        let Some((first, second)) = bond.pair() else {
            continue;
        };
        if protein_ids.contains(first.chain_id.as_str())
            && protein_ids.contains(second.chain_id.as_str())
        {
            if first.chain_id == second.chain_id {
                debug!("found intra-chain bond: {} (internal)", first.chain_id);
            } else {
                debug!(
                    "found inter-chain bond: {} -> {}",
                    first.chain_id, second.chain_id
                );
            }
            protein_bonds.push(bond.clone());
        }
    }
    protein_bonds
}

//! Chain splitting: converts one residue of a protein-protein bond into a
//! single-residue ligand bridge and rebuilds the document around it.
//!
//! The residue chosen as the bridge is cut out of its chain, which is
//! replaced by up to two protein fragments plus the ligand. Every other
//! bond record in the document is then rewritten so no reference to the
//! pre-split chain survives.

use log::{info, warn};

use crate::model::bond::{AtomRef, BondRecord};
use crate::model::document::{ChainEntry, Document, LigandChain, ProteinChain};
use crate::model::types::AminoAcid;
use crate::ops::error::Error;
use crate::ops::registry::ResidueRegistry;
use crate::ops::rewrite::correct_bonds;

/// Result of resolving one bond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The bond was bridged; the document and registry were updated.
    Applied(SplitSummary),
    /// A resolved endpoint chain is absent from the document; the bond was
    /// skipped and the document left unmodified.
    SkippedMissingChain { chain_id: String },
}

/// Chains produced by one applied split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub split_chain_id: String,
    pub ligand_id: String,
    pub fragment_a: Option<String>,
    pub fragment_b: Option<String>,
}

/// Resolves one protein-protein bond by splitting the owning chain and
/// inserting a ligand bridge.
///
/// The bond's endpoints carry original chain ids and residue numbers; both
/// are resolved to current coordinates through the registry first, so the
/// split composes with earlier splits already folded into the document.
/// The endpoint that is terminal in its current chain is preferred as the
/// bridge; when both or neither are terminal, the first endpoint wins.
pub fn split_bond(
    document: &mut Document,
    bond: &BondRecord,
    registry: &mut ResidueRegistry,
) -> Result<SplitOutcome, Error> {
    let (first, second) = bond.pair().ok_or(Error::MalformedBond {
        endpoints: bond.endpoints.len(),
    })?;

    let mapped_first = registry.lookup(&first.chain_id, first.residue)?.clone();
    let mapped_second = registry.lookup(&second.chain_id, second.residue)?.clone();

    let Some(first_sequence) = document
        .protein(&mapped_first.chain_id)
        .map(|p| p.sequence.clone())
    else {
        warn!(
            "could not find sequence info for chain '{}' while resolving bond {}",
            mapped_first.chain_id, bond
        );
        return Ok(SplitOutcome::SkippedMissingChain {
            chain_id: mapped_first.chain_id,
        });
    };
    let Some(second_sequence) = document
        .protein(&mapped_second.chain_id)
        .map(|p| p.sequence.clone())
    else {
        warn!(
            "could not find sequence info for chain '{}' while resolving bond {}",
            mapped_second.chain_id, bond
        );
        return Ok(SplitOutcome::SkippedMissingChain {
            chain_id: mapped_second.chain_id,
        });
    };

    let first_len = first_sequence.chars().count();
    let second_len = second_sequence.chars().count();
    let first_terminal = mapped_first.residue == 1 || mapped_first.residue == first_len;
    let second_terminal = mapped_second.residue == 1 || mapped_second.residue == second_len;

    // Prefer the terminal endpoint as the bridge; ties and the
    // neither-terminal case go to the first endpoint.
    let use_first = first_terminal || !second_terminal;
    let (split_endpoint, split_mapped, split_sequence, split_len, split_terminal, target_endpoint) =
        if use_first {
            (
                first,
                &mapped_first,
                first_sequence,
                first_len,
                first_terminal,
                second,
            )
        } else {
            (
                second,
                &mapped_second,
                second_sequence,
                second_len,
                second_terminal,
                first,
            )
        };

    let split_chain_id = split_mapped.chain_id.clone();
    let cur_split = split_mapped.residue;
    let bridge_residue = split_sequence
        .chars()
        .nth(cur_split - 1)
        .ok_or_else(|| Error::residue_out_of_range(&split_chain_id, cur_split, split_len))?;

    let ligand_id = format!("{}L", split_chain_id);
    let fragment_a_id = format!("{}A", split_chain_id);
    let fragment_b_id = format!("{}B", split_chain_id);

    let ligand = LigandChain::new(
        &ligand_id,
        vec![AminoAcid::ccd_code_for(bridge_residue).to_string()],
    );

    // Replacement entries in reading order, plus the peptide links tying
    // surviving fragments to the ligand.
    let mut replacements: Vec<ChainEntry> = Vec::new();
    let mut new_bonds: Vec<BondRecord> = Vec::new();
    let mut fragment_a = None;
    let mut fragment_b = None;

    if split_terminal {
        let is_c_terminal = cur_split == split_len;
        if is_c_terminal {
            let fragment: String = split_sequence.chars().take(split_len - 1).collect();
            if !fragment.is_empty() {
                let last = fragment.chars().count();
                new_bonds.push(BondRecord::new(
                    AtomRef::new(&fragment_a_id, last, "C"),
                    AtomRef::new(&ligand_id, 1, "N"),
                ));
                replacements.push(ChainEntry::Protein(ProteinChain::new(
                    &fragment_a_id,
                    &fragment,
                )));
                fragment_a = Some(fragment_a_id.clone());
            }
            replacements.push(ChainEntry::Ligand(ligand));
        } else {
            replacements.push(ChainEntry::Ligand(ligand));
            let fragment: String = split_sequence.chars().skip(1).collect();
            if !fragment.is_empty() {
                new_bonds.push(BondRecord::new(
                    AtomRef::new(&ligand_id, 1, "N"),
                    AtomRef::new(&fragment_b_id, 1, "C"),
                ));
                replacements.push(ChainEntry::Protein(ProteinChain::new(
                    &fragment_b_id,
                    &fragment,
                )));
                fragment_b = Some(fragment_b_id.clone());
            }
        }

        check_generated_ids(document, &replacements)?;

        if is_c_terminal {
            registry.record_c_terminal_split(
                &split_endpoint.chain_id,
                split_endpoint.residue,
                cur_split,
                &fragment_a_id,
                &ligand_id,
            )?;
        } else {
            registry.record_n_terminal_split(
                &split_endpoint.chain_id,
                split_endpoint.residue,
                split_len,
                &fragment_b_id,
                &ligand_id,
            )?;
        }
    } else {
        let part_a: String = split_sequence.chars().take(cur_split - 1).collect();
        let part_b: String = split_sequence.chars().skip(cur_split).collect();

        if !part_a.is_empty() {
            let last = part_a.chars().count();
            new_bonds.push(BondRecord::new(
                AtomRef::new(&fragment_a_id, last, "C"),
                AtomRef::new(&ligand_id, 1, "N"),
            ));
            replacements.push(ChainEntry::Protein(ProteinChain::new(&fragment_a_id, &part_a)));
            fragment_a = Some(fragment_a_id.clone());
        }
        replacements.push(ChainEntry::Ligand(ligand));
        if !part_b.is_empty() {
            new_bonds.push(BondRecord::new(
                AtomRef::new(&ligand_id, 1, "N"),
                AtomRef::new(&fragment_b_id, 1, "C"),
            ));
            replacements.push(ChainEntry::Protein(ProteinChain::new(&fragment_b_id, &part_b)));
            fragment_b = Some(fragment_b_id.clone());
        }

        check_generated_ids(document, &replacements)?;

        registry.record_interior_split(
            &split_endpoint.chain_id,
            split_endpoint.residue,
            cur_split,
            split_len,
            &fragment_a_id,
            &fragment_b_id,
            &ligand_id,
        )?;
    }

    // Bridge to the target, resolved against the just-updated registry so
    // an intra-chain target lands on its post-split chain.
    let target_now = registry
        .lookup(&target_endpoint.chain_id, target_endpoint.residue)?
        .clone();
    new_bonds.push(BondRecord::new(
        AtomRef::new(&ligand_id, 1, &split_endpoint.atom),
        AtomRef::new(&target_now.chain_id, target_now.residue, &target_endpoint.atom),
    ));

    // Carry over every existing bond except the one being resolved, which
    // appears in the document in current (pre-split) coordinates.
    let resolved = BondRecord::new(
        AtomRef::new(&mapped_first.chain_id, mapped_first.residue, &first.atom),
        AtomRef::new(&mapped_second.chain_id, mapped_second.residue, &second.atom),
    );
    for existing in &document.bonded_atom_pairs {
        if *existing != resolved {
            new_bonds.push(existing.clone());
        }
    }

    let rewritten = correct_bonds(
        &new_bonds,
        &split_chain_id,
        cur_split,
        &ligand_id,
        &fragment_a_id,
        &fragment_b_id,
    )?;

    let replaced = document.replace_entry(&split_chain_id, replacements);
    debug_assert!(replaced, "split chain '{}' vanished mid-split", split_chain_id);
    document.bonded_atom_pairs = rewritten;

    info!(
        "bridged bond {} through ligand '{}' (split chain '{}')",
        bond, ligand_id, split_chain_id
    );

    Ok(SplitOutcome::Applied(SplitSummary {
        split_chain_id,
        ligand_id,
        fragment_a,
        fragment_b,
    }))
}

fn check_generated_ids(document: &Document, replacements: &[ChainEntry]) -> Result<(), Error> {
    for entry in replacements {
        if let Some(id) = entry.id() {
            if document.has_chain_id(id) {
                return Err(Error::chain_id_collision(id));
            }
        }
    }
    Ok(())
}

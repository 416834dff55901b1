//! Residue position registry tracking where every residue of every
//! original protein chain currently lives.
//!
//! Each split rewrites chain ids and residue numbers, and later bonds are
//! still expressed in the numbering of the original document. The registry
//! folds the cumulative effect of all splits applied so far, keyed by the
//! original (chain id, 1-based residue number) pair. Entries are only ever
//! overwritten, never removed.

use std::collections::HashMap;

use crate::model::document::Document;
use crate::ops::error::Error;

/// Current coordinates of one original residue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedResidue {
    pub chain_id: String,
    pub residue: usize,
}

impl MappedResidue {
    fn identity(chain_id: &str, residue: usize) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            residue,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResidueRegistry {
    chains: HashMap<String, Vec<MappedResidue>>,
}

impl ResidueRegistry {
    /// Seeds an identity entry for every residue of every protein chain.
    pub fn from_document(document: &Document) -> Self {
        let mut chains = HashMap::new();
        for protein in document.iter_proteins() {
            let entries = (1..=protein.len())
                .map(|residue| MappedResidue::identity(&protein.id, residue))
                .collect();
            chains.insert(protein.id.clone(), entries);
        }
        Self { chains }
    }

    /// Resolves an original (chain, residue) pair to its current
    /// coordinates. Absent keys are an initialization-invariant violation.
    pub fn lookup(&self, chain_id: &str, residue: usize) -> Result<&MappedResidue, Error> {
        residue
            .checked_sub(1)
            .and_then(|index| self.chains.get(chain_id)?.get(index))
            .ok_or_else(|| Error::unmapped_residue(chain_id, residue))
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    fn set(
        &mut self,
        chain_id: &str,
        residue: usize,
        target_chain: &str,
        target_residue: usize,
    ) -> Result<(), Error> {
        let entry = residue
            .checked_sub(1)
            .and_then(|index| self.chains.get_mut(chain_id)?.get_mut(index))
            .ok_or_else(|| Error::unmapped_residue(chain_id, residue))?;
        entry.chain_id = target_chain.to_string();
        entry.residue = target_residue;
        Ok(())
    }

    /// Records a split that converts the last residue of the current chain
    /// segment into the ligand.
    ///
    /// `orig_split` is the split residue's position in the chain's original
    /// numbering, `cur_split` its position in the segment being split; the
    /// two diverge after an earlier split on the same chain, and the offset
    /// between them locates the segment inside the original numbering.
    pub fn record_c_terminal_split(
        &mut self,
        orig_chain: &str,
        orig_split: usize,
        cur_split: usize,
        fragment_id: &str,
        ligand_id: &str,
    ) -> Result<(), Error> {
        let base = orig_split
            .checked_sub(cur_split)
            .ok_or_else(|| Error::unmapped_residue(orig_chain, orig_split))?;
        for pos in 1..cur_split {
            self.set(orig_chain, base + pos, fragment_id, pos)?;
        }
        self.set(orig_chain, orig_split, ligand_id, 1)
    }

    /// Records a split that converts the first residue of the current chain
    /// segment into the ligand; the remaining residues shift down by one.
    pub fn record_n_terminal_split(
        &mut self,
        orig_chain: &str,
        orig_split: usize,
        segment_len: usize,
        fragment_id: &str,
        ligand_id: &str,
    ) -> Result<(), Error> {
        self.set(orig_chain, orig_split, ligand_id, 1)?;
        for pos in 1..segment_len {
            self.set(orig_chain, orig_split + pos, fragment_id, pos)?;
        }
        Ok(())
    }

    /// Records a three-way split: residues before the split point move to
    /// fragment A at unchanged segment positions, the split residue becomes
    /// the ligand, and residues after move to fragment B renumbered from 1.
    #[allow(clippy::too_many_arguments)]
    pub fn record_interior_split(
        &mut self,
        orig_chain: &str,
        orig_split: usize,
        cur_split: usize,
        segment_len: usize,
        fragment_a_id: &str,
        fragment_b_id: &str,
        ligand_id: &str,
    ) -> Result<(), Error> {
        let base = orig_split
            .checked_sub(cur_split)
            .ok_or_else(|| Error::unmapped_residue(orig_chain, orig_split))?;
        for pos in 1..cur_split {
            self.set(orig_chain, base + pos, fragment_a_id, pos)?;
        }
        self.set(orig_chain, orig_split, ligand_id, 1)?;
        for pos in (cur_split + 1)..=segment_len {
            self.set(orig_chain, base + pos, fragment_b_id, pos - cur_split)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::{ChainEntry, Document, ProteinChain};

    fn document_with_chain(id: &str, sequence: &str) -> Document {
        let mut document = Document::new();
        document.add_entry(ChainEntry::Protein(ProteinChain::new(id, sequence)));
        document
    }

    #[test]
    fn from_document_seeds_identity_for_every_residue() {
        let document = document_with_chain("A", "MKVLA");

        let registry = ResidueRegistry::from_document(&document);

        for residue in 1..=5 {
            let mapped = registry.lookup("A", residue).unwrap();
            assert_eq!(mapped.chain_id, "A");
            assert_eq!(mapped.residue, residue);
        }
    }

    #[test]
    fn from_document_ignores_non_protein_entries() {
        let mut document = document_with_chain("A", "MK");
        document.add_entry(ChainEntry::Ligand(
            crate::model::document::LigandChain::new("X", vec!["HEM".to_string()]),
        ));

        let registry = ResidueRegistry::from_document(&document);

        assert_eq!(registry.chain_count(), 1);
        assert!(registry.lookup("X", 1).is_err());
    }

    #[test]
    fn lookup_fails_for_absent_keys() {
        let registry = ResidueRegistry::from_document(&document_with_chain("A", "MK"));

        assert!(registry.lookup("B", 1).is_err());
        assert!(registry.lookup("A", 0).is_err());
        assert!(registry.lookup("A", 3).is_err());
    }

    #[test]
    fn lookup_is_idempotent_between_splits() {
        let registry = ResidueRegistry::from_document(&document_with_chain("A", "MKVLA"));

        let first = registry.lookup("A", 3).unwrap().clone();
        let second = registry.lookup("A", 3).unwrap().clone();

        assert_eq!(first, second);
    }

    #[test]
    fn c_terminal_split_remaps_whole_chain() {
        let mut registry = ResidueRegistry::from_document(&document_with_chain("A", "MKVLA"));

        registry
            .record_c_terminal_split("A", 5, 5, "AA", "AL")
            .unwrap();

        for residue in 1..=4 {
            let mapped = registry.lookup("A", residue).unwrap();
            assert_eq!(mapped.chain_id, "AA");
            assert_eq!(mapped.residue, residue);
        }
        let tail = registry.lookup("A", 5).unwrap();
        assert_eq!(tail.chain_id, "AL");
        assert_eq!(tail.residue, 1);
    }

    #[test]
    fn n_terminal_split_shifts_remaining_residues_down() {
        let mut registry = ResidueRegistry::from_document(&document_with_chain("A", "MKVLA"));

        registry
            .record_n_terminal_split("A", 1, 5, "AB", "AL")
            .unwrap();

        let head = registry.lookup("A", 1).unwrap();
        assert_eq!(head.chain_id, "AL");
        assert_eq!(head.residue, 1);
        for residue in 2..=5 {
            let mapped = registry.lookup("A", residue).unwrap();
            assert_eq!(mapped.chain_id, "AB");
            assert_eq!(mapped.residue, residue - 1);
        }
    }

    #[test]
    fn interior_split_produces_three_way_mapping() {
        let mut registry = ResidueRegistry::from_document(&document_with_chain("A", "MKVLA"));

        registry
            .record_interior_split("A", 3, 3, 5, "AA", "AB", "AL")
            .unwrap();

        assert_eq!(registry.lookup("A", 1).unwrap().chain_id, "AA");
        assert_eq!(registry.lookup("A", 2).unwrap().residue, 2);
        assert_eq!(registry.lookup("A", 3).unwrap().chain_id, "AL");
        assert_eq!(registry.lookup("A", 3).unwrap().residue, 1);
        assert_eq!(registry.lookup("A", 4).unwrap().chain_id, "AB");
        assert_eq!(registry.lookup("A", 4).unwrap().residue, 1);
        assert_eq!(registry.lookup("A", 5).unwrap().residue, 2);
    }

    #[test]
    fn second_split_on_same_chain_uses_original_numbering_offset() {
        let mut registry = ResidueRegistry::from_document(&document_with_chain("A", "MKVLA"));

        // First split at original residue 3 leaves AB = residues 4..5.
        registry
            .record_interior_split("A", 3, 3, 5, "AA", "AB", "AL")
            .unwrap();
        // AB's residue 2 is original residue 5; a C-terminal split of the
        // two-residue segment has offset orig - cur = 3.
        registry
            .record_c_terminal_split("A", 5, 2, "ABA", "ABL")
            .unwrap();

        let fourth = registry.lookup("A", 4).unwrap();
        assert_eq!(fourth.chain_id, "ABA");
        assert_eq!(fourth.residue, 1);
        let fifth = registry.lookup("A", 5).unwrap();
        assert_eq!(fifth.chain_id, "ABL");
        assert_eq!(fifth.residue, 1);
        // Entries from the first split stay untouched.
        assert_eq!(registry.lookup("A", 1).unwrap().chain_id, "AA");
        assert_eq!(registry.lookup("A", 3).unwrap().chain_id, "AL");
    }

    #[test]
    fn single_residue_chain_c_terminal_split_maps_only_the_ligand() {
        let mut registry = ResidueRegistry::from_document(&document_with_chain("A", "M"));

        registry
            .record_c_terminal_split("A", 1, 1, "AA", "AL")
            .unwrap();

        let only = registry.lookup("A", 1).unwrap();
        assert_eq!(only.chain_id, "AL");
        assert_eq!(only.residue, 1);
    }
}

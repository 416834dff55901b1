use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::bond::BondRecord;

/// One AlphaFold3 job description: an ordered chain-entry list plus the
/// explicit bonds declared between atoms of those chains.
///
/// Top-level fields the pipeline does not interpret (name, modelSeeds,
/// dialect, version, ...) are carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub sequences: Vec<ChainEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonded_atom_pairs: Vec<BondRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single entry of the `sequences` array, externally tagged as in the
/// input schema: `{"protein": {...}}`, `{"ligand": {...}}`, and so on.
///
/// DNA and RNA entries are never edited by this tool and stay opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChainEntry {
    Protein(ProteinChain),
    Ligand(LigandChain),
    Dna(Value),
    Rna(Value),
}

/// A protein chain: unique id plus the one-letter residue sequence,
/// 1-indexed for biological numbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinChain {
    pub id: String,
    pub sequence: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A small-molecule chain identified by CCD codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigandChain {
    pub id: String,
    pub ccd_codes: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProteinChain {
    pub fn new(id: &str, sequence: &str) -> Self {
        Self {
            id: id.to_string(),
            sequence: sequence.to_string(),
            extra: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl LigandChain {
    pub fn new(id: &str, ccd_codes: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            ccd_codes,
            extra: Map::new(),
        }
    }
}

impl ChainEntry {
    /// Chain id of this entry, when one is present. Opaque nucleic-acid
    /// entries expose their id through the raw JSON value.
    pub fn id(&self) -> Option<&str> {
        match self {
            ChainEntry::Protein(protein) => Some(&protein.id),
            ChainEntry::Ligand(ligand) => Some(&ligand.id),
            ChainEntry::Dna(value) | ChainEntry::Rna(value) => {
                value.get("id").and_then(Value::as_str)
            }
        }
    }

    pub fn as_protein(&self) -> Option<&ProteinChain> {
        match self {
            ChainEntry::Protein(protein) => Some(protein),
            _ => None,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: ChainEntry) {
        debug_assert!(
            entry.id().map_or(true, |id| !self.has_chain_id(id)),
            "Attempted to add a duplicate chain ID '{:?}'",
            entry.id()
        );
        self.sequences.push(entry);
    }

    pub fn protein(&self, id: &str) -> Option<&ProteinChain> {
        self.sequences
            .iter()
            .filter_map(ChainEntry::as_protein)
            .find(|p| p.id == id)
    }

    pub fn iter_proteins(&self) -> impl Iterator<Item = &ProteinChain> {
        self.sequences.iter().filter_map(ChainEntry::as_protein)
    }

    pub fn has_chain_id(&self, id: &str) -> bool {
        self.sequences.iter().any(|entry| entry.id() == Some(id))
    }

    /// Index of the entry carrying the given chain id.
    pub fn entry_position(&self, id: &str) -> Option<usize> {
        self.sequences
            .iter()
            .position(|entry| entry.id() == Some(id))
    }

    /// Removes the entry carrying the given chain id and splices the
    /// replacement entries into its former position, preserving the
    /// relative order of every other entry.
    ///
    /// Returns `false` (leaving the document untouched) when no entry
    /// carries the id.
    pub fn replace_entry(&mut self, id: &str, replacements: Vec<ChainEntry>) -> bool {
        let Some(index) = self.entry_position(id) else {
            return false;
        };
        self.sequences.splice(index..=index, replacements);
        true
    }

    pub fn chain_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonded_atom_pairs.len()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document {{ chains: {}, bonds: {} }}",
            self.chain_count(),
            self.bond_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> Value {
        json!({
            "name": "dimer",
            "modelSeeds": [7],
            "sequences": [
                { "protein": { "id": "A", "sequence": "MKVLA" } },
                { "ligand": { "id": "X", "ccdCodes": ["HEM"] } },
                { "dna": { "id": "D", "sequence": "GATTACA" } }
            ],
            "bondedAtomPairs": [
                [["A", 1, "N"], ["X", 1, "FE"]]
            ],
            "dialect": "alphafold3",
            "version": 1
        })
    }

    #[test]
    fn document_deserializes_all_entry_kinds() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(document.chain_count(), 3);
        assert_eq!(document.bond_count(), 1);
        assert!(matches!(document.sequences[0], ChainEntry::Protein(_)));
        assert!(matches!(document.sequences[1], ChainEntry::Ligand(_)));
        assert!(matches!(document.sequences[2], ChainEntry::Dna(_)));
    }

    #[test]
    fn document_preserves_unknown_top_level_fields() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(document.extra.get("name"), Some(&json!("dimer")));
        assert_eq!(document.extra.get("version"), Some(&json!(1)));

        let round_tripped = serde_json::to_value(&document).unwrap();
        assert_eq!(round_tripped.get("dialect"), Some(&json!("alphafold3")));
        assert_eq!(round_tripped.get("modelSeeds"), Some(&json!([7])));
    }

    #[test]
    fn document_round_trip_preserves_entry_shapes() {
        let original = sample_json();
        let document: Document = serde_json::from_value(original.clone()).unwrap();

        let round_tripped = serde_json::to_value(&document).unwrap();

        assert_eq!(round_tripped["sequences"], original["sequences"]);
        assert_eq!(round_tripped["bondedAtomPairs"], original["bondedAtomPairs"]);
    }

    #[test]
    fn protein_entries_keep_unknown_sibling_fields() {
        let value = json!({
            "sequences": [
                { "protein": { "id": "A", "sequence": "MK", "unpairedMsa": "" } }
            ]
        });

        let document: Document = serde_json::from_value(value).unwrap();
        let protein = document.protein("A").unwrap();

        assert_eq!(protein.extra.get("unpairedMsa"), Some(&json!("")));
    }

    #[test]
    fn empty_bond_list_is_omitted_on_serialize() {
        let document: Document = serde_json::from_value(json!({
            "sequences": [ { "protein": { "id": "A", "sequence": "MK" } } ]
        }))
        .unwrap();

        let value = serde_json::to_value(&document).unwrap();

        assert!(value.get("bondedAtomPairs").is_none());
    }

    #[test]
    fn entry_id_resolves_for_every_kind() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        let ids: Vec<_> = document
            .sequences
            .iter()
            .map(|entry| entry.id().unwrap())
            .collect();

        assert_eq!(ids, vec!["A", "X", "D"]);
    }

    #[test]
    fn protein_lookup_returns_correct_chain() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        let protein = document.protein("A").unwrap();

        assert_eq!(protein.sequence, "MKVLA");
        assert_eq!(protein.len(), 5);
        assert!(document.protein("X").is_none());
        assert!(document.protein("Z").is_none());
    }

    #[test]
    fn replace_entry_splices_at_former_position() {
        let mut document: Document = serde_json::from_value(sample_json()).unwrap();

        let replaced = document.replace_entry(
            "A",
            vec![
                ChainEntry::Ligand(LigandChain::new("AL", vec!["MET".to_string()])),
                ChainEntry::Protein(ProteinChain::new("AB", "KVLA")),
            ],
        );

        assert!(replaced);
        let ids: Vec<_> = document
            .sequences
            .iter()
            .map(|entry| entry.id().unwrap())
            .collect();
        assert_eq!(ids, vec!["AL", "AB", "X", "D"]);
    }

    #[test]
    fn replace_entry_leaves_document_unchanged_for_unknown_id() {
        let mut document: Document = serde_json::from_value(sample_json()).unwrap();
        let before = document.clone();

        let replaced = document.replace_entry("Z", vec![]);

        assert!(!replaced);
        assert_eq!(document, before);
    }

    #[test]
    fn has_chain_id_covers_opaque_entries() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        assert!(document.has_chain_id("D"));
        assert!(!document.has_chain_id("DL"));
    }

    #[test]
    fn document_display_formats_counts() {
        let document: Document = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(format!("{}", document), "Document { chains: 3, bonds: 1 }");
    }
}

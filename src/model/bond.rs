use serde::{Deserialize, Serialize};
use std::fmt;

/// One endpoint of a bond: `(chainId, residueNumber, atomName)`, carried on
/// the wire as a three-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AtomRefWire", into = "AtomRefWire")]
pub struct AtomRef {
    pub chain_id: String,
    pub residue: usize,
    pub atom: String,
}

type AtomRefWire = (String, usize, String);

impl AtomRef {
    pub fn new(chain_id: &str, residue: usize, atom: &str) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            residue,
            atom: atom.to_string(),
        }
    }
}

impl From<AtomRefWire> for AtomRef {
    fn from((chain_id, residue, atom): AtomRefWire) -> Self {
        Self {
            chain_id,
            residue,
            atom,
        }
    }
}

impl From<AtomRef> for AtomRefWire {
    fn from(atom_ref: AtomRef) -> Self {
        (atom_ref.chain_id, atom_ref.residue, atom_ref.atom)
    }
}

impl fmt::Display for AtomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.chain_id, self.residue, self.atom)
    }
}

/// A declared connection between two atoms.
///
/// The endpoint list is kept as parsed. Well-formed records have exactly
/// two endpoints; that invariant is enforced during bond rewriting, where a
/// violation aborts the current file, rather than at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondRecord {
    pub endpoints: Vec<AtomRef>,
}

impl BondRecord {
    pub fn new(first: AtomRef, second: AtomRef) -> Self {
        Self {
            endpoints: vec![first, second],
        }
    }

    /// Both endpoints, in source order, when the record is well-formed.
    pub fn pair(&self) -> Option<(&AtomRef, &AtomRef)> {
        match self.endpoints.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.endpoints.len() == 2
    }
}

impl fmt::Display for BondRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut endpoints = self.endpoints.iter();
        if let Some(first) = endpoints.next() {
            write!(f, "{}", first)?;
        }
        for endpoint in endpoints {
            write!(f, " -- {}", endpoint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn atom_ref_deserializes_from_wire_triple() {
        let atom_ref: AtomRef = serde_json::from_value(json!(["A", 3, "CA"])).unwrap();

        assert_eq!(atom_ref, AtomRef::new("A", 3, "CA"));
    }

    #[test]
    fn atom_ref_serializes_to_wire_triple() {
        let value = serde_json::to_value(AtomRef::new("B", 12, "SG")).unwrap();

        assert_eq!(value, json!(["B", 12, "SG"]));
    }

    #[test]
    fn bond_record_round_trips_endpoint_order() {
        let wire = json!([["A", 1, "N"], ["B", 3, "CA"]]);

        let bond: BondRecord = serde_json::from_value(wire.clone()).unwrap();
        let back = serde_json::to_value(&bond).unwrap();

        assert_eq!(back, wire);
        let (first, second) = bond.pair().unwrap();
        assert_eq!(first.chain_id, "A");
        assert_eq!(second.chain_id, "B");
    }

    #[test]
    fn bond_record_pair_rejects_wrong_endpoint_counts() {
        let short: BondRecord = serde_json::from_value(json!([["A", 1, "N"]])).unwrap();
        let long: BondRecord =
            serde_json::from_value(json!([["A", 1, "N"], ["B", 2, "C"], ["C", 3, "O"]])).unwrap();

        assert!(short.pair().is_none());
        assert!(!short.is_pair());
        assert!(long.pair().is_none());
        assert!(!long.is_pair());
    }

    #[test]
    fn bond_record_display_joins_endpoints() {
        let bond = BondRecord::new(AtomRef::new("A", 1, "N"), AtomRef::new("B", 3, "CA"));

        assert_eq!(format!("{}", bond), "A:1:N -- B:3:CA");
    }
}

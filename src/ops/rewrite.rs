//! Bond rewriting after a chain split.
//!
//! Once a chain has been split into fragment A, ligand, and fragment B,
//! every bond endpoint still naming the split chain must be moved to the
//! replacement chain that now owns its residue.

use crate::model::bond::{AtomRef, BondRecord};
use crate::ops::error::Error;

/// Rewrites every endpoint of every record against the split substitution.
///
/// Endpoints naming other chains pass through verbatim. For endpoints on
/// the split chain, `split_position` is compared in the chain's current
/// (pre-split) numbering, which is what bond records already contain: the
/// split residue itself moves to the ligand at position 1, earlier residues
/// keep their position under fragment A, later residues shift down by the
/// split position under fragment B.
///
/// # Errors
///
/// [`Error::MalformedBond`] when any record does not have exactly two
/// endpoints; the caller treats this as fatal for the current file.
pub fn correct_bonds(
    bonds: &[BondRecord],
    split_chain_id: &str,
    split_position: usize,
    ligand_id: &str,
    fragment_a_id: &str,
    fragment_b_id: &str,
) -> Result<Vec<BondRecord>, Error> {
    let rewrite_endpoint = |endpoint: &AtomRef| -> AtomRef {
        if endpoint.chain_id != split_chain_id {
            return endpoint.clone();
        }
        if endpoint.residue == split_position {
            AtomRef::new(ligand_id, 1, &endpoint.atom)
        } else if endpoint.residue < split_position {
            AtomRef::new(fragment_a_id, endpoint.residue, &endpoint.atom)
        } else {
            AtomRef::new(fragment_b_id, endpoint.residue - split_position, &endpoint.atom)
        }
    };

    let mut rewritten = Vec::with_capacity(bonds.len());
    for bond in bonds {
        let (first, second) = bond.pair().ok_or(Error::MalformedBond {
            endpoints: bond.endpoints.len(),
        })?;
        rewritten.push(BondRecord::new(
            rewrite_endpoint(first),
            rewrite_endpoint(second),
        ));
    }
    Ok(rewritten)
}

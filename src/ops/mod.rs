mod bridge;
mod classify;
mod error;
mod registry;
mod rewrite;
mod split;

pub use bridge::{bridge_document, BridgeReport};
pub use classify::find_protein_bonds;
pub use registry::{MappedResidue, ResidueRegistry};
pub use rewrite::correct_bonds;
pub use split::{split_bond, SplitOutcome, SplitSummary};

pub use error::Error;

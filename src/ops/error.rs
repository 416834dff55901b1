use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no registry entry for residue {residue} of original chain '{chain_id}'")]
    UnmappedResidue { chain_id: String, residue: usize },

    #[error(
        "residue {residue} is outside chain '{chain_id}' (length {length}); \
         the bond record does not match the document"
    )]
    ResidueOutOfRange {
        chain_id: String,
        residue: usize,
        length: usize,
    },

    #[error("bond record has {endpoints} endpoints, expected exactly 2")]
    MalformedBond { endpoints: usize },

    #[error("generated chain id '{chain_id}' collides with an existing chain")]
    ChainIdCollision { chain_id: String },
}

impl Error {
    pub fn unmapped_residue(chain_id: impl Into<String>, residue: usize) -> Self {
        Self::UnmappedResidue {
            chain_id: chain_id.into(),
            residue,
        }
    }

    pub fn residue_out_of_range(chain_id: impl Into<String>, residue: usize, length: usize) -> Self {
        Self::ResidueOutOfRange {
            chain_id: chain_id.into(),
            residue,
            length,
        }
    }

    pub fn chain_id_collision(chain_id: impl Into<String>) -> Self {
        Self::ChainIdCollision {
            chain_id: chain_id.into(),
        }
    }
}

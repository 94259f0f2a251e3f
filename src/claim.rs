use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::merkle_tree::utils::{leaf_from_hex, leaf_to_hex};
use crate::merkle_tree::{MerkleError, MerkleProof};

/// An inclusion claim in the shape a web3 client passes to the verifying contract:
/// every digest is a `0x`-prefixed bytes32 hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    pub leaf: String,
    pub index: usize,
    pub root: String,
    pub proof: Vec<String>,
    pub path_indices: Vec<u8>,
}

impl From<&MerkleProof> for InclusionProof {
    fn from(proof: &MerkleProof) -> Self {
        InclusionProof {
            leaf: leaf_to_hex(&proof.leaf),
            index: proof.index,
            root: leaf_to_hex(&proof.root),
            proof: proof.sibling_hashes.iter().map(leaf_to_hex).collect(),
            path_indices: proof.path_indices.clone(),
        }
    }
}

impl TryFrom<&InclusionProof> for MerkleProof {
    type Error = MerkleError;

    fn try_from(claim: &InclusionProof) -> Result<Self, Self::Error> {
        Ok(MerkleProof {
            leaf: leaf_from_hex(&claim.leaf)?,
            index: claim.index,
            root: leaf_from_hex(&claim.root)?,
            sibling_hashes: claim
                .proof
                .iter()
                .map(|sibling| leaf_from_hex(sibling))
                .collect::<Result<Vec<_>, _>>()?,
            path_indices: claim.path_indices.clone(),
        })
    }
}

pub fn save_to_file<P: AsRef<Path>, T: Serialize>(path: P, data: &T) -> Result<(), MerkleError> {
    let serialized_data = serde_json::to_string_pretty(data)?;
    let mut file = File::create(path)?;
    file.write_all(serialized_data.as_bytes())?;
    Ok(())
}

pub fn load_from_file<P: AsRef<Path>, T: for<'de> Deserialize<'de>>(
    path: P,
) -> Result<T, MerkleError> {
    let mut file = File::open(path)?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;
    let deserialized_data = serde_json::from_str(&data)?;
    Ok(deserialized_data)
}

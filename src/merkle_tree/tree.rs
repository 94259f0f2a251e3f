use rayon::prelude::*;

use crate::merkle_tree::utils::{create_proof, verify_proof};
use crate::merkle_tree::{Leaf, MerkleError, MerkleProof};

/// A trait representing the basic operations for a layered binary Merkle tree.
pub trait Tree {
    /// Returns a reference to the root digest.
    fn root(&self) -> &Leaf;

    /// Returns the number of levels above the leaves.
    fn depth(&self) -> &usize;

    /// Returns a slice of the leaves.
    fn leaves(&self) -> &[Leaf];

    /// Returns every level, leaves first and root last.
    fn nodes(&self) -> &[Vec<Leaf>];

    /// Generates a MerkleProof for the leaf at the given index.
    fn generate_proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        create_proof(index, self.nodes())
    }

    /// Generates one MerkleProof per index. Fails if any index is out of range.
    fn generate_proofs(&self, indices: &[usize]) -> Result<Vec<MerkleProof>, MerkleError>
    where
        Self: Sync,
    {
        indices
            .par_iter()
            .map(|&index| self.generate_proof(index))
            .collect()
    }

    /// Verifies a MerkleProof against the root of this tree.
    fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.root == *self.root()
            && verify_proof(&proof.leaf, proof.index, &proof.sibling_hashes, &proof.root)
    }
}

mod error;
mod mt;
pub mod params;
mod tests;
mod tree;
pub mod utils;

/// A 32-byte big-endian value. Leaves and every intermediate digest share this width.
pub type Leaf = [u8; params::LEAF_BYTES];

/// Inclusion proof for a single leaf. It does not borrow the tree it was generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub leaf: Leaf,
    pub index: usize,
    pub root: Leaf,
    /// Sibling digests from the leaf layer up to the layer below the root.
    pub sibling_hashes: Vec<Leaf>,
    /// 1 where the proven node was the right child at that step, 0 otherwise.
    pub path_indices: Vec<u8>,
}

impl MerkleProof {
    /// The `(proof, leaf)` pair a verifying contract takes as call arguments.
    pub fn submission_args(&self) -> (Vec<Leaf>, Leaf) {
        (self.sibling_hashes.clone(), self.leaf)
    }
}

pub use error::MerkleError;
pub use mt::MerkleTree;
pub use tree::Tree;
pub use utils::{encode_leaf, hash_pair, verify_proof};

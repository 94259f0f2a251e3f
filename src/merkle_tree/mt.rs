use num_bigint::BigUint;
use std::path::Path;

use crate::merkle_tree::utils::{
    build_merkle_tree_from_leaves, encode_leaves, index_of, parse_csv_to_values, tree_depth,
};
use crate::merkle_tree::{Leaf, MerkleError, Tree};
use crate::primes::generate_primes;

/// Merkle tree over 32-byte leaves with every level kept in memory.
///
/// Nodes are addressed by `(level, position)` only: `nodes[0]` holds the leaves and
/// `nodes[depth]` holds the root alone.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    root: Leaf,
    nodes: Vec<Vec<Leaf>>,
    depth: usize,
}

impl MerkleTree {
    pub const MAX_DEPTH: usize = 32;

    /// Builds the tree over `leaves`, keeping their order as the leaf indices.
    pub fn new(leaves: Vec<Leaf>) -> Result<Self, MerkleError> {
        let depth = tree_depth(leaves.len());

        if depth > Self::MAX_DEPTH {
            return Err(MerkleError::TooDeep {
                depth,
                max: Self::MAX_DEPTH,
            });
        }

        let mut nodes = vec![];
        let root = build_merkle_tree_from_leaves(leaves, &mut nodes)?;

        Ok(MerkleTree { root, nodes, depth })
    }

    /// Encodes each value as a bytes32 leaf and builds the tree over them.
    pub fn from_values(values: &[BigUint]) -> Result<Self, MerkleError> {
        let leaves = encode_leaves(values)?;
        Self::new(leaves)
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, MerkleError> {
        let values = parse_csv_to_values(path)?;
        Self::from_values(&values)
    }

    /// Commits to the first `num_primes` primes in ascending order.
    pub fn from_primes(num_primes: usize) -> Result<Self, MerkleError> {
        let primes: Vec<BigUint> = generate_primes(num_primes)
            .into_iter()
            .map(BigUint::from)
            .collect();
        Self::from_values(&primes)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes[0].len()
    }

    pub fn index_of(&self, value: &BigUint) -> Option<usize> {
        index_of(value, &self.nodes)
    }
}

impl Tree for MerkleTree {
    fn root(&self) -> &Leaf {
        &self.root
    }

    fn depth(&self) -> &usize {
        &self.depth
    }

    fn leaves(&self) -> &[Leaf] {
        &self.nodes[0]
    }

    fn nodes(&self) -> &[Vec<Leaf>] {
        &self.nodes
    }
}

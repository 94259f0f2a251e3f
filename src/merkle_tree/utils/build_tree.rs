use ark_std::{end_timer, start_timer};
use rayon::prelude::*;

use crate::merkle_tree::utils::hash_pair;
use crate::merkle_tree::{Leaf, MerkleError};

/// Builds every level of the tree bottom-up, writes them into `nodes` and returns the root.
pub fn build_merkle_tree_from_leaves(
    leaves: Vec<Leaf>,
    nodes: &mut Vec<Vec<Leaf>>,
) -> Result<Leaf, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyInput);
    }

    let depth = tree_depth(leaves.len());
    let mut tree: Vec<Vec<Leaf>> = Vec::with_capacity(depth + 1);
    tree.push(leaves);

    let pf_time = start_timer!(|| format!("build {} middle levels", depth));

    for level in 1..=depth {
        build_middle_level(level, &mut tree);
    }

    end_timer!(pf_time);

    let root = tree[depth][0];
    *nodes = tree;
    Ok(root)
}

/// Number of levels above the leaves, i.e. how many times `leaf_count` halves (rounding up) to 1.
pub fn tree_depth(leaf_count: usize) -> usize {
    let mut depth = 0;
    let mut width = leaf_count;
    while width > 1 {
        width = (width + 1) / 2;
        depth += 1;
    }
    depth
}

fn build_middle_level(level: usize, tree: &mut Vec<Vec<Leaf>>) {
    // A trailing unpaired node is hashed with itself
    let results: Vec<Leaf> = tree[level - 1]
        .par_chunks(2)
        .map(|pair| hash_pair(&pair[0], pair.get(1).unwrap_or(&pair[0])))
        .collect();

    tree.push(results);
}

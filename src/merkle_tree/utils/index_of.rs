use num_bigint::BigUint;

use crate::merkle_tree::utils::encode_leaf;
use crate::merkle_tree::Leaf;

pub fn index_of(value: &BigUint, nodes: &[Vec<Leaf>]) -> Option<usize> {
    let leaf = encode_leaf(value).ok()?;

    nodes.first()?.iter().position(|node| *node == leaf)
}

use crate::merkle_tree::utils::hash_pair;
use crate::merkle_tree::Leaf;

/// Recomputes the root from `leaf` and its sibling path and compares it with `root`.
///
/// `hash_pair` orders each pair by value, so the leaf index is not needed to decide
/// left from right. This is the same fold the on-chain validator performs.
pub fn verify_proof(leaf: &Leaf, _index: usize, proof: &[Leaf], root: &Leaf) -> bool {
    let computed_root = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair(&node, sibling));

    computed_root == *root
}

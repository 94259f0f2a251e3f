use crate::merkle_tree::{Leaf, MerkleError, MerkleProof};

pub fn create_proof(index: usize, nodes: &[Vec<Leaf>]) -> Result<MerkleProof, MerkleError> {
    let root = match nodes.last().and_then(|level| level.first()) {
        Some(root) => *root,
        None => return Err(MerkleError::EmptyInput),
    };

    let leaf_count = nodes[0].len();
    if index >= leaf_count {
        return Err(MerkleError::IndexOutOfRange { index, leaf_count });
    }

    let depth = nodes.len() - 1;
    let mut sibling_hashes = Vec::with_capacity(depth);
    let mut path_indices = Vec::with_capacity(depth);
    let mut current_index = index;

    for level in &nodes[..depth] {
        // Flipping the lowest bit gives the other child of the same parent
        let sibling_index = current_index ^ 1;

        // The last node of an odd level was hashed with itself, so it is its own sibling
        let sibling = level
            .get(sibling_index)
            .unwrap_or(&level[current_index]);

        sibling_hashes.push(*sibling);
        path_indices.push((current_index & 1) as u8);

        current_index /= 2;
    }

    Ok(MerkleProof {
        leaf: nodes[0][index],
        index,
        root,
        sibling_hashes,
        path_indices,
    })
}

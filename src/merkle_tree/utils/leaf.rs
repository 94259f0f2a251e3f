use ethers::types::U256;
use num_bigint::BigUint;
use rayon::prelude::*;

use crate::merkle_tree::params::LEAF_BYTES;
use crate::merkle_tree::{Leaf, MerkleError};

/// Encodes `value` as a big-endian 32-byte leaf, zero-padded on the left.
pub fn encode_leaf(value: &BigUint) -> Result<Leaf, MerkleError> {
    let bits = value.bits();
    if bits > (LEAF_BYTES * 8) as u64 {
        return Err(MerkleError::Encoding { bits });
    }

    let bytes = value.to_bytes_be();
    let mut leaf = [0u8; LEAF_BYTES];
    leaf[LEAF_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(leaf)
}

/// Encodes a `U256`, which always fits a leaf.
pub fn encode_leaf_u256(value: U256) -> Leaf {
    let mut leaf = [0u8; LEAF_BYTES];
    value.to_big_endian(&mut leaf);
    leaf
}

/// Encodes every value in order. Fails on the first value that does not fit.
pub fn encode_leaves(values: &[BigUint]) -> Result<Vec<Leaf>, MerkleError> {
    values.par_iter().map(encode_leaf).collect()
}

pub fn decode_leaf(leaf: &Leaf) -> BigUint {
    BigUint::from_bytes_be(leaf)
}

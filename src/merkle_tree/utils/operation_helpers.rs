use num_bigint::BigUint;

use crate::merkle_tree::{Leaf, MerkleError};

/// Parses a decimal or `0x`-prefixed hex integer
pub fn parse_big_uint(value: &str) -> Result<BigUint, MerkleError> {
    let trimmed = value.trim();
    let parsed = match trimmed.strip_prefix("0x") {
        Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };

    parsed.ok_or_else(|| MerkleError::InvalidValue(value.to_string()))
}

/// Formats a leaf the way web3 clients print a bytes32
pub fn leaf_to_hex(leaf: &Leaf) -> String {
    format!("0x{}", hex::encode(leaf))
}

pub fn leaf_from_hex(value: &str) -> Result<Leaf, MerkleError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    let bytes =
        hex::decode(digits).map_err(|err| MerkleError::InvalidHex(format!("{value}: {err}")))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        MerkleError::InvalidHex(format!("{value}: expected 32 bytes, got {}", bytes.len()))
    })
}

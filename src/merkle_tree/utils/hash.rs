use ethers::abi::{encode, Token};
use ethers::utils::keccak256;

use crate::merkle_tree::Leaf;

/// Hashes two nodes into their parent, `keccak256(abi.encode(min, max))`.
///
/// The inputs are ordered by numeric value before hashing, matching the sorted-pair
/// hashing of OpenZeppelin's `MerkleProof.sol`. Comparing big-endian byte arrays
/// lexicographically is the same as comparing them as 256-bit integers.
pub fn hash_pair(a: &Leaf, b: &Leaf) -> Leaf {
    let (first, second) = if a < b { (a, b) } else { (b, a) };

    keccak256(encode(&[
        Token::FixedBytes(first.to_vec()),
        Token::FixedBytes(second.to_vec()),
    ]))
}

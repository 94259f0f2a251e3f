//! This crate commits to a set of primes with a keccak256 Merkle tree and produces inclusion proofs
//! that an OpenZeppelin `MerkleProof` validator accepts.

/// Serializable claim handed to the transaction layer, plus file helpers.
pub mod claim;
/// Utilities to build the Merkle tree, generate and verify inclusion proofs.
pub mod merkle_tree;
/// Generator for the committed set of primes.
pub mod primes;

pub use claim::{load_from_file, save_to_file, InclusionProof};

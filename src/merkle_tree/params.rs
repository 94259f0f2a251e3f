// Width in bytes of a leaf and of every digest in the tree (a solidity bytes32)
pub const LEAF_BYTES: usize = 32;
// Size of the committed prime set used by the verifying contract
pub const DEFAULT_NUM_PRIMES: usize = 8192;
// Leaf 0 of the committed set is claimed when the contract is deployed
pub const FIRST_CLAIMABLE_INDEX: usize = 1;

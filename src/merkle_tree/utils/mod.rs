mod build_tree;
mod create_proof;
mod csv_parser;
mod hash;
mod index_of;
mod leaf;
mod operation_helpers;
mod proof_verification;

pub use build_tree::{build_merkle_tree_from_leaves, tree_depth};
pub use create_proof::create_proof;
pub use csv_parser::parse_csv_to_values;
pub use hash::hash_pair;
pub use index_of::index_of;
pub use leaf::{decode_leaf, encode_leaf, encode_leaf_u256, encode_leaves};
pub use operation_helpers::*;
pub use proof_verification::verify_proof;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MerkleError {
    #[error("value needs {bits} bits and does not fit in a 32-byte leaf")]
    Encoding { bits: u64 },

    #[error("cannot build a Merkle tree from zero leaves")]
    EmptyInput,

    #[error("leaf index {index} is out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("a tree of depth {depth} exceeds the maximum depth of {max}")]
    TooDeep { depth: usize, max: usize },

    #[error("invalid integer value: {0}")]
    InvalidValue(String),

    #[error("invalid 32-byte hex value: {0}")]
    InvalidHex(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

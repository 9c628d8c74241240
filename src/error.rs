use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleError>`.
pub type Result<T> = core::result::Result<T, MerkleError>;

/// Errors from Merkle tree construction and proof generation.
///
/// Proof verification never surfaces here: a proof that fails to reproduce
/// the root is reported as `false` by [`verify`](crate::verify).
#[derive(Debug, Error)]
pub enum MerkleError {
    /// Tried to build a tree from an empty leaf set.
    #[error("cannot build a Merkle tree from an empty leaf set")]
    EmptyLeaves,
    /// The requested leaf digest is not present at the leaf level.
    #[error("leaf not found: {0}")]
    LeafNotFound(String),
    /// The requested leaf index is past the end of the leaf level.
    #[error("leaf index {index} out of range ({count} leaves)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of leaves in the tree.
        count: usize,
    },
    /// The pluggable hasher broke its fixed-width, deterministic contract.
    #[error("hash function contract violation: {0}")]
    HashContract(String),
    /// Malformed external input (hex strings, serialized proof bytes).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

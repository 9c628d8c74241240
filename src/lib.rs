//! Binary Merkle tree construction and inclusion proof engine.
//!
//! Builds a tree level by level from an ordered sequence of raw leaf values,
//! using a pluggable fixed-width hash function, and produces inclusion
//! proofs that a verifier can check with nothing but the proof, the leaf
//! digest, the expected root, and the same hasher.
//!
//! # Pairing rules
//!
//! Two build-time options shape the tree:
//!
//! - `sort_pairs` — sort the two children bytewise before concatenation, so
//!   proofs verify independently of left/right position (the convention used
//!   by allowlist contracts that accept sibling digests without position
//!   flags). Off by default: position is then significant and carried in
//!   each proof step.
//! - `odd_node` — what to do with the final unpaired node of an odd-length
//!   level: carry it up unchanged (default) or pair it with a copy of
//!   itself. The two policies produce different roots, so builder and
//!   verifier must agree on the policy out of band.
//!
//! # Core types
//!
//! - [`MerkleTree`] — the built tree (root, levels, proof generation).
//! - [`MerkleProof`] — inclusion proof (sibling digest + side per level).
//! - [`MerkleHasher`] — the pluggable hash function; [`Blake3Hasher`] is the
//!   default implementation.
//! - [`verify`] — standalone, tree-free proof verification.

#![warn(missing_docs)]

mod error;
mod hash;
mod proof;
mod render;
mod tree;
mod verify;


pub use error::{MerkleError, Result};
pub use hash::{Blake3Hasher, MerkleHasher, digest_from_hex, digest_to_hex};
pub use proof::{MerkleProof, ProofStep, Side};
pub use tree::{MerkleTree, OddNodePolicy, TreeOptions};
pub use verify::verify;

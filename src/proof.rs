//! Inclusion proof types and serialization.
//!
//! A [`MerkleProof`] is the minimal authentication path for one leaf: one
//! sibling digest per level, ordered from the leaf level up to (but
//! excluding) the root. Proofs are derived data, recomputed on demand from a
//! built tree; they carry no reference back to it, so a verifier only ever
//! needs the proof, the leaf digest, the expected root, and the hasher.

use bincode::{Decode, Encode};

use crate::{MerkleError, Result, hash::digest_to_hex};

/// Which side a proof sibling sits on relative to the running digest.
///
/// Significant only when the tree was built without `sort_pairs`; sorted
/// trees normalize child order before hashing, so verification ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Side {
    /// The sibling is the left child; the running digest is the right.
    Left,
    /// The sibling is the right child; the running digest is the left.
    Right,
}

/// One level of an inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ProofStep {
    /// The sibling digest to combine with the running digest.
    pub sibling: Vec<u8>,
    /// The side the sibling sits on.
    pub side: Side,
}

/// An inclusion proof for a single leaf.
///
/// An empty proof is valid for a single-leaf tree, whose root is the leaf
/// digest itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Assemble a proof from externally received steps (e.g. decoded from
    /// hex siblings handed out by a prover).
    pub fn from_steps(steps: Vec<ProofStep>) -> Self {
        MerkleProof { steps }
    }

    /// The proof steps, ordered from the leaf level toward the root.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps, equal to the number of levels walked.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the single-leaf tree's proof.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The sibling digests as `0x`-prefixed hex strings, leaf level first.
    pub fn hex_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| digest_to_hex(&step.sibling))
            .collect()
    }

    /// Serialize to bytes with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| MerkleError::InvalidData(format!("proof encoding failed: {}", e)))
    }

    /// Deserialize from bytes produced by [`to_bytes`](MerkleProof::to_bytes).
    ///
    /// Trailing bytes are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (proof, consumed): (MerkleProof, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())
                .map_err(|e| MerkleError::InvalidData(format!("proof decoding failed: {}", e)))?;
        if consumed != bytes.len() {
            return Err(MerkleError::InvalidData(format!(
                "proof has {} trailing bytes",
                bytes.len() - consumed
            )));
        }
        Ok(proof)
    }
}

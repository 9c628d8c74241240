//! Standalone proof verification.
//!
//! Pure function — no tree access required. A party that never built the
//! tree can verify with only the proof, the leaf digest, the expected root,
//! and the hasher, making this usable against roots published elsewhere
//! (e.g. on-chain allowlist contracts).

use crate::{MerkleHasher, MerkleProof, TreeOptions, hash::combine, proof::Side};

/// Verify an inclusion proof against an expected root.
///
/// Recomputes a running digest starting from `leaf`, combining it with each
/// proof sibling under the same pairing rule the tree was built with:
/// `options.sort_pairs` must match the build-time value, while the odd-node
/// policy is irrelevant here (it only changes which steps a proof contains).
///
/// Returns `true` iff the final running digest equals `root`. Tampered or
/// mismatched inputs yield `false`, never an error.
pub fn verify<H: MerkleHasher + ?Sized>(
    proof: &MerkleProof,
    leaf: &[u8],
    root: &[u8],
    hasher: &H,
    options: &TreeOptions,
) -> bool {
    let mut running = leaf.to_vec();
    for step in proof.steps() {
        running = if options.sort_pairs {
            combine(hasher, &running, &step.sibling, true)
        } else {
            match step.side {
                Side::Left => combine(hasher, &step.sibling, &running, false),
                Side::Right => combine(hasher, &running, &step.sibling, false),
            }
        };
    }
    running.as_slice() == root
}

//! Tree construction and proof generation.

use crate::{
    MerkleError, MerkleHasher, MerkleProof, Result,
    hash::{check_hasher_contract, combine, digest_to_hex},
    proof::{ProofStep, Side},
};

/// How an unpaired node at the end of an odd-length level is promoted.
///
/// Part of the tree's contract: the two policies produce different roots for
/// any odd-length level, so builder and verifier must agree on it out of
/// band (the policy itself never appears in a proof).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OddNodePolicy {
    /// Carry the unpaired node up to the next level unchanged. The node's
    /// proof has no step at that level.
    #[default]
    CarryUp,
    /// Pair the unpaired node with a copy of itself. The node's proof
    /// records itself as the right-hand sibling at that level.
    DuplicateLast,
}

/// Options fixed at build time.
///
/// Verification must run with the same `sort_pairs` value the tree was
/// built with; the odd-node policy only shapes proofs and is not needed at
/// verification time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Sort the two children bytewise before concatenation, making proof
    /// verification independent of left/right position. Off by default:
    /// positional order is then significant and preserved in proofs.
    pub sort_pairs: bool,
    /// Policy for the final unpaired node of an odd-length level.
    pub odd_node: OddNodePolicy,
}

/// A binary Merkle tree built level by level from hashed leaf values.
///
/// Level 0 holds the leaf digests in input order; each level above holds the
/// pairwise combination of the level below, up to the single root. The tree
/// owns all levels (needed to derive proofs) and is immutable once built —
/// changing the leaf set means building a new tree. It holds no interior
/// mutability and no hasher, so a built tree is freely shareable across
/// threads.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// `levels[0]` = leaves, `levels[last]` = `[root]`.
    levels: Vec<Vec<Vec<u8>>>,
    options: TreeOptions,
}

impl MerkleTree {
    /// Build a tree by hashing each raw value into a leaf digest and folding
    /// levels pairwise up to the root.
    ///
    /// Fails with [`MerkleError::EmptyLeaves`] on an empty input and with
    /// [`MerkleError::HashContract`] if the hasher returns digests of
    /// varying width or differing digests for identical input.
    pub fn build<H, I, V>(values: I, hasher: &H, options: TreeOptions) -> Result<Self>
    where
        H: MerkleHasher + ?Sized,
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]>,
    {
        let values: Vec<V> = values.into_iter().collect();
        let first = values.first().ok_or(MerkleError::EmptyLeaves)?;
        let width = check_hasher_contract(hasher, first.as_ref())?;

        let mut leaves = Vec::with_capacity(values.len());
        for value in &values {
            let digest = hasher.digest(value.as_ref());
            if digest.len() != width {
                return Err(MerkleError::HashContract(format!(
                    "leaf digest is {} bytes, expected {}",
                    digest.len(),
                    width
                )));
            }
            leaves.push(digest);
        }

        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = fold_level(&current, hasher, options, width)?;
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(MerkleTree { levels, options })
    }

    /// The root digest.
    pub fn root(&self) -> &[u8] {
        // build() guarantees a final level holding exactly the root
        &self.levels[self.levels.len() - 1][0]
    }

    /// The root as a `0x`-prefixed lowercase hex string.
    pub fn root_hex(&self) -> String {
        digest_to_hex(self.root())
    }

    /// The leaf digests in input order.
    pub fn leaves(&self) -> &[Vec<u8>] {
        &self.levels[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, leaf level and root level included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The options this tree was built with.
    pub fn options(&self) -> TreeOptions {
        self.options
    }

    pub(crate) fn levels(&self) -> &[Vec<Vec<u8>>] {
        &self.levels
    }

    /// Generate the inclusion proof for the leaf at `index` (input order).
    ///
    /// This is the preferred form: it stays unambiguous when the same digest
    /// appears at several leaf positions.
    pub fn proof_for_index(&self, index: usize) -> Result<MerkleProof> {
        let count = self.leaf_count();
        if index >= count {
            return Err(MerkleError::IndexOutOfRange { index, count });
        }

        let mut steps = Vec::with_capacity(self.levels.len() - 1);
        let mut i = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = i ^ 1;
            if sibling < level.len() {
                let side = if sibling < i { Side::Left } else { Side::Right };
                steps.push(ProofStep {
                    sibling: level[sibling].clone(),
                    side,
                });
            } else {
                // Final unpaired node of an odd-length level.
                match self.options.odd_node {
                    OddNodePolicy::CarryUp => {}
                    OddNodePolicy::DuplicateLast => steps.push(ProofStep {
                        sibling: level[i].clone(),
                        side: Side::Right,
                    }),
                }
            }
            i /= 2;
        }

        Ok(MerkleProof::from_steps(steps))
    }

    /// Generate the inclusion proof for the first leaf matching `digest`.
    ///
    /// Fails with [`MerkleError::LeafNotFound`] if no leaf matches. When the
    /// same digest appears at several positions this proves the first one;
    /// use [`proof_for_index`](MerkleTree::proof_for_index) to disambiguate.
    pub fn proof_for_leaf(&self, digest: &[u8]) -> Result<MerkleProof> {
        let index = self.levels[0]
            .iter()
            .position(|leaf| leaf == digest)
            .ok_or_else(|| MerkleError::LeafNotFound(digest_to_hex(digest)))?;
        self.proof_for_index(index)
    }
}

/// Combine one level pairwise into the next one up.
fn fold_level<H: MerkleHasher + ?Sized>(
    level: &[Vec<u8>],
    hasher: &H,
    options: TreeOptions,
    width: usize,
) -> Result<Vec<Vec<u8>>> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(parent_digest(hasher, &pair[0], &pair[1], options, width)?);
    }
    if let [last] = pairs.remainder() {
        match options.odd_node {
            OddNodePolicy::CarryUp => next.push(last.clone()),
            OddNodePolicy::DuplicateLast => {
                next.push(parent_digest(hasher, last, last, options, width)?)
            }
        }
    }
    Ok(next)
}

fn parent_digest<H: MerkleHasher + ?Sized>(
    hasher: &H,
    left: &[u8],
    right: &[u8],
    options: TreeOptions,
    width: usize,
) -> Result<Vec<u8>> {
    let digest = combine(hasher, left, right, options.sort_pairs);
    if digest.len() != width {
        return Err(MerkleError::HashContract(format!(
            "node digest is {} bytes, expected {}",
            digest.len(),
            width
        )));
    }
    Ok(digest)
}

//! Pluggable hashing and digest text encoding.
//!
//! The engine never hard-codes a hash algorithm: everything is generic over
//! [`MerkleHasher`], a one-way function from bytes to a fixed-width digest.
//! [`Blake3Hasher`] is the default implementation.

use crate::{MerkleError, Result};

/// A one-way hash over byte sequences producing a fixed-width digest.
///
/// Implementations must be deterministic and always return exactly
/// [`width`](MerkleHasher::width) bytes. Both properties are checked
/// defensively at build time; a violation surfaces as
/// [`MerkleError::HashContract`].
pub trait MerkleHasher {
    /// Digest width in bytes. Must be non-zero and constant for the
    /// lifetime of the hasher.
    fn width(&self) -> usize;

    /// Hash `data` into a digest of exactly `width()` bytes.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// The default hasher: plain Blake3, 32-byte digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn width(&self) -> usize {
        32
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }
}

/// Hash two sibling digests into their parent.
///
/// With `sort_pairs` the children are ordered bytewise before concatenation,
/// so the parent is independent of which side each child came from.
pub(crate) fn combine<H: MerkleHasher + ?Sized>(
    hasher: &H,
    left: &[u8],
    right: &[u8],
    sort_pairs: bool,
) -> Vec<u8> {
    let (a, b) = if sort_pairs && right < left {
        (right, left)
    } else {
        (left, right)
    };
    let mut buf = Vec::with_capacity(a.len() + b.len());
    buf.extend_from_slice(a);
    buf.extend_from_slice(b);
    hasher.digest(&buf)
}

/// Probe the hasher with one input and validate its contract: non-zero
/// declared width, output of exactly that width, and identical output for a
/// repeated call. Returns the width on success.
pub(crate) fn check_hasher_contract<H: MerkleHasher + ?Sized>(
    hasher: &H,
    probe: &[u8],
) -> Result<usize> {
    let width = hasher.width();
    if width == 0 {
        return Err(MerkleError::HashContract(
            "declared digest width is zero".into(),
        ));
    }
    let first = hasher.digest(probe);
    if first.len() != width {
        return Err(MerkleError::HashContract(format!(
            "digest is {} bytes, declared width is {}",
            first.len(),
            width
        )));
    }
    if hasher.digest(probe) != first {
        return Err(MerkleError::HashContract(
            "hasher returned differing digests for identical input".into(),
        ));
    }
    Ok(width)
}

/// Render a digest as a `0x`-prefixed lowercase hex string.
pub fn digest_to_hex(digest: &[u8]) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Parse a digest from a hex string, with or without a `0x`/`0X` prefix.
pub fn digest_from_hex(s: &str) -> Result<Vec<u8>> {
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(stripped).map_err(|e| MerkleError::InvalidData(format!("bad hex digest: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake3_hasher_width() {
        let hasher = Blake3Hasher;
        assert_eq!(hasher.digest(b"abc").len(), hasher.width());
    }

    #[test]
    fn test_combine_positional_is_order_sensitive() {
        let hasher = Blake3Hasher;
        let a = hasher.digest(b"a");
        let b = hasher.digest(b"b");
        assert_ne!(
            combine(&hasher, &a, &b, false),
            combine(&hasher, &b, &a, false)
        );
    }

    #[test]
    fn test_combine_sorted_is_order_invariant() {
        let hasher = Blake3Hasher;
        let a = hasher.digest(b"a");
        let b = hasher.digest(b"b");
        assert_eq!(
            combine(&hasher, &a, &b, true),
            combine(&hasher, &b, &a, true)
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = Blake3Hasher.digest(b"hex me");
        let text = digest_to_hex(&digest);
        assert!(text.starts_with("0x"));
        assert_eq!(text, text.to_lowercase());
        assert_eq!(digest_from_hex(&text).expect("decode"), digest);
    }

    #[test]
    fn test_hex_accepts_bare_and_uppercase_prefix() {
        assert_eq!(digest_from_hex("00ff").expect("bare"), vec![0x00, 0xff]);
        assert_eq!(digest_from_hex("0X00ff").expect("0X"), vec![0x00, 0xff]);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(digest_from_hex("0xzz").is_err());
        assert!(digest_from_hex("0x123").is_err()); // odd length
    }
}

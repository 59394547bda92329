//! # Hashing Utilities
//!
//! Cryptographic hash functions used throughout LUMEN. Two functions, two
//! jobs, and we refuse to support more without a very good reason:
//!
//! - **double SHA-256** — transaction ids. The double-hash construction
//!   closes the length-extension hole in plain SHA-256 and keeps our ids
//!   shaped like the ones every other UTXO ledger produces.
//!
//! - **BLAKE3** — the unspent-set digest. It never crosses a trust boundary,
//!   so we take the faster hash and the built-in resistance to length
//!   extension that comes with it.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input and return a fixed-size array.
///
/// The array type propagates naturally into id and digest construction,
/// so there is no reason to pay for a heap allocation here.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Used for transaction ids. The outer hash protects against length
/// extension; the construction matches Bitcoin's transaction id format,
/// which matters when LUMEN ids are compared against external references.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256_array(&sha256_array(data))
}

/// Compute the BLAKE3 hash of the input data.
///
/// The workhorse for internal digests. Uses the `blake3` crate, which picks
/// up SIMD acceleration automatically where available.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Hash multiple byte slices together without concatenation overhead.
///
/// Instead of allocating a buffer to concatenate inputs, we feed them
/// sequentially into the hasher. Same result, less allocation. Used for
/// hashing composite structures like `(outpoint || value || owner)`.
pub fn blake3_hash_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    *hasher.finalize().as_bytes()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        // SHA-256("abc") — FIPS 180-2 test vector.
        let digest = sha256_array(b"abc");
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn double_sha256_is_sha256_applied_twice() {
        let once = sha256_array(b"lumen");
        let twice = sha256_array(&once);
        assert_eq!(double_sha256(b"lumen"), twice);
    }

    #[test]
    fn blake3_is_deterministic() {
        assert_eq!(blake3_hash(b"settle"), blake3_hash(b"settle"));
        assert_ne!(blake3_hash(b"settle"), blake3_hash(b"settled"));
    }

    #[test]
    fn multi_matches_concatenation() {
        let joined = blake3_hash(b"outpointvalue");
        let parts = blake3_hash_multi(&[b"outpoint", b"value"]);
        assert_eq!(joined, parts);
    }
}

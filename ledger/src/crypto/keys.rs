//! # Key Management
//!
//! Ed25519 keypair generation and serialization for LUMEN output owners.
//!
//! Every spendable output on the ledger is locked to exactly one public key,
//! and every input that consumes an output must carry a signature that
//! verifies against that key. This module provides the keypair, public-key,
//! and signature types those rules are written in terms of.
//!
//! ## Why Ed25519?
//!
//! - Deterministic signatures (no k-value footguns like ECDSA).
//! - 128-bit security level in 32+32 bytes. Compact and sufficient.
//! - Fast verification — important when a single epoch can mean checking a
//!   signature per input across thousands of candidate transactions.
//!
//! ## Security considerations
//!
//! - Key generation uses OS-level RNG (`OsRng`). If your OS RNG is broken,
//!   you have bigger problems than LUMEN.
//! - Secret key bytes are never logged and never appear in `Debug` output.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur during key operations.
///
/// Intentionally vague about *why* something failed — error messages that
/// describe key material are a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or not a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// A LUMEN keypair wrapping an Ed25519 signing key.
///
/// Whoever holds the signing key controls every output locked to the
/// corresponding public key. Guard it accordingly.
///
/// ## Serialization
///
/// `LumenKeypair` intentionally does NOT implement `Serialize`/`Deserialize`.
/// Serializing private keys should be a deliberate, conscious act, not
/// something that happens because a keypair ended up inside a JSON response.
/// Use `to_bytes()` / `from_seed()` explicitly.
pub struct LumenKeypair {
    signing_key: SigningKey,
}

/// The public half of a LUMEN identity, safe to share with the world.
///
/// This is what appears in the `owner` field of every output. Recipients
/// hand it out to receive funds; validators use it to check spend
/// authorization.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumenPublicKey {
    bytes: [u8; 32],
}

/// An Ed25519 signature over an input's signing payload.
///
/// 64 bytes, deterministic for a given (key, message) pair. Stored as
/// `Vec<u8>` for serde compatibility, but always exactly 64 bytes when
/// produced by [`LumenKeypair::sign`]. A malformed signature never panics —
/// verification simply returns `false`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumenSignature {
    bytes: Vec<u8>,
}

impl LumenKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Construct a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed. Useful for test
    /// fixtures and for deriving keys from KDF output.
    ///
    /// **Warning**: a weak seed means a weak key. Use a proper CSPRNG or
    /// KDF to produce the seed bytes.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(KeyError::InvalidSecretKey);
        }
        let mut arr = [0u8; SECRET_KEY_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self::from_seed(&arr))
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> LumenPublicKey {
        LumenPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Sign a message and return a `LumenSignature`.
    ///
    /// Deterministic — the same (key, message) pair always produces the
    /// same signature. No nonce management, no randomness at signing time.
    pub fn sign(&self, message: &[u8]) -> LumenSignature {
        let sig = self.signing_key.sign(message);
        LumenSignature {
            bytes: sig.to_bytes().to_vec(),
        }
    }

    /// Verify a signature against this keypair's public key.
    ///
    /// Convenience method — equivalent to `self.public_key().verify(..)`.
    pub fn verify(&self, message: &[u8], signature: &LumenSignature) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Export the raw 32-byte secret key material.
    ///
    /// **Handle with extreme care.** This is the only secret standing
    /// between an attacker and every output the key controls.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Clone for LumenKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a private key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for LumenKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material in debug output. Not even partially.
        write!(f, "LumenKeypair(pub={})", self.public_key().to_hex())
    }
}

impl PartialEq for LumenKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in a non-constant-time way is a bad habit, and for identity
    /// purposes the public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for LumenKeypair {}

// ---------------------------------------------------------------------------
// LumenPublicKey
// ---------------------------------------------------------------------------

impl LumenPublicKey {
    /// Create a `LumenPublicKey` from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Try to create a `LumenPublicKey` from a byte slice.
    ///
    /// Validates the length and that the bytes represent a valid Ed25519
    /// point. Some 32-byte values aren't points on the curve, and accepting
    /// them would mean outputs that can never be spent.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != 32 {
            return Err(KeyError::InvalidPublicKey);
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);

        // Catches low-order points and other degenerate cases.
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;

        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Verify a signature against this public key.
    ///
    /// Returns `true` if the signature is valid, `false` otherwise. A
    /// boolean rather than a `Result` because callers on the validation
    /// path want a yes/no answer, not a failure taxonomy.
    pub fn verify(&self, message: &[u8], signature: &LumenSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig_bytes: [u8; 64] = match signature.bytes.as_slice().try_into() {
            Ok(b) => b,
            Err(_) => return false,
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }

    /// Hex-encoded representation. 64 characters for 32 bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        if bytes.len() != 32 {
            return Err(KeyError::InvalidPublicKey);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { bytes: arr })
    }

    /// Base58-encoded representation — what users see as an address.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.bytes).into_string()
    }
}

impl Hash for LumenPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for LumenPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for LumenPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LumenPublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// LumenSignature
// ---------------------------------------------------------------------------

impl LumenSignature {
    /// Create a signature from the raw 64-byte representation.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the hex-encoded signature string. 128 characters for a valid sig.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for LumenSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for LumenSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 128 {
            write!(f, "LumenSignature({}...{})", &hex_str[..8], &hex_str[120..])
        } else {
            write!(f, "LumenSignature({})", hex_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = LumenKeypair::generate();
        assert_eq!(kp.public_key().as_bytes().len(), 32);
        assert_eq!(kp.to_bytes().len(), 32);
    }

    #[test]
    fn sign_verify_roundtrip() {
        let kp = LumenKeypair::generate();
        let msg = b"spend outpoint 0";
        let sig = kp.sign(msg);
        assert!(kp.verify(msg, &sig));
    }

    #[test]
    fn wrong_message_fails_verification() {
        let kp = LumenKeypair::generate();
        let sig = kp.sign(b"correct message");
        assert!(!kp.verify(b"wrong message", &sig));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = LumenKeypair::generate();
        let kp2 = LumenKeypair::generate();
        let sig = kp1.sign(b"message");
        assert!(!kp2.verify(b"message", &sig));
    }

    #[test]
    fn deterministic_from_seed() {
        let seed = [42u8; 32];
        let kp1 = LumenKeypair::from_seed(&seed);
        let kp2 = LumenKeypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
    }

    #[test]
    fn deterministic_signatures() {
        // Ed25519 is deterministic — same key + same message = same signature.
        let kp = LumenKeypair::generate();
        let msg = b"determinism is underrated";
        assert_eq!(kp.sign(msg).as_bytes(), kp.sign(msg).as_bytes());
    }

    #[test]
    fn keypair_hex_roundtrip() {
        let kp = LumenKeypair::generate();
        let hex_str = hex::encode(kp.to_bytes());
        let restored = LumenKeypair::from_hex(&hex_str).unwrap();
        assert_eq!(kp.public_key(), restored.public_key());
    }

    #[test]
    fn invalid_hex_rejected() {
        assert!(LumenKeypair::from_hex("deadbeef").is_err());
        assert!(LumenKeypair::from_hex("not-hex-at-all").is_err());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = LumenKeypair::generate().public_key();
        let recovered = LumenPublicKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(pk, recovered);
    }

    #[test]
    fn public_key_rejects_wrong_length() {
        let short = [0u8; 16];
        assert!(LumenPublicKey::try_from_slice(&short).is_err());
    }

    #[test]
    fn truncated_signature_fails_closed() {
        let kp = LumenKeypair::generate();
        let garbage = LumenSignature { bytes: vec![0xAB; 12] };
        assert!(!kp.verify(b"anything", &garbage));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let kp = LumenKeypair::generate();
        let debug_str = format!("{:?}", kp);
        assert!(debug_str.starts_with("LumenKeypair(pub="));
        assert!(!debug_str.contains("signing_key"));
    }

    #[test]
    fn public_key_serde_roundtrip() {
        let pk = LumenKeypair::generate().public_key();
        let json = serde_json::to_string(&pk).unwrap();
        let recovered: LumenPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(pk, recovered);
    }
}

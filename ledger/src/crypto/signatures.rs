//! # Digital Signatures
//!
//! Ed25519 signing and verification — the backbone of spend authorization
//! in LUMEN.
//!
//! Every input that consumes an output must prove it speaks for the output's
//! owner key. This module provides the signing and verification functions
//! that make that possible, plus the [`SignatureVerifier`] seam the epoch
//! validator is written against.
//!
//! ## Why a trait and not a function call?
//!
//! The validator doesn't care which signature scheme is in use — it cares
//! that *some* oracle answers "does this signature authorize this payload
//! for this owner?". Modeling that as a trait:
//!
//! 1. Keeps the validation logic testable with deterministic fakes, no key
//!    material required.
//! 2. Leaves a natural extension point for threshold or batch verification.
//! 3. Makes the trust boundary explicit in the type signature.

use super::keys::{LumenKeypair, LumenPublicKey, LumenSignature};

/// Sign a message using a LUMEN keypair.
///
/// Produces a 64-byte Ed25519 signature over the given message bytes.
/// Deterministic per RFC 8032 — no nonce reuse bugs possible.
pub fn sign(keypair: &LumenKeypair, message: &[u8]) -> LumenSignature {
    keypair.sign(message)
}

/// Verify an Ed25519 signature against a public key and message.
///
/// Returns `true` if the signature is valid, `false` otherwise. We
/// intentionally don't distinguish between "invalid signature" and "wrong
/// public key" — both are just "nope." Giving attackers a detailed error
/// oracle is a bad idea.
pub fn verify(public_key: &LumenPublicKey, message: &[u8], signature: &LumenSignature) -> bool {
    public_key.verify(message, signature)
}

// ---------------------------------------------------------------------------
// SignatureVerifier
// ---------------------------------------------------------------------------

/// Oracle deciding whether a signature authorizes a payload for an owner key.
///
/// Implementations must be pure: the same `(owner, message, signature)`
/// triple must always produce the same answer, with no side effects. The
/// epoch validator relies on this when it re-checks transactions.
pub trait SignatureVerifier {
    /// Returns `true` iff `signature` is a valid signature by `owner` over
    /// `message`.
    fn verify(&self, owner: &LumenPublicKey, message: &[u8], signature: &LumenSignature) -> bool;
}

/// The production verifier: plain Ed25519 via `ed25519-dalek`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, owner: &LumenPublicKey, message: &[u8], signature: &LumenSignature) -> bool {
        owner.verify(message, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_roundtrip() {
        let kp = LumenKeypair::generate();
        let sig = sign(&kp, b"authorize spend");
        assert!(verify(&kp.public_key(), b"authorize spend", &sig));
    }

    #[test]
    fn ed25519_verifier_agrees_with_key() {
        let kp = LumenKeypair::generate();
        let sig = kp.sign(b"payload");
        let verifier = Ed25519Verifier;
        assert!(verifier.verify(&kp.public_key(), b"payload", &sig));
        assert!(!verifier.verify(&kp.public_key(), b"other payload", &sig));
    }
}

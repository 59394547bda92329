//! # Cryptographic Primitives for LUMEN
//!
//! Every signing operation and every hash in the ledger core flows through
//! here. We deliberately chose boring, well-audited cryptography:
//!
//! - **Ed25519** for signatures — fast, deterministic, and nobody has broken it.
//! - **double SHA-256** for transaction ids — compatibility with the rest of
//!   the UTXO world.
//! - **BLAKE3** for internal digests — because we live in the future.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. If you're tempted to optimize these functions, please
//! reconsider. Then reconsider again.

pub mod hash;
pub mod keys;
pub mod signatures;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use hash::{blake3_hash, blake3_hash_multi, double_sha256, sha256_array};
pub use keys::{KeyError, LumenKeypair, LumenPublicKey, LumenSignature};
pub use signatures::{sign, verify, Ed25519Verifier, SignatureVerifier};

//! # Ledger Configuration & Constants
//!
//! Every magic number in LUMEN lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! These values are consensus-critical: two validators disagreeing on any of
//! them will disagree on transaction ids, and from there on everything else.
//! Change them during devnet or not at all.

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// Ledger-rule generation. Bump on any change that alters which transaction
/// batches are accepted — validation rules, conflict resolution, id format.
pub const LEDGER_RULES_VERSION: u16 = 1;

/// The full crate version string, assembled at compile time so we don't
/// allocate for something this trivial at runtime.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// Protocol fingerprint used in diagnostics and log output to identify the
/// rule set a validator is running.
pub const PROTOCOL_FINGERPRINT: &str = "ALAS-LUMEN-2026";

// ---------------------------------------------------------------------------
// Monetary Unit
// ---------------------------------------------------------------------------

/// Name of the smallest indivisible value unit. All output values are
/// integers denominated in lux; there is no floating point anywhere near
/// money in this codebase.
pub const VALUE_UNIT: &str = "lux";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 — deterministic signatures, 128-bit security, no k-value
/// footguns. The only sane choice for a ledger in 2026.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Ed25519 secret keys are 32 bytes.
pub const SIGNING_KEY_LENGTH: usize = 32;

/// Public (verifying) key length in bytes.
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes. If yours isn't, something
/// has gone terribly wrong.
pub const SIGNATURE_LENGTH: usize = 64;

/// Hash function for transaction ids: double SHA-256 over the canonical
/// transaction bytes, matching the construction the rest of the UTXO world
/// settled on in 2009.
pub const TX_ID_ALGORITHM: &str = "double-SHA-256";

/// Transaction id length in bytes (a SHA-256 digest).
pub const TX_ID_LENGTH: usize = 32;

/// Hash function for the unspent-set digest. BLAKE3 — faster than SHA-256
/// on every platform that matters, and this digest never leaves the node.
pub const STATE_DIGEST_ALGORITHM: &str = "BLAKE3";

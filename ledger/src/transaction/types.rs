//! Core type definitions for LUMEN transactions.
//!
//! These types form the vocabulary of everything the ledger does: outputs
//! locked to owner keys, outpoints naming a specific output of a specific
//! transaction, and inputs that claim an outpoint and prove the right to
//! spend it. They are kept small and `Copy`-friendly where possible to
//! avoid heap allocations on the hot validation path.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::keys::{LumenPublicKey, LumenSignature};

// ---------------------------------------------------------------------------
// TxHash
// ---------------------------------------------------------------------------

/// A transaction id: the double-SHA-256 digest of the transaction's
/// canonical bytes.
///
/// `TxHash` is `Ord`, and that ordering is load-bearing: the epoch
/// validator's conflict resolution breaks ties by ascending id, so two
/// validators given the same batch eliminate the same transactions. Never
/// replace the derived ordering with anything iteration-order dependent.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TxHash([u8; 32]);

impl TxHash {
    /// Wrap a raw 32-byte digest.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex-encoded transaction id.
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// UtxoId
// ---------------------------------------------------------------------------

/// Reference to a specific output of a specific transaction — an outpoint.
///
/// Uniquely identifies one not-yet-spent output: the id of the transaction
/// that produced it, and the output's position within that transaction.
/// Two identifiers are equal iff both fields are equal. Used as an ordered
/// map key throughout the unspent set and the conflict machinery.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UtxoId {
    /// Id of the transaction that produced the output.
    pub origin: TxHash,
    /// Position of the output within the producing transaction.
    pub index: u32,
}

impl UtxoId {
    /// Create a new outpoint reference.
    pub const fn new(origin: TxHash, index: u32) -> Self {
        Self { origin, index }
    }

    /// Canonical byte encoding: 32-byte origin id, then the index as
    /// little-endian `u32`. Used in signing payloads and digests.
    pub fn to_bytes(&self) -> [u8; 36] {
        let mut bytes = [0u8; 36];
        bytes[..32].copy_from_slice(self.origin.as_bytes());
        bytes[32..36].copy_from_slice(&self.index.to_le_bytes());
        bytes
    }
}

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", &self.origin.to_hex()[..16], self.index)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A spendable value record: an amount of lux locked to an owner key.
///
/// Immutable once created. The value is a *signed* 64-bit integer in the
/// smallest unit. Outputs arrive from untrusted peers, and a negative value
/// is something the validator must be able to represent in order to reject —
/// making it unrepresentable here would just move the garbage one
/// deserialization layer out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Value in lux. Validation rejects anything below zero.
    pub value: i64,
    /// The public key this output is locked to.
    pub owner: LumenPublicKey,
}

impl Output {
    /// Create a new output.
    pub fn new(value: i64, owner: LumenPublicKey) -> Self {
        Self { value, owner }
    }

    /// Canonical byte encoding: value as little-endian `i64`, then the
    /// 32 owner-key bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(40);
        buf.extend_from_slice(&self.value.to_le_bytes());
        buf.extend_from_slice(self.owner.as_bytes());
        buf
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A claim on an unspent output, plus the proof of the right to spend it.
///
/// The signature covers the transaction's signing payload for this input's
/// position (see `Transaction::signing_payload`). Fresh from the builder it
/// is `None`; `signing::sign_input` fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// The outpoint this input consumes.
    pub claimed: UtxoId,
    /// Ed25519 signature by the claimed output's owner. `None` until signed.
    pub signature: Option<LumenSignature>,
}

impl Input {
    /// Create an unsigned input claiming the given outpoint.
    pub fn new(claimed: UtxoId) -> Self {
        Self {
            claimed,
            signature: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

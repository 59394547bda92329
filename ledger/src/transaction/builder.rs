//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow:
//! add inputs and outputs, call `.build()`, and get back an unsigned
//! [`Transaction`] with a deterministic id derived from its contents.
//!
//! The builder does not sign -- that happens in [`super::signing`]. This
//! separation keeps construction testable without key material.

use serde::{Deserialize, Serialize};

use super::types::{Input, Output, TxHash, UtxoId};
use crate::crypto::hash::double_sha256;
use crate::crypto::keys::LumenPublicKey;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A LUMEN transaction: an ordered sequence of inputs consuming unspent
/// outputs, and an ordered sequence of outputs creating new ones.
///
/// The `id` field is the double-SHA-256 hash of the canonical serialization
/// of all fields *except* signatures. This means the id is stable across
/// signing -- you can compute it before the inputs are signed and it will
/// not change afterward. The id doubles as the origin component of every
/// outpoint this transaction produces.
///
/// # Canonical Byte Format
///
/// [`Transaction::signable_bytes`] deterministically serializes: the input
/// count, each input's claimed outpoint, the output count, and each
/// output's value and owner. Signatures are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id: `double_sha256(signable_bytes)`.
    pub id: TxHash,

    /// Outpoints consumed, in order. Each carries its own signature slot.
    pub inputs: Vec<Input>,

    /// Outputs produced, in order. Position `i` becomes outpoint
    /// `{ origin: id, index: i }` once the transaction is accepted.
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Returns the canonical byte representation used for id computation.
    ///
    /// Fixed-width little-endian integers, no serde -- field ordering in a
    /// serialization framework is not a consensus rule we want to inherit.
    ///
    /// Excluded fields: `id`, every input's `signature`.
    pub fn signable_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + 36 * self.inputs.len() + 40 * self.outputs.len());

        buf.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            buf.extend_from_slice(&input.claimed.to_bytes());
        }

        buf.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            buf.extend_from_slice(&output.to_bytes());
        }

        buf
    }

    /// The canonical message an input's signature must cover.
    ///
    /// For input position `i`: that input's claimed outpoint followed by
    /// every output. Binding the outpoint pins *which* coin is being spent;
    /// binding all outputs pins *where* the value goes, so nobody can
    /// reroute a signed spend. Other inputs are not covered, which lets
    /// multiple owners sign the same transaction independently.
    ///
    /// Returns `None` if `input_index` is out of range.
    pub fn signing_payload(&self, input_index: usize) -> Option<Vec<u8>> {
        let input = self.inputs.get(input_index)?;

        let mut buf = Vec::with_capacity(36 + 40 * self.outputs.len());
        buf.extend_from_slice(&input.claimed.to_bytes());
        for output in &self.outputs {
            buf.extend_from_slice(&output.to_bytes());
        }
        Some(buf)
    }

    /// Computes the transaction id from the current field values.
    ///
    /// `id = double_sha256(signable_bytes)`. Deterministic and independent
    /// of signature state.
    pub fn compute_id(&self) -> TxHash {
        TxHash::new(double_sha256(&self.signable_bytes()))
    }

    /// The outpoints this transaction claims, in input order. Duplicates are
    /// preserved -- detecting them is the validator's job, not ours.
    pub fn claimed_ids(&self) -> impl Iterator<Item = UtxoId> + '_ {
        self.inputs.iter().map(|input| input.claimed)
    }

    /// Returns `true` if every input carries a signature.
    pub fn is_fully_signed(&self) -> bool {
        self.inputs.iter().all(|input| input.signature.is_some())
    }

    /// Total serialized size in bytes. Uses JSON serialization for a
    /// conservative upper bound; used for batch-size diagnostics.
    pub fn size_bytes(&self) -> usize {
        serde_json::to_vec(self).map(|v| v.len()).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for constructing unsigned [`Transaction`] instances.
///
/// # Usage
///
/// ```rust,no_run
/// use lumen_ledger::crypto::keys::LumenKeypair;
/// use lumen_ledger::transaction::{TransactionBuilder, TxHash, UtxoId};
///
/// let recipient = LumenKeypair::generate().public_key();
/// let coin = UtxoId::new(TxHash::new([0u8; 32]), 0);
///
/// let tx = TransactionBuilder::new()
///     .input(coin)
///     .output(10_000, recipient)
///     .build();
/// ```
///
/// The resulting transaction is unsigned; run it through
/// [`super::signing::sign_input`] before submitting it for validation.
#[derive(Default)]
pub struct TransactionBuilder {
    inputs: Vec<Input>,
    outputs: Vec<Output>,
}

impl TransactionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input claiming the given outpoint.
    pub fn input(mut self, claimed: UtxoId) -> Self {
        self.inputs.push(Input::new(claimed));
        self
    }

    /// Adds an output of `value` lux locked to `owner`.
    pub fn output(mut self, value: i64, owner: LumenPublicKey) -> Self {
        self.outputs.push(Output::new(value, owner));
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    ///
    /// The transaction id is computed automatically from the canonical
    /// bytes. Every input's `signature` field is `None`.
    pub fn build(self) -> Transaction {
        let mut tx = Transaction {
            id: TxHash::new([0u8; 32]),
            inputs: self.inputs,
            outputs: self.outputs,
        };
        tx.id = tx.compute_id();
        tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

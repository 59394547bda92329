//! Epoch validation: per-transaction checks, conflict resolution, and the
//! atomic commit that advances the ledger.
//!
//! Every candidate transaction must pass [`EpochValidator::check`]. The
//! checks are ordered from cheapest to most expensive (map lookups before
//! signature verification) to fail fast and waste minimal CPU on invalid
//! transactions. Across the batch, [`EpochValidator::run_epoch`] resolves
//! double-spend conflicts and applies the surviving subset in one shot.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, info};

use super::conflict::ConflictGraph;
use crate::crypto::signatures::{Ed25519Verifier, SignatureVerifier};
use crate::transaction::builder::Transaction;
use crate::transaction::types::{Output, TxHash, UtxoId};
use crate::utxo::pool::UtxoPool;

// ---------------------------------------------------------------------------
// RejectReason
// ---------------------------------------------------------------------------

/// Why a transaction failed individual validation.
///
/// Each variant maps to a specific validation rule. Rejection is an
/// expected outcome, not a fault: at the batch level it surfaces only as
/// exclusion from the accepted set, and these reasons exist for
/// diagnostics and logging.
#[derive(Debug, Error)]
pub enum RejectReason {
    /// An input claims an outpoint that is not in the unspent set.
    #[error("input {index} claims unknown outpoint {id}")]
    UnknownUtxo { index: usize, id: UtxoId },

    /// Two inputs of the same transaction claim the same outpoint.
    #[error("input {index} claims outpoint {id} already claimed by this transaction")]
    DuplicateClaim { index: usize, id: UtxoId },

    /// An input carries no signature.
    #[error("input {index} is unsigned")]
    MissingSignature { index: usize },

    /// An input's signature does not verify against the owner of the
    /// output it claims.
    #[error("input {index} signature does not verify against the claimed output's owner")]
    BadSignature { index: usize },

    /// An output's value is below zero.
    #[error("output {index} has negative value {value}")]
    NegativeOutput { index: usize, value: i64 },

    /// The outputs are worth more than the inputs — value from nowhere.
    #[error("outputs total {output_sum} lux exceed inputs total {input_sum} lux")]
    ValueCreated { input_sum: i128, output_sum: i128 },
}

// ---------------------------------------------------------------------------
// EpochValidator
// ---------------------------------------------------------------------------

/// Validates transaction batches against an owned snapshot of the unspent
/// set and advances that snapshot one epoch at a time.
///
/// The validator owns its pool outright — constructed from a deep copy, so
/// later caller mutations of the source can never bleed into an epoch in
/// progress. One epoch is atomic with respect to the pool: mutation happens
/// only after the accepted subset is fully determined, as a single staged
/// batch. Concurrent epochs against one validator are unrepresentable
/// (`run_epoch` takes `&mut self`).
///
/// The signature oracle is injected so the validation logic can be
/// exercised with deterministic fakes; production code uses the default
/// [`Ed25519Verifier`].
pub struct EpochValidator<V: SignatureVerifier = Ed25519Verifier> {
    pool: UtxoPool,
    verifier: V,
}

impl EpochValidator<Ed25519Verifier> {
    /// Create a validator over a deep copy of `pool`, verifying signatures
    /// with plain Ed25519.
    pub fn new(pool: &UtxoPool) -> Self {
        Self::with_verifier(pool, Ed25519Verifier)
    }
}

impl<V: SignatureVerifier> EpochValidator<V> {
    /// Create a validator over a deep copy of `pool` with a custom
    /// signature oracle.
    pub fn with_verifier(pool: &UtxoPool, verifier: V) -> Self {
        Self {
            pool: pool.clone(),
            verifier,
        }
    }

    /// Read-only view of the current unspent set.
    pub fn pool(&self) -> &UtxoPool {
        &self.pool
    }

    /// Consume the validator and hand back the unspent set it owns.
    pub fn into_pool(self) -> UtxoPool {
        self.pool
    }

    /// Check a single transaction against the current unspent set.
    ///
    /// The rules, in order (short-circuit on the first failure):
    ///
    /// 1. **Existence** — every claimed outpoint is in the unspent set.
    /// 2. **No intra-transaction double spend** — no outpoint claimed twice.
    /// 3. **Authorization** — each input's signature verifies against the
    ///    claimed output's owner, over that input's signing payload.
    /// 4. **Non-negative outputs** — no output value below zero.
    /// 5. **Value conservation** — input total ≥ output total. The
    ///    difference is an implicit fee and is not otherwise accounted for
    ///    here.
    ///
    /// Read-only; safe to call repeatedly. There is no partial acceptance:
    /// any failure rejects the whole transaction.
    pub fn check(&self, tx: &Transaction) -> Result<(), RejectReason> {
        let mut claimed = BTreeSet::new();
        let mut input_sum: i128 = 0;

        for (index, input) in tx.inputs.iter().enumerate() {
            let output = self
                .pool
                .get(&input.claimed)
                .ok_or(RejectReason::UnknownUtxo {
                    index,
                    id: input.claimed,
                })?;

            if !claimed.insert(input.claimed) {
                return Err(RejectReason::DuplicateClaim {
                    index,
                    id: input.claimed,
                });
            }

            let signature = input
                .signature
                .as_ref()
                .ok_or(RejectReason::MissingSignature { index })?;

            // Index is in range, so the payload always exists.
            let payload = tx.signing_payload(index).unwrap_or_default();
            if !self.verifier.verify(&output.owner, &payload, signature) {
                return Err(RejectReason::BadSignature { index });
            }

            input_sum += output.value as i128;
        }

        let mut output_sum: i128 = 0;
        for (index, output) in tx.outputs.iter().enumerate() {
            if output.value < 0 {
                return Err(RejectReason::NegativeOutput {
                    index,
                    value: output.value,
                });
            }
            output_sum += output.value as i128;
        }

        if input_sum < output_sum {
            return Err(RejectReason::ValueCreated {
                input_sum,
                output_sum,
            });
        }

        Ok(())
    }

    /// The individual-validity predicate: [`check`](Self::check) collapsed
    /// to a boolean for callers that don't care why.
    pub fn validate(&self, tx: &Transaction) -> bool {
        self.check(tx).is_ok()
    }

    /// The implicit fee a transaction pays: input total minus output total.
    ///
    /// `None` if the transaction is not individually valid against the
    /// current unspent set — an invalid transaction pays nothing.
    pub fn fee_of(&self, tx: &Transaction) -> Option<i64> {
        self.check(tx).ok()?;

        let input_sum: i128 = tx
            .inputs
            .iter()
            .filter_map(|input| self.pool.get(&input.claimed))
            .map(|output| output.value as i128)
            .sum();
        let output_sum: i128 = tx.outputs.iter().map(|o| o.value as i128).sum();

        // Both sums fit in i64 individually for any valid transaction, and
        // input_sum >= output_sum, so the difference fits too.
        Some((input_sum - output_sum) as i64)
    }

    /// Run one epoch: filter, resolve conflicts, commit, return the
    /// accepted subset.
    ///
    /// 1. Filter `candidates` to the individually-valid subset, recording
    ///    each transaction's claimed outpoints. Duplicate candidates (same
    ///    id) collapse to one; malformed ones are silently excluded.
    /// 2. Build the conflict relation: an edge wherever two claim sets
    ///    intersect.
    /// 3. Greedily eliminate the most-conflicted transaction (ties to the
    ///    ascending id) until the relation is empty.
    /// 4. Commit the survivors: retire every claimed outpoint, then mint
    ///    one outpoint per produced output, keyed `{id, position}`. The
    ///    mutation is staged first and applied as a batch — no observer
    ///    ever sees a partially-applied epoch.
    ///
    /// The accepted subset is returned in ascending-id order. An empty
    /// batch is a normal input and yields an empty accepted set.
    pub fn run_epoch(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        let mut valid: BTreeMap<TxHash, &Transaction> = BTreeMap::new();
        let mut claims: BTreeMap<TxHash, BTreeSet<UtxoId>> = BTreeMap::new();

        for tx in candidates {
            match self.check(tx) {
                Ok(()) => {
                    valid.insert(tx.id, tx);
                    claims.insert(tx.id, tx.claimed_ids().collect());
                }
                Err(reason) => {
                    debug!(tx = %tx.id, %reason, "transaction rejected");
                }
            }
        }

        let eliminated = ConflictGraph::build(&claims).eliminate_all();
        for id in &eliminated {
            debug!(tx = %id, "transaction eliminated by conflict resolution");
            valid.remove(id);
        }

        // Stage the full mutation before touching the pool.
        let mut retired: Vec<UtxoId> = Vec::new();
        let mut minted: Vec<(UtxoId, Output)> = Vec::new();
        for tx in valid.values() {
            retired.extend(tx.claimed_ids());
            for (position, output) in tx.outputs.iter().enumerate() {
                minted.push((UtxoId::new(tx.id, position as u32), output.clone()));
            }
        }

        for id in &retired {
            self.pool.remove(id);
        }
        for (id, output) in minted {
            self.pool.insert(id, output);
        }

        info!(
            candidates = candidates.len(),
            valid = valid.len() + eliminated.len(),
            eliminated = eliminated.len(),
            accepted = valid.len(),
            unspent = self.pool.len(),
            "epoch committed"
        );

        valid.into_values().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

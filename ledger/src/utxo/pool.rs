//! # The Unspent Output Set
//!
//! The pool maps outpoints to the outputs they name — the entire spendable
//! state of the ledger at a point in time. Invariant: every key corresponds
//! to an output produced by some accepted transaction and not yet consumed
//! by any accepted transaction.
//!
//! ## Current Implementation
//!
//! A `BTreeMap` keyed by outpoint. The ordered keys make iteration, the
//! digest, and every diagnostic dump deterministic for free, and the pool
//! sizes this core handles per epoch don't justify anything cleverer.
//!
//! Cloning a pool yields a deep, independent copy — the epoch validator
//! relies on this to take a snapshot it can mutate without aliasing the
//! caller's state.

use std::collections::btree_map;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::crypto::hash::blake3_hash_multi;
use crate::transaction::types::{Output, UtxoId};

// ---------------------------------------------------------------------------
// PoolError
// ---------------------------------------------------------------------------

/// Errors returned by pool lookups.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The outpoint is not in the unspent set.
    #[error("unknown outpoint {id}: not in the unspent set")]
    NotFound { id: UtxoId },
}

// ---------------------------------------------------------------------------
// UtxoPool
// ---------------------------------------------------------------------------

/// The set of currently spendable outputs, keyed by outpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtxoPool {
    entries: BTreeMap<UtxoId, Output>,
}

impl UtxoPool {
    /// Create a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test for an outpoint.
    pub fn contains(&self, id: &UtxoId) -> bool {
        self.entries.contains_key(id)
    }

    /// Retrieve the output an outpoint names, if present.
    pub fn get(&self, id: &UtxoId) -> Option<&Output> {
        self.entries.get(id)
    }

    /// Retrieve the output an outpoint names, failing if absent.
    ///
    /// Use this where absence is a contract violation rather than a normal
    /// outcome; use [`get`](Self::get) on validation paths where "not
    /// there" is just a rejected transaction.
    pub fn lookup(&self, id: &UtxoId) -> Result<&Output, PoolError> {
        self.entries.get(id).ok_or(PoolError::NotFound { id: *id })
    }

    /// Insert an output under the given outpoint.
    ///
    /// Overwrites silently if the outpoint already exists. Outpoints are
    /// derived from content hashes and expected unique by construction, so
    /// a collision here is a don't-care case, not something we validate.
    pub fn insert(&mut self, id: UtxoId, output: Output) {
        self.entries.insert(id, output);
    }

    /// Remove an outpoint from the set. No-op if absent.
    ///
    /// Returns the removed output so commit paths can audit what they spent.
    pub fn remove(&mut self, id: &UtxoId) -> Option<Output> {
        self.entries.remove(id)
    }

    /// Number of unspent outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no outputs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(outpoint, output)` pairs in outpoint order.
    pub fn iter(&self) -> btree_map::Iter<'_, UtxoId, Output> {
        self.entries.iter()
    }

    /// Sum of all unspent values, in lux.
    ///
    /// Widened to `i128` so a pathological pool can't overflow the total.
    pub fn total_value(&self) -> i128 {
        self.entries.values().map(|o| o.value as i128).sum()
    }

    /// Compute a deterministic digest of the entire unspent set.
    ///
    /// 1. For each `(outpoint, output)` in key order, compute
    ///    `BLAKE3(outpoint_bytes || output_bytes)`.
    /// 2. Build a binary Merkle tree over the leaf hashes (odd leaves are
    ///    paired with themselves).
    /// 3. Return the root.
    ///
    /// Insertion order cannot affect the result — the map is ordered.
    /// An empty pool digests to `[0u8; 32]`.
    pub fn digest(&self) -> [u8; 32] {
        if self.entries.is_empty() {
            return [0u8; 32];
        }

        let mut level: Vec<[u8; 32]> = self
            .entries
            .iter()
            .map(|(id, output)| blake3_hash_multi(&[&id.to_bytes(), &output.to_bytes()]))
            .collect();

        while level.len() > 1 {
            let mut next_level = Vec::with_capacity((level.len() + 1) / 2);
            for chunk in level.chunks(2) {
                let right = if chunk.len() == 2 { &chunk[1] } else { &chunk[0] };
                next_level.push(blake3_hash_multi(&[&chunk[0], right]));
            }
            level = next_level;
        }

        level[0]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::LumenKeypair;
    use crate::transaction::types::TxHash;

    fn outpoint(byte: u8, index: u32) -> UtxoId {
        UtxoId::new(TxHash::new([byte; 32]), index)
    }

    fn coin(value: i64, seed: u8) -> Output {
        Output::new(value, LumenKeypair::from_seed(&[seed; 32]).public_key())
    }

    #[test]
    fn insert_and_get() {
        let mut pool = UtxoPool::new();
        let id = outpoint(1, 0);
        let out = coin(100, 9);

        pool.insert(id, out.clone());
        assert!(pool.contains(&id));
        assert_eq!(pool.get(&id), Some(&out));
        assert_eq!(pool.get(&outpoint(2, 0)), None);
    }

    #[test]
    fn lookup_fails_on_missing_outpoint() {
        let pool = UtxoPool::new();
        match pool.lookup(&outpoint(1, 0)) {
            Err(PoolError::NotFound { id }) => assert_eq!(id, outpoint(1, 0)),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut pool = UtxoPool::new();
        assert_eq!(pool.remove(&outpoint(1, 0)), None);

        pool.insert(outpoint(1, 0), coin(100, 9));
        assert!(pool.remove(&outpoint(1, 0)).is_some());
        assert!(pool.is_empty());
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut pool = UtxoPool::new();
        pool.insert(outpoint(1, 0), coin(100, 9));
        pool.insert(outpoint(1, 0), coin(200, 9));

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(&outpoint(1, 0)).unwrap().value, 200);
    }

    #[test]
    fn clone_is_a_deep_independent_copy() {
        let mut original = UtxoPool::new();
        original.insert(outpoint(1, 0), coin(100, 9));

        let mut copy = original.clone();
        copy.remove(&outpoint(1, 0));
        copy.insert(outpoint(2, 0), coin(50, 8));

        // Mutating the copy must not leak into the original, or back.
        assert!(original.contains(&outpoint(1, 0)));
        assert!(!original.contains(&outpoint(2, 0)));
        assert!(!copy.contains(&outpoint(1, 0)));
    }

    #[test]
    fn total_value_sums_all_outputs() {
        let mut pool = UtxoPool::new();
        pool.insert(outpoint(1, 0), coin(100, 9));
        pool.insert(outpoint(2, 0), coin(250, 8));
        assert_eq!(pool.total_value(), 350);
    }

    #[test]
    fn empty_pool_digest_is_zero() {
        assert_eq!(UtxoPool::new().digest(), [0u8; 32]);
    }

    #[test]
    fn digest_ignores_insertion_order() {
        let mut pool1 = UtxoPool::new();
        pool1.insert(outpoint(1, 0), coin(100, 9));
        pool1.insert(outpoint(2, 0), coin(200, 8));

        let mut pool2 = UtxoPool::new();
        pool2.insert(outpoint(2, 0), coin(200, 8));
        pool2.insert(outpoint(1, 0), coin(100, 9));

        assert_eq!(pool1.digest(), pool2.digest());
    }

    #[test]
    fn different_contents_different_digest() {
        let mut pool1 = UtxoPool::new();
        pool1.insert(outpoint(1, 0), coin(100, 9));

        let mut pool2 = UtxoPool::new();
        pool2.insert(outpoint(1, 0), coin(101, 9));

        assert_ne!(pool1.digest(), pool2.digest());
    }

    #[test]
    fn iteration_is_in_outpoint_order() {
        let mut pool = UtxoPool::new();
        pool.insert(outpoint(3, 0), coin(1, 9));
        pool.insert(outpoint(1, 1), coin(2, 9));
        pool.insert(outpoint(1, 0), coin(3, 9));

        let keys: Vec<_> = pool.iter().map(|(id, _)| *id).collect();
        assert_eq!(keys, vec![outpoint(1, 0), outpoint(1, 1), outpoint(3, 0)]);
    }
}

//! Conflict graph over a batch of individually-valid transactions.
//!
//! Two transactions conflict iff they claim at least one common outpoint.
//! The graph only relates transactions within the batch — already-settled
//! state never appears here. Resolution removes the most-conflicted
//! transaction until no edges remain: the classic greedy heuristic for
//! maximum independent set. It does not promise the *largest* conflict-free
//! subset, only *a* conflict-free subset, and downstream consumers depend
//! on its specific selection behavior — do not "upgrade" it to a solver.
//!
//! Everything here runs over ordered maps and sets keyed by transaction id.
//! Elimination order must be a function of the batch contents alone; an
//! implementation that leans on hash-map iteration order produces different
//! accepted sets on different runs, which on a ledger is a defect.

use std::collections::{BTreeMap, BTreeSet};

use crate::transaction::types::{TxHash, UtxoId};

/// Symmetric conflict relation, represented as adjacency sets.
///
/// Only transactions with at least one conflict are present; a transaction
/// with no edges has no entry.
#[derive(Debug, Default)]
pub struct ConflictGraph {
    adjacency: BTreeMap<TxHash, BTreeSet<TxHash>>,
}

impl ConflictGraph {
    /// Build the conflict relation for a batch.
    ///
    /// `claims` maps each transaction id to the set of outpoints it spends.
    /// Every unordered pair with intersecting claim sets gets an edge.
    /// Quadratic in the batch size; epochs are bounded and batches small
    /// enough that this beats maintaining an outpoint index.
    pub fn build(claims: &BTreeMap<TxHash, BTreeSet<UtxoId>>) -> Self {
        let mut adjacency: BTreeMap<TxHash, BTreeSet<TxHash>> = BTreeMap::new();

        let ids: Vec<&TxHash> = claims.keys().collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                if sets_intersect(&claims[*a], &claims[*b]) {
                    adjacency.entry(**a).or_default().insert(**b);
                    adjacency.entry(**b).or_default().insert(**a);
                }
            }
        }

        Self { adjacency }
    }

    /// Returns `true` if no transaction has a remaining conflict.
    pub fn is_resolved(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Current conflict degree of a transaction (0 if absent).
    pub fn degree(&self, id: &TxHash) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    /// The transaction to eliminate next: largest current degree, ties
    /// broken by ascending id.
    ///
    /// The strict `>` comparison over an ascending key scan is what makes
    /// the tie-break "smallest id wins elimination" — keep it that way.
    pub fn most_conflicted(&self) -> Option<TxHash> {
        let mut worst: Option<(TxHash, usize)> = None;
        for (id, neighbors) in &self.adjacency {
            let degree = neighbors.len();
            match worst {
                Some((_, best)) if degree <= best => {}
                _ => worst = Some((*id, degree)),
            }
        }
        worst.map(|(id, _)| id)
    }

    /// Remove a transaction from the relation, detaching it from every
    /// neighbor. Neighbors that drop to zero conflicts leave the graph.
    pub fn remove(&mut self, id: &TxHash) {
        let Some(neighbors) = self.adjacency.remove(id) else {
            return;
        };
        for neighbor in neighbors {
            if let Some(theirs) = self.adjacency.get_mut(&neighbor) {
                theirs.remove(id);
                if theirs.is_empty() {
                    self.adjacency.remove(&neighbor);
                }
            }
        }
    }

    /// Run greedy elimination to completion and return the ids removed.
    ///
    /// Terminates: every round removes one vertex, and the vertex count is
    /// finite.
    pub fn eliminate_all(&mut self) -> BTreeSet<TxHash> {
        let mut eliminated = BTreeSet::new();
        while let Some(worst) = self.most_conflicted() {
            self.remove(&worst);
            eliminated.insert(worst);
        }
        eliminated
    }
}

/// True iff the two claim sets share at least one outpoint.
///
/// Scans the smaller set, probing the larger — the same shape as checking
/// each claim against a map, without allocating an intersection.
fn sets_intersect(a: &BTreeSet<UtxoId>, b: &BTreeSet<UtxoId>) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().any(|id| large.contains(id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

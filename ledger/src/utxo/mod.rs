//! # Unspent Output Tracking
//!
//! The ledger's entire spendable state is a single map from outpoints to
//! outputs. This module owns that map. Mutation happens in exactly one
//! place — the epoch validator's commit step — so everything else gets a
//! read-only view.

pub mod pool;

pub use pool::{PoolError, UtxoPool};

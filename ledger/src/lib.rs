// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # LUMEN Ledger — Core Library
//!
//! The settlement core of LUMEN: a UTXO ledger that takes unordered batches
//! of proposed transactions and decides, deterministically, which of them
//! get to spend what.
//!
//! Each epoch, the validator checks every candidate against the unspent
//! set (does the coin exist? does the signature authorize it? does value
//! balance?), builds a conflict graph over the survivors, greedily evicts
//! double-spenders until no two accepted transactions claim the same coin,
//! and commits the result atomically. Same batch in, same ledger out —
//! every time, on every machine. A settlement layer that resolves
//! conflicts differently depending on hash-map iteration order is not a
//! settlement layer.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual concerns of a
//! ledger core:
//!
//! - **crypto** — Ed25519 keys, hashing, and the signature-verifier seam.
//! - **transaction** — Construction, canonical bytes, ids, and signing.
//! - **utxo** — The unspent-output set and its digest.
//! - **epoch** — Validation rules, conflict resolution, atomic commit.
//! - **config** — Protocol constants. All of them. In one place.
//!
//! ## Design Philosophy
//!
//! 1. Correctness over performance (but we're still fast).
//! 2. Determinism is a consensus rule, not a nice-to-have.
//! 3. Every public API is documented. Internal shame is documented too.
//! 4. If it touches money, it has tests. Plural.

pub mod config;
pub mod crypto;
pub mod epoch;
pub mod transaction;
pub mod utxo;

pub use epoch::{EpochValidator, RejectReason};
pub use transaction::{Transaction, TransactionBuilder, TxHash, UtxoId};
pub use utxo::UtxoPool;

//! # Transaction Module
//!
//! Construction, signing, and canonical identity for LUMEN transactions.
//! A transaction consumes unspent outputs through signed inputs and
//! produces new outputs locked to recipient keys.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   — Core value types (TxHash, UtxoId, Output, Input)
//! builder.rs — Fluent TransactionBuilder and the canonical byte format
//! signing.rs — Per-input Ed25519 signing
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — Use [`TransactionBuilder`] to assemble inputs and outputs.
//! 2. **Sign** — Call [`sign_input`] per input (or [`sign_all_inputs`]).
//! 3. **Submit** — Hand the transaction to the epoch validator in a batch.
//! 4. **Settle** — Accepted transactions retire their claimed outpoints and
//!    mint one new outpoint per output, keyed by `{id, position}`.
//!
//! ## Design Decisions
//!
//! - Transaction ids are `double_sha256` of the canonical byte
//!   representation, excluding signatures, so the id is stable across
//!   signing and usable as the origin of produced outpoints.
//! - All values are `i64` lux. No floating point anywhere near monetary
//!   values; signedness keeps the non-negativity rule a runtime check
//!   against untrusted data.
//! - Each input's signature covers its own outpoint plus all outputs,
//!   letting independent owners co-sign one transaction without seeing
//!   each other's signatures.

pub mod builder;
pub mod signing;
pub mod types;

pub use builder::{Transaction, TransactionBuilder};
pub use signing::{sign_all_inputs, sign_input, SigningError};
pub use types::{Input, Output, TxHash, UtxoId};

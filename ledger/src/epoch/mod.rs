//! # Epoch Processing
//!
//! One epoch = one unordered batch of candidate transactions in, one
//! conflict-free accepted subset out, and the unspent set advanced to
//! match. The pieces:
//!
//! ```text
//! validator.rs — Per-transaction validity rules and the epoch driver
//! conflict.rs  — Conflict graph and deterministic greedy elimination
//! ```
//!
//! The epoch is atomic: the unspent set mutates only after the accepted
//! subset is fully determined, and as a single staged batch. Rejection is
//! silent by design — a malformed transaction is a normal outcome on a
//! public network, not an error the batch should fail on.

pub mod conflict;
pub mod validator;

pub use conflict::ConflictGraph;
pub use validator::{EpochValidator, RejectReason};

//! Input signing with Ed25519 keypairs.
//!
//! Signing is a separate step from building because the keypair may not be
//! available at construction time (hardware wallet, remote signer, or a
//! multi-owner transaction where each owner signs their own input). The
//! signing data is [`Transaction::signing_payload`] for the input's
//! position, which deterministically excludes every signature field.

use thiserror::Error;

use super::builder::Transaction;
use crate::crypto::keys::LumenKeypair;

/// Errors during transaction signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The requested input position does not exist on the transaction.
    #[error("input index {index} out of range: transaction has {count} inputs")]
    InputOutOfRange { index: usize, count: usize },
}

/// Signs one input in place using the provided keypair.
///
/// The signing procedure:
/// 1. Compute `signing_payload(index)` — the claimed outpoint plus every
///    output.
/// 2. Produce an Ed25519 signature over those bytes.
/// 3. Store the signature on the input.
///
/// The transaction `id` is not affected (it is derived from the same
/// canonical bytes, which exclude signatures).
///
/// The caller is responsible for using the keypair that owns the claimed
/// output — signing with the wrong key succeeds here and fails validation
/// later, exactly as a forged spend should.
pub fn sign_input(
    tx: &mut Transaction,
    index: usize,
    keypair: &LumenKeypair,
) -> Result<(), SigningError> {
    let payload = tx
        .signing_payload(index)
        .ok_or(SigningError::InputOutOfRange {
            index,
            count: tx.inputs.len(),
        })?;

    tx.inputs[index].signature = Some(keypair.sign(&payload));
    Ok(())
}

/// Signs every input with the same keypair.
///
/// Convenience for the common case of a single-owner transaction. Returns
/// the transaction for chaining.
pub fn sign_all_inputs<'a>(tx: &'a mut Transaction, keypair: &LumenKeypair) -> &'a Transaction {
    for index in 0..tx.inputs.len() {
        // Index is in range by construction.
        let _ = sign_input(tx, index, keypair);
    }
    tx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

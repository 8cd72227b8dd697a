//! # Error Types
//!
//! Defines error types used across the status-core crates.

use crate::entities::TxHash;
use thiserror::Error;

/// Errors raised at the transaction-registry boundary.
///
/// The pure derivation stages never fail; these errors belong to the
/// registry owner's write path, where the record invariants are enforced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A record with this hash already exists.
    #[error("Duplicate transaction: {0}")]
    DuplicateTransaction(TxHash),

    /// No record with this hash is tracked.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TxHash),

    /// The record already carries a receipt; the absent→present transition
    /// happens at most once and never reverts.
    #[error("Receipt already attached to transaction {0}")]
    ReceiptAlreadyAttached(TxHash),

    /// The record is missing fields classification needs.
    #[error("Malformed transaction record: {reason}")]
    MalformedRecord { reason: String },
}

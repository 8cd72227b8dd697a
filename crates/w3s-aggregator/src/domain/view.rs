//! The derived view consumed by the display layer.

use serde::{Deserialize, Serialize};
use shared_types::entities::TxHash;

/// Output of one full pipeline run over one registry snapshot.
///
/// Both lists are newest-first and restricted to the recency window.
/// Recomputing from the same snapshot and the same reference "now" yields
/// an identical view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DerivedView {
    /// Hashes of in-window transactions with no receipt yet.
    pub pending_hashes: Vec<TxHash>,
    /// Hashes of in-window transactions carrying a receipt.
    pub confirmed_hashes: Vec<TxHash>,
}

impl DerivedView {
    /// True iff at least one pending transaction is in view.
    pub fn has_pending(&self) -> bool {
        !self.pending_hashes.is_empty()
    }

    /// Number of pending transactions in view.
    pub fn pending_count(&self) -> usize {
        self.pending_hashes.len()
    }

    /// True if nothing at all is in view.
    pub fn is_empty(&self) -> bool {
        self.pending_hashes.is_empty() && self.confirmed_hashes.is_empty()
    }
}

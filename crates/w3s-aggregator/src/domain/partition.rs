//! # Status Partition
//!
//! Third pipeline stage: splits the sorted sequence into pending and
//! confirmed hash lists by a single predicate (is a receipt present).
//!
//! This is a stable partition, not a re-sort: the relative order the
//! previous stage established is preserved within each bucket. Receipt
//! presence is the sole signal; a receipt that reports on-chain failure
//! still classifies as confirmed here.

use crate::domain::view::DerivedView;
use shared_types::entities::TransactionRecord;

/// Partitions the sorted records into the derived view.
pub fn partition_by_receipt(records: &[TransactionRecord]) -> DerivedView {
    let mut pending_hashes = Vec::new();
    let mut confirmed_hashes = Vec::new();

    for record in records {
        if record.is_confirmed() {
            confirmed_hashes.push(record.hash.clone());
        } else {
            pending_hashes.push(record.hash.clone());
        }
    }

    DerivedView {
        pending_hashes,
        confirmed_hashes,
    }
}

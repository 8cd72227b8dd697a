//! # Recency Sort
//!
//! Second pipeline stage: total order by submission time, newest first.
//!
//! Ties on equal `added_time` fall back to lexicographic ascending order on
//! the hash, so the comparator is strict (transitive, consistent with
//! equality) and the output is identical across repeated invocations on
//! unchanged input.

use shared_types::entities::TransactionRecord;
use std::cmp::Ordering;

/// Comparator placing newer submissions first.
pub fn newest_first(a: &TransactionRecord, b: &TransactionRecord) -> Ordering {
    b.added_time
        .cmp(&a.added_time)
        // Deterministic tie-breaker for equal submission times
        .then_with(|| a.hash.cmp(&b.hash))
}

/// Sorts the filtered records newest-first.
pub fn sort_newest_first(mut records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    records.sort_by(newest_first);
    records
}

//! # Recency Filter
//!
//! First pipeline stage: selects the records inside the rolling display
//! window. The window is relative to wall-clock time, not a fixed epoch, so
//! callers must re-evaluate against a fresh `now` on every recomputation:
//! a record can silently age out between two renders with no registry
//! mutation at all.

use shared_types::entities::{Timestamp, TransactionRecord};
use tracing::debug;

/// The 24-hour rolling display window, in milliseconds.
pub const RECENCY_WINDOW_MS: u64 = 86_400_000;

/// Returns true if the record falls inside the window ending at `now`.
///
/// The boundary is exclusive: a record aged exactly `window_ms` is out.
/// Elapsed time uses saturating subtraction, so a record timestamped ahead
/// of `now` (clock skew) clamps to zero elapsed and stays in view.
pub fn is_recent(record: &TransactionRecord, now: Timestamp, window_ms: u64) -> bool {
    now.saturating_sub(record.added_time) < window_ms
}

/// Selects the well-formed records within the window ending at `now`.
///
/// Malformed records (empty hash) are excluded here rather than faulted on:
/// one bad record must never prevent the others from being classified.
/// No ordering guarantee from this stage alone.
pub fn filter_recent(
    records: impl IntoIterator<Item = TransactionRecord>,
    now: Timestamp,
    window_ms: u64,
) -> Vec<TransactionRecord> {
    records
        .into_iter()
        .filter(|record| {
            if !record.is_well_formed() {
                debug!(added_time = record.added_time, "Skipping malformed record");
                return false;
            }
            is_recent(record, now, window_ms)
        })
        .collect()
}

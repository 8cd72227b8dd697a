//! # Inbound Port - StatusAggregatorApi
//!
//! Primary driving port exposing the derived view and display selection.
//! The runtime's recompute loop and the display layer consume this API;
//! nothing behind it ever blocks, suspends, or fails.

use crate::domain::{DerivedView, StatusSnapshot};
use shared_types::entities::Timestamp;

/// Primary API for the status aggregator.
///
/// Every method takes a fresh registry snapshot internally, derives, and
/// discards it; results are safe to recompute redundantly, and a superseded
/// result is simply dropped in favor of the latest one (last-write-wins at
/// the render boundary).
pub trait StatusAggregatorApi: Send + Sync {
    /// Derives the view against the injected clock's current time.
    fn derived_view(&self) -> DerivedView;

    /// Derives the view against an explicit reference "now".
    ///
    /// Exposed separately so callers (and tests) can pin the reference
    /// time; the rolling window is relative to it.
    fn derived_view_at(&self, now: Timestamp) -> DerivedView;

    /// Derives the view and selects the display state in one pass.
    fn status(&self) -> StatusSnapshot;

    /// True iff at least one pending transaction is currently in view.
    fn has_pending(&self) -> bool;
}

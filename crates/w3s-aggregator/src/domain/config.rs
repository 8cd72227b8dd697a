//! Aggregator configuration.

use crate::domain::recency::RECENCY_WINDOW_MS;

/// Tuning knobs for the derivation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Rolling window within which a transaction is eligible for display,
    /// in milliseconds. Records at or beyond this age are excluded.
    pub recency_window_ms: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            recency_window_ms: RECENCY_WINDOW_MS,
        }
    }
}

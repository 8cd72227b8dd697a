//! # Status Aggregation Service
//!
//! Application service implementing the `StatusAggregatorApi` inbound port.
//!
//! Takes an immutable registry snapshot, runs the three pure stages against
//! one reference "now", selects the display state, and discards the
//! snapshot. No reference is held across a suspension point, so no locking
//! is needed beyond what the adapters do internally.

use crate::domain::{
    filter_recent, partition_by_receipt, sort_newest_first, AggregatorConfig, DerivedView,
    DisplayState, StatusSnapshot,
};
use crate::ports::inbound::StatusAggregatorApi;
use crate::ports::outbound::{BadgeProvider, TimeSource, TransactionRegistry, WalletProvider};
use shared_types::entities::{Timestamp, TransactionRecord, TxHash};
use std::collections::HashMap;
use std::sync::Arc;

/// The Transaction Status Aggregator.
///
/// All collaborators are injected; nothing here is a singleton, which keeps
/// each derivation stage independently testable against plain data.
pub struct StatusAggregator {
    registry: Arc<dyn TransactionRegistry>,
    wallet: Arc<dyn WalletProvider>,
    clock: Arc<dyn TimeSource>,
    badge: Arc<dyn BadgeProvider>,
    config: AggregatorConfig,
}

impl StatusAggregator {
    /// Creates an aggregator with the default config and no badge source.
    pub fn new(
        registry: Arc<dyn TransactionRegistry>,
        wallet: Arc<dyn WalletProvider>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            registry,
            wallet,
            clock,
            badge: Arc::new(crate::adapters::NoBadge),
            config: AggregatorConfig::default(),
        }
    }

    /// Replaces the badge source.
    #[must_use]
    pub fn with_badge(mut self, badge: Arc<dyn BadgeProvider>) -> Self {
        self.badge = badge;
        self
    }

    /// Replaces the config.
    #[must_use]
    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// The full pipeline over one snapshot: filter, sort, partition.
    ///
    /// Pure and idempotent: the same `(snapshot, now, window)` input always
    /// yields the same view.
    pub fn derive(
        snapshot: HashMap<TxHash, TransactionRecord>,
        now: Timestamp,
        window_ms: u64,
    ) -> DerivedView {
        let recent = filter_recent(snapshot.into_values(), now, window_ms);
        let sorted = sort_newest_first(recent);
        partition_by_receipt(&sorted)
    }
}

impl StatusAggregatorApi for StatusAggregator {
    fn derived_view(&self) -> DerivedView {
        self.derived_view_at(self.clock.now_ms())
    }

    fn derived_view_at(&self, now: Timestamp) -> DerivedView {
        Self::derive(self.registry.snapshot(), now, self.config.recency_window_ms)
    }

    fn status(&self) -> StatusSnapshot {
        let view = self.derived_view();
        let state = DisplayState::derive(
            self.wallet.current_address(),
            &view,
            self.badge.has_badge(),
        );
        StatusSnapshot { view, state }
    }

    fn has_pending(&self) -> bool {
        self.derived_view().has_pending()
    }
}

//! # Recompute Loop
//!
//! The event-driven heart of the runtime: one task, two wake sources
//! (bus events and the refresh tick), one output (the watch channel).

use crate::config::RuntimeConfig;
use shared_bus::{EventFilter, EventPublisher, EventTopic, InMemoryEventBus, WalletEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, trace};
use w3s_aggregator::domain::StatusSnapshot;
use w3s_aggregator::ports::{ConnectModal, StatusAggregatorApi, TimeSource};

/// Drives recomputation and publishes the latest snapshot.
pub struct StatusRuntime {
    aggregator: Arc<dyn StatusAggregatorApi>,
    bus: Arc<InMemoryEventBus>,
    modal: Arc<dyn ConnectModal>,
    clock: Arc<dyn TimeSource>,
    config: RuntimeConfig,
    snapshot_tx: watch::Sender<StatusSnapshot>,
}

impl StatusRuntime {
    /// Creates a runtime around an aggregator and its bus.
    ///
    /// The watch channel starts at the default (disconnected, empty)
    /// snapshot; the first recompute replaces it.
    pub fn new(
        aggregator: Arc<dyn StatusAggregatorApi>,
        bus: Arc<InMemoryEventBus>,
        modal: Arc<dyn ConnectModal>,
        clock: Arc<dyn TimeSource>,
        config: RuntimeConfig,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(StatusSnapshot::default());
        Self {
            aggregator,
            bus,
            modal,
            clock,
            config,
            snapshot_tx,
        }
    }

    /// Handle for the display surface: always holds the latest snapshot.
    pub fn watch(&self) -> watch::Receiver<StatusSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Recomputes once and publishes the result.
    ///
    /// Entering `Disconnected` from a connected state fires the
    /// connect-modal trigger; the modal's flow itself is external and
    /// opaque to this core.
    pub fn recompute(&self) -> StatusSnapshot {
        let snapshot = self.aggregator.status();

        let lost_connection = {
            let previous = self.snapshot_tx.borrow();
            previous.state.is_connected() && !snapshot.state.is_connected()
        };
        if lost_connection {
            debug!("Wallet disconnected, requesting connect modal");
            self.modal.open();
        }

        trace!(
            pending = snapshot.view.pending_count(),
            confirmed = snapshot.view.confirmed_hashes.len(),
            "Snapshot recomputed"
        );
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Runs the recompute loop until the bus closes.
    ///
    /// Wakes on registry and wallet events and on the coarse refresh tick.
    /// The tick is also announced on the bus so other observers see the
    /// same cadence the runtime acts on.
    pub async fn run(self) {
        let mut events = self.bus.subscribe(EventFilter::topics(vec![
            EventTopic::Transactions,
            EventTopic::Wallet,
        ]));

        let mut ticker = interval(Duration::from_millis(self.config.refresh_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            refresh_interval_ms = self.config.refresh_interval_ms,
            "Status runtime started"
        );
        // Prime the channel before the first wake
        self.recompute();

        loop {
            tokio::select! {
                maybe_event = events.recv() => {
                    match maybe_event {
                        Some(event) => {
                            trace!(topic = ?event.topic(), "Change notification");
                            self.recompute();
                        }
                        // Bus dropped: no more change sources
                        None => break,
                    }
                }
                _ = ticker.tick() => {
                    let now = self.clock.now_ms();
                    self.bus.publish(WalletEvent::RefreshTick { now }).await;
                    self.recompute();
                }
            }
        }

        info!("Status runtime stopped");
    }

    /// Spawns the loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

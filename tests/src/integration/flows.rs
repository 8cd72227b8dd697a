//! # Integration Test Flows
//!
//! Tests that the registry, wallet session, aggregator, and runtime work
//! together correctly via the shared bus.
//!
//! ## Flows Tested:
//!
//! 1. **Registry → Runtime**: submissions and receipts reach the display
//!    surface as recomputed snapshots
//! 2. **Wallet → Runtime**: connect/disconnect drives the display state
//!    machine, including the connect-modal trigger on disconnect
//! 3. **Timer → Runtime**: records age out of view with no registry
//!    mutation at all

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    // Shared infrastructure
    use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, WalletEvent};
    use shared_types::entities::{TransactionReceipt, TxHash, WalletAddress};

    // Aggregator core
    use w3s_aggregator::adapters::{
        InMemoryTransactionRegistry, ManualTimeSource, SessionWalletProvider,
    };
    use w3s_aggregator::domain::{DisplayState, RECENCY_WINDOW_MS};
    use w3s_aggregator::ports::{ConnectModal, StatusAggregatorApi};
    use w3s_aggregator::StatusAggregator;

    // Runtime
    use w3s_runtime::{render, RuntimeConfig, StatusRuntime};

    const NOW: u64 = 1_700_000_000_000;
    const ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Connect-modal double that counts trigger invocations.
    #[derive(Default)]
    struct RecordingModal {
        opened: AtomicUsize,
    }

    impl ConnectModal for RecordingModal {
        fn open(&self) {
            self.opened.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Harness {
        bus: Arc<InMemoryEventBus>,
        registry: Arc<InMemoryTransactionRegistry>,
        wallet: Arc<SessionWalletProvider>,
        clock: Arc<ManualTimeSource>,
        modal: Arc<RecordingModal>,
        runtime: StatusRuntime,
    }

    fn harness() -> Harness {
        let bus = Arc::new(InMemoryEventBus::new());
        let registry = Arc::new(InMemoryTransactionRegistry::with_bus(bus.clone()));
        let wallet = Arc::new(SessionWalletProvider::with_bus(bus.clone()));
        let clock = Arc::new(ManualTimeSource::new(NOW));
        let modal = Arc::new(RecordingModal::default());
        let aggregator = Arc::new(StatusAggregator::new(
            registry.clone(),
            wallet.clone(),
            clock.clone(),
        ));
        let runtime = StatusRuntime::new(
            aggregator,
            bus.clone(),
            modal.clone(),
            clock.clone(),
            RuntimeConfig::default(),
        );
        Harness {
            bus,
            registry,
            wallet,
            clock,
            modal,
            runtime,
        }
    }

    /// Waits until the watch channel satisfies `predicate`.
    async fn wait_for(
        rx: &mut tokio::sync::watch::Receiver<w3s_aggregator::domain::StatusSnapshot>,
        predicate: impl Fn(&w3s_aggregator::domain::StatusSnapshot) -> bool,
    ) {
        loop {
            if predicate(&rx.borrow()) {
                return;
            }
            rx.changed().await.expect("runtime alive");
        }
    }

    // =========================================================================
    // FLOW 1: REGISTRY → RUNTIME
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_submission_reaches_display_as_pending_counter() {
        let h = harness();
        let mut rx = h.runtime.watch();
        let handle = h.runtime.spawn();

        h.wallet.connect(WalletAddress::from(ADDR)).await;
        h.registry
            .submit(TxHash::from("0xt1"), NOW - 1_000)
            .await
            .expect("submit");
        h.registry
            .submit(TxHash::from("0xt2"), NOW - 500)
            .await
            .expect("submit");

        wait_for(&mut rx, |s| {
            s.state == DisplayState::ConnectedPending { pending_count: 2 }
        })
        .await;

        // Newest-first within the pending bucket
        let view = rx.borrow().view.clone();
        assert_eq!(
            view.pending_hashes,
            vec![TxHash::from("0xt2"), TxHash::from("0xt1")]
        );
        assert_eq!(render::status_label(&rx.borrow().state), "2 Pending");

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_receipt_flips_display_to_idle() {
        let h = harness();
        let mut rx = h.runtime.watch();
        let handle = h.runtime.spawn();

        h.wallet.connect(WalletAddress::from(ADDR)).await;
        let hash = TxHash::from("0xt1");
        h.registry
            .submit(hash.clone(), NOW - 1_000)
            .await
            .expect("submit");

        wait_for(&mut rx, |s| s.view.has_pending()).await;

        h.registry
            .attach_receipt(&hash, TransactionReceipt::success(42))
            .await
            .expect("receipt");

        wait_for(&mut rx, |s| {
            matches!(s.state, DisplayState::ConnectedIdle { .. })
        })
        .await;

        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.view.confirmed_hashes, vec![hash]);
        assert_eq!(render::status_label(&snapshot.state), "0x71C7...976F");

        handle.abort();
    }

    // =========================================================================
    // FLOW 2: WALLET → RUNTIME
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_connect_then_disconnect_round_trip() {
        let h = harness();
        let mut rx = h.runtime.watch();
        let handle = h.runtime.spawn();

        h.wallet.connect(WalletAddress::from(ADDR)).await;
        wait_for(&mut rx, |s| s.state.is_connected()).await;

        h.wallet.disconnect().await;
        wait_for(&mut rx, |s| s.state == DisplayState::Disconnected).await;

        // Losing the connection fires the connect-modal trigger exactly once
        assert_eq!(h.modal.opened.load(Ordering::SeqCst), 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_disconnected_does_not_fire_modal() {
        let h = harness();
        let handle = h.runtime.spawn();

        // Give the loop a moment to prime and tick
        tokio::time::sleep(Duration::from_secs(60)).await;

        // Never-connected is not a transition into Disconnected
        assert_eq!(h.modal.opened.load(Ordering::SeqCst), 0);

        handle.abort();
    }

    // =========================================================================
    // FLOW 3: TIMER → RUNTIME
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_pending_transaction_ages_out_on_tick_alone() {
        let h = harness();
        let mut rx = h.runtime.watch();

        h.wallet.connect(WalletAddress::from(ADDR)).await;
        h.registry
            .submit(TxHash::from("0xt1"), NOW - RECENCY_WINDOW_MS + 60_000)
            .await
            .expect("submit");

        let handle = h.runtime.spawn();
        wait_for(&mut rx, |s| s.view.has_pending()).await;

        // Advance the wall clock past the record's window edge. No registry
        // mutation follows; only the refresh tick can notice.
        h.clock.advance(120_000);
        wait_for(&mut rx, |s| {
            matches!(s.state, DisplayState::ConnectedIdle { .. })
        })
        .await;

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_tick_observable_on_bus() {
        let h = harness();
        let mut sub = h
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Refresh]));
        let handle = h.runtime.spawn();

        let event = timeout(Duration::from_secs(120), sub.recv())
            .await
            .expect("timeout")
            .expect("event");
        assert!(matches!(event, WalletEvent::RefreshTick { .. }));

        handle.abort();
    }
}

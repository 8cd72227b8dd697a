//! # Web3-Status Runtime
//!
//! Standalone entry point that wires the full status core together and
//! logs every display-state change until interrupted.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults plus `W3S_*` environment overrides)
//! 2. Validate it
//! 3. Initialize structured logging
//! 4. Wire bus, registry, wallet session, clock, and aggregator
//! 5. Spawn the recompute loop and watch for snapshot changes

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use shared_bus::InMemoryEventBus;
use w3s_aggregator::adapters::{
    InMemoryTransactionRegistry, LogConnectModal, SessionWalletProvider, SystemTimeSource,
};
use w3s_aggregator::StatusAggregator;
use w3s_runtime::{init_tracing, render, RuntimeConfig, StatusRuntime};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    config.validate().context("Invalid runtime configuration")?;

    init_tracing(&config.log_filter);

    info!("===========================================");
    info!("  Web3-Status Runtime v0.1.0");
    info!("===========================================");
    info!(
        refresh_interval_ms = config.refresh_interval_ms,
        recency_window_ms = config.aggregator.recency_window_ms,
        "Configuration loaded"
    );

    let bus = Arc::new(InMemoryEventBus::new());
    let registry = Arc::new(InMemoryTransactionRegistry::with_bus(bus.clone()));
    let wallet = Arc::new(SessionWalletProvider::with_bus(bus.clone()));
    let clock = Arc::new(SystemTimeSource);

    let aggregator = Arc::new(
        StatusAggregator::new(registry, wallet, clock.clone())
            .with_config(config.aggregator),
    );

    let runtime = StatusRuntime::new(
        aggregator,
        bus,
        Arc::new(LogConnectModal),
        clock,
        config,
    );

    let mut snapshots = runtime.watch();
    let handle = runtime.spawn();

    let observer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow().clone();
            info!(
                label = %render::status_label(&snapshot.state),
                busy = render::is_busy(&snapshot.state),
                pending = snapshot.view.pending_count(),
                "Display updated"
            );
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received");

    handle.abort();
    observer.abort();
    Ok(())
}

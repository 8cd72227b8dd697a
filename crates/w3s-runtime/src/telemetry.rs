//! Structured logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured default filter
//! applies. Repeated initialization (tests, embedders) is a no-op.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

//! # Status Runtime
//!
//! Drives the Transaction Status Aggregator from its two change sources:
//!
//! 1. **Bus events**: registry mutations and wallet session changes
//! 2. **A coarse interval timer**: the recency window is wall-clock
//!    relative, so records must age out of view even when nothing mutates
//!
//! Each trigger recomputes the full status snapshot and publishes it
//! through a `tokio::sync::watch` channel: the display surface only ever
//! observes the latest value, so a superseded recomputation is discarded
//! automatically (last-write-wins at the render boundary).
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration with environment overrides
//! - `telemetry` - Structured logging setup
//! - `runtime` - The recompute loop and watch channel
//! - `render` - Display-layer helpers (labels, shortened address, marker)

pub mod config;
pub mod render;
pub mod runtime;
pub mod telemetry;

pub use config::{ConfigError, RuntimeConfig};
pub use runtime::StatusRuntime;
pub use telemetry::init_tracing;

//! # Shared Bus - Event Bus for the Status Core
//!
//! Carries the change notifications the status aggregator recomputes from:
//! registry mutations (a transaction was submitted, a receipt arrived),
//! wallet session changes (connected, disconnected), and the coarse
//! refresh tick that lets records age out of the recency window.
//!
//! ## Pattern
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Registry   │                    │   Runtime    │
//! │   / Wallet   │    publish()       │  recompute   │
//! │              │ ──────┐            │    loop      │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Producers never call consumers directly; every notification crosses the
//! bus, so the recompute loop stays the single reader of all change sources.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventSource, EventTopic, WalletEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

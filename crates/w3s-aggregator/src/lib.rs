//! # Transaction Status Aggregator
//!
//! Derives the wallet-status display view from an unordered registry of
//! locally tracked transactions, under a continuously advancing clock and a
//! continuously mutating transaction set.
//!
//! ## Derivation Pipeline
//!
//! Three pure stages, recomputed in full on every snapshot:
//!
//! ```text
//! Registry snapshot ──→ [Recency Filter] ──→ [Recency Sort] ──→ [Status Partition]
//!                        24h rolling          newest-first        pending vs
//!                        window               (hash tie-break)    confirmed
//! ```
//!
//! The output is a [`DerivedView`] (ordered pending/confirmed hash lists)
//! plus a [`DisplayState`] computed from two external facts only: is an
//! address present, and is the pending list non-empty. Neither holds any
//! independent memory, so the display can never desynchronize from its
//! inputs.
//!
//! ## Domain Invariants
//!
//! - A record appears in the view iff `now - added_time < 86_400_000` ms;
//!   the boundary value itself is excluded.
//! - Output order is `added_time` descending, ties broken by lexicographic
//!   hash order, within each bucket.
//! - The partition is stable: it never reorders what the sort produced.
//! - Malformed records (empty hash) are skipped, never propagated as faults.
//! - A reference "now" earlier than `added_time` clamps to zero elapsed.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): the pure stages, no I/O dependencies
//! - **Ports Layer** (`ports/`): inbound API trait, outbound collaborator traits
//! - **Adapters Layer** (`adapters/`): in-memory registry, wallet session,
//!   system clock
//! - **Service** (`service.rs`): snapshot → pipeline → status orchestration

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export main types for convenience
pub use domain::{
    filter_recent, newest_first, partition_by_receipt, sort_newest_first, AggregatorConfig,
    DerivedView, DisplayState, StatusSnapshot, RECENCY_WINDOW_MS,
};

pub use ports::{
    BadgeProvider, ConnectModal, StatusAggregatorApi, TimeSource, TransactionRegistry,
    WalletProvider,
};

pub use adapters::{
    InMemoryTransactionRegistry, LogConnectModal, ManualTimeSource, NoBadge,
    SessionWalletProvider, StaticBadge, SystemTimeSource,
};

pub use service::StatusAggregator;

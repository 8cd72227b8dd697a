//! # Wallet Events
//!
//! Defines all event types that flow through the shared bus. Each event is
//! a change notification that invalidates the previously derived view.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Timestamp, TransactionReceipt, TxHash, WalletSession};

/// All events that can be published to the event bus.
///
/// The recompute loop treats every variant the same way (take a fresh
/// snapshot, re-derive), so variants carry only what subscribers may want
/// to log or assert on, never state the aggregator depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WalletEvent {
    // =========================================================================
    // REGISTRY: TRANSACTION LIFECYCLE
    // =========================================================================
    /// A transaction was submitted and is now tracked locally.
    TransactionSubmitted {
        /// Hash assigned at submission time.
        hash: TxHash,
        /// Local submission time in milliseconds since epoch.
        added_time: Timestamp,
    },

    /// A tracked transaction received its on-chain receipt.
    ReceiptArrived {
        /// Hash of the now-confirmed transaction.
        hash: TxHash,
        /// The attached confirmation payload.
        receipt: TransactionReceipt,
    },

    // =========================================================================
    // WALLET PROVIDER: SESSION CHANGES
    // =========================================================================
    /// The wallet provider yielded an address (connect completed).
    WalletConnected {
        /// The new session, account present.
        session: WalletSession,
    },

    /// The wallet provider dropped its address (disconnect).
    WalletDisconnected,

    // =========================================================================
    // RUNTIME: WALL-CLOCK REFRESH
    // =========================================================================
    /// Coarse periodic tick. The recency window is wall-clock-relative, so
    /// records must be able to age out of view with no registry mutation.
    RefreshTick {
        /// Reference "now" the tick was emitted at.
        now: Timestamp,
    },
}

impl WalletEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::TransactionSubmitted { .. } | Self::ReceiptArrived { .. } => {
                EventTopic::Transactions
            }
            Self::WalletConnected { .. } | Self::WalletDisconnected => EventTopic::Wallet,
            Self::RefreshTick { .. } => EventTopic::Refresh,
        }
    }

    /// Get the originating component.
    #[must_use]
    pub fn source(&self) -> EventSource {
        match self {
            Self::TransactionSubmitted { .. } | Self::ReceiptArrived { .. } => {
                EventSource::Registry
            }
            Self::WalletConnected { .. } | Self::WalletDisconnected => EventSource::Wallet,
            Self::RefreshTick { .. } => EventSource::Runtime,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Registry mutations: submissions and receipts.
    Transactions,
    /// Wallet session changes.
    Wallet,
    /// Periodic wall-clock refresh.
    Refresh,
    /// All events (no filtering).
    All,
}

/// Originating component of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSource {
    /// The transaction registry owner.
    Registry,
    /// The wallet provider adapter.
    Wallet,
    /// The status runtime (timer).
    Runtime,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Sources to include. Empty means all sources.
    pub sources: Vec<EventSource>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            sources: Vec::new(),
        }
    }

    /// Create a filter for events from specific sources.
    #[must_use]
    pub fn from_sources(sources: Vec<EventSource>) -> Self {
        Self {
            topics: Vec::new(),
            sources,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &WalletEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.sources.is_empty() || self.sources.contains(&event.source());

        topic_match && source_match
    }
}

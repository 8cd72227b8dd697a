//! # Outbound Ports
//!
//! Driven traits for the external collaborators. The aggregator owns these
//! as injected `Arc<dyn ...>` handles, never as globals, so each pipeline
//! stage stays independently testable.

use shared_types::entities::{
    Timestamp, TransactionRecord, TxHash, WalletAddress, WalletSession,
};
use std::collections::HashMap;

/// Read-only access to the process-wide transaction registry.
///
/// The core only ever reads snapshots; population (submissions) and
/// mutation (receipts) are the registry owner's responsibility. The core
/// must tolerate the mapping changing between snapshots: new records
/// appearing, existing records gaining a receipt.
pub trait TransactionRegistry: Send + Sync {
    /// An immutable read of the registry at one instant.
    fn snapshot(&self) -> HashMap<TxHash, TransactionRecord>;
}

/// The external wallet-connection library, reduced to the one signal the
/// core reads: address presence.
pub trait WalletProvider: Send + Sync {
    /// The connected account, if any.
    fn current_address(&self) -> Option<WalletAddress>;

    /// The full session (account plus chain id).
    fn session(&self) -> WalletSession;
}

/// Source of the reference "now" for the recency window.
///
/// Injected rather than read ambiently so tests can pin or advance time.
pub trait TimeSource: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> Timestamp;
}

/// Fire-and-forget trigger for the external connect-modal UI.
///
/// Invoked from the `Disconnected` state; the core never inspects the
/// modal's internal flow, only whether the wallet provider eventually
/// yields an address.
pub trait ConnectModal: Send + Sync {
    /// Ask the external UI to open its connect flow.
    fn open(&self);
}

/// Optional vanity badge shown next to the address in the idle state.
pub trait BadgeProvider: Send + Sync {
    /// Whether the connected account earns the badge.
    fn has_badge(&self) -> bool;
}

//! Wallet session adapter.
//!
//! Holds the current session handed back by the external wallet-connection
//! library and announces connect/disconnect transitions on the shared bus.

use crate::ports::outbound::{ConnectModal, WalletProvider};
use shared_bus::{EventPublisher, InMemoryEventBus, WalletEvent};
use shared_types::entities::{WalletAddress, WalletSession};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// In-process holder of the wallet-provider session.
///
/// The external connect flow lands its result here; the aggregator reads
/// it through the `WalletProvider` port and treats address presence as the
/// sole connection signal.
pub struct SessionWalletProvider {
    /// Current session.
    session: RwLock<WalletSession>,

    /// Bus to announce session changes on, when wired.
    bus: Option<Arc<InMemoryEventBus>>,
}

impl SessionWalletProvider {
    /// Creates a disconnected provider with no bus attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: RwLock::new(WalletSession::disconnected()),
            bus: None,
        }
    }

    /// Creates a disconnected provider that announces changes on `bus`.
    #[must_use]
    pub fn with_bus(bus: Arc<InMemoryEventBus>) -> Self {
        Self {
            session: RwLock::new(WalletSession::disconnected()),
            bus: Some(bus),
        }
    }

    /// Records a completed connect: the external flow yielded an address.
    pub async fn connect(&self, address: WalletAddress) {
        let session = WalletSession::connected(address);
        if let Ok(mut current) = self.session.write() {
            *current = session.clone();
        }
        debug!(account = ?session.account, "Wallet connected");
        self.announce(WalletEvent::WalletConnected { session }).await;
    }

    /// Records a disconnect: the address is gone.
    pub async fn disconnect(&self) {
        if let Ok(mut current) = self.session.write() {
            *current = WalletSession::disconnected();
        }
        debug!("Wallet disconnected");
        self.announce(WalletEvent::WalletDisconnected).await;
    }

    async fn announce(&self, event: WalletEvent) {
        if let Some(bus) = &self.bus {
            bus.publish(event).await;
        }
    }
}

impl Default for SessionWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletProvider for SessionWalletProvider {
    fn current_address(&self) -> Option<WalletAddress> {
        self.session
            .read()
            .ok()
            .and_then(|session| session.account.clone())
    }

    fn session(&self) -> WalletSession {
        self.session
            .read()
            .map(|session| session.clone())
            .unwrap_or_else(|_| WalletSession::disconnected())
    }
}

/// Connect-modal stand-in that only logs the trigger.
///
/// The real modal lives in the display layer; this core only fires the
/// trigger and never inspects the modal's flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConnectModal;

impl ConnectModal for LogConnectModal {
    fn open(&self) {
        info!("Connect modal requested");
    }
}

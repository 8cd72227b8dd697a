//! # Display Selection
//!
//! The three-state machine behind the status indicator. It is purely a
//! function of two external facts (is an address present, is the pending
//! list non-empty), recomputed on every snapshot. It holds no independent
//! memory and therefore cannot desynchronize from its inputs.

use crate::domain::view::DerivedView;
use serde::{Deserialize, Serialize};
use shared_types::entities::WalletAddress;

/// What the status indicator should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// No wallet address available. The display offers the connect
    /// affordance; the connect-modal trigger is the runtime's concern.
    Disconnected,

    /// Address present and transactions pending: show the counter and a
    /// busy indicator.
    ConnectedPending {
        /// Count of in-window pending transactions.
        pending_count: usize,
    },

    /// Address present, nothing pending: show the shortened address, the
    /// identity marker, and an optional vanity badge.
    ConnectedIdle {
        /// The connected account.
        address: WalletAddress,
        /// Whether the badge provider reports a badge for this account.
        badge: bool,
    },
}

impl DisplayState {
    /// Selects the state for the given inputs.
    pub fn derive(address: Option<WalletAddress>, view: &DerivedView, badge: bool) -> Self {
        match address {
            None => Self::Disconnected,
            Some(address) => {
                if view.has_pending() {
                    Self::ConnectedPending {
                        pending_count: view.pending_count(),
                    }
                } else {
                    Self::ConnectedIdle { address, badge }
                }
            }
        }
    }

    /// True in both connected states.
    pub fn is_connected(&self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Disconnected
    }
}

/// The full outbound contract of the core: the derived view plus the
/// selected display state, computed from one registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusSnapshot {
    /// Ordered pending/confirmed hash lists.
    pub view: DerivedView,
    /// The display selection for this view.
    pub state: DisplayState,
}

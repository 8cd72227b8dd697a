//! Display-layer helpers.
//!
//! The display surface owns styling and localization; these helpers only
//! turn a `DisplayState` into the raw pieces every surface needs: the text
//! label, the busy flag, and the identity-marker seed.

use shared_types::entities::WalletAddress;
use w3s_aggregator::domain::DisplayState;

/// Label shown on the connect affordance.
pub const CONNECT_LABEL: &str = "Connect to a wallet";

/// Vanity badge glyph shown next to the address when earned.
pub const BADGE_GLYPH: &str = "\u{1F9E6}";

/// Label for a pending-transaction counter.
pub fn pending_label(count: usize) -> String {
    format!("{count} Pending")
}

/// The text for the given display state.
pub fn status_label(state: &DisplayState) -> String {
    match state {
        DisplayState::Disconnected => CONNECT_LABEL.to_owned(),
        DisplayState::ConnectedPending { pending_count } => pending_label(*pending_count),
        DisplayState::ConnectedIdle { address, badge } => {
            if *badge {
                format!("{BADGE_GLYPH} {}", address.shorten())
            } else {
                address.shorten()
            }
        }
    }
}

/// True when the display should show a busy indicator.
pub fn is_busy(state: &DisplayState) -> bool {
    matches!(state, DisplayState::ConnectedPending { .. })
}

/// Seed for the identity marker, present only in the idle state (the busy
/// state replaces the marker with the loader).
pub fn identicon_seed(state: &DisplayState) -> Option<u32> {
    match state {
        DisplayState::ConnectedIdle { address, .. } => Some(address.identicon_seed()),
        _ => None,
    }
}

/// Convenience re-export of the address shortening used by `status_label`.
pub fn shorten_address(address: &WalletAddress) -> String {
    address.shorten()
}

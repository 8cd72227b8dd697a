//! # Ports Layer
//!
//! - `inbound`: the driving API the display layer and runtime call
//! - `outbound`: the driven traits for the external collaborators
//!   (transaction registry, wallet provider, clock, connect modal, badge)

pub mod inbound;
pub mod outbound;

pub use inbound::StatusAggregatorApi;
pub use outbound::{BadgeProvider, ConnectModal, TimeSource, TransactionRegistry, WalletProvider};

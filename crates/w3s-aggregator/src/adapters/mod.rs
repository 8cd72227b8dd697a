//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports for in-process use:
//! the registry-owner side of the transaction store, the wallet session
//! holder, clock sources, and the default modal/badge stand-ins.

pub mod badge;
pub mod clock;
pub mod registry;
pub mod wallet;

pub use badge::{NoBadge, StaticBadge};
pub use clock::{ManualTimeSource, SystemTimeSource};
pub use registry::InMemoryTransactionRegistry;
pub use wallet::{LogConnectModal, SessionWalletProvider};

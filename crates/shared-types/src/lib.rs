//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the status-core
//! crates: the locally tracked transaction record, wallet identity types,
//! and the registry error taxonomy.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Immutable Record Fields**: `hash` and `added_time` never change after
//!   a record is created; `receipt` transitions at most once, absent→present.
//! - **Read-Only Core**: Downstream crates only ever read snapshots of the
//!   registry; mutation lives with the registry owner.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

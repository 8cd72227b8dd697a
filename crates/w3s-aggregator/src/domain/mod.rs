//! # Domain Layer - Status Aggregation
//!
//! Pure derivation logic over already-validated local state.
//!
//! ## Components
//!
//! - `recency`: 24-hour rolling window filter
//! - `ordering`: newest-first total order with deterministic tie-break
//! - `partition`: stable split into pending/confirmed by receipt presence
//! - `view`: the `DerivedView` consumed by the display layer
//! - `display`: the three-state display selection machine
//! - `config`: aggregator tuning knobs
//!
//! Every function here is total over its domain: no panics, no errors, a
//! defined output for every reachable input.

pub mod config;
pub mod display;
pub mod ordering;
pub mod partition;
pub mod recency;
pub mod view;

pub use config::*;
pub use display::*;
pub use ordering::*;
pub use partition::*;
pub use recency::*;
pub use view::*;

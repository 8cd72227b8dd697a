//! # Web3-Status Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/
//! │   ├── flows.rs       # Bus-driven end-to-end flows through the runtime
//! │   └── properties.rs  # Derivation-pipeline properties on random input
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p w3s-tests
//!
//! # By category
//! cargo test -p w3s-tests integration::flows::
//! cargo test -p w3s-tests integration::properties::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

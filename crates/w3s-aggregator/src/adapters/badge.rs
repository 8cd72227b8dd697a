//! Badge adapters for the `BadgeProvider` port.
//!
//! The badge is a cosmetic marker (a token-holding vanity flag in the
//! reference deployment); a real implementation would check a balance
//! behind this port.

use crate::ports::outbound::BadgeProvider;

/// Default adapter: nobody gets a badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBadge;

impl BadgeProvider for NoBadge {
    fn has_badge(&self) -> bool {
        false
    }
}

/// Fixed-answer adapter for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct StaticBadge(pub bool);

impl BadgeProvider for StaticBadge {
    fn has_badge(&self) -> bool {
        self.0
    }
}

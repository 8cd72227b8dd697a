//! # Core Domain Entities
//!
//! Defines the entities the status core derives its view from.
//!
//! ## Clusters
//!
//! - **Transactions**: `TxHash`, `TransactionReceipt`, `TransactionRecord`
//! - **Wallet Identity**: `WalletAddress`, `WalletSession`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Chain ID used when no session override is supplied.
pub const DEFAULT_CHAIN_ID: u64 = 586;

/// Length of a `0x`-prefixed, 20-byte hex address string.
const ADDRESS_STR_LEN: usize = 42;

// =============================================================================
// CLUSTER A: TRANSACTIONS
// =============================================================================

/// A transaction hash, assigned at submission time and immutable thereafter.
///
/// Stored as the `0x`-prefixed hex string the wallet provider hands back on
/// submission. Ordering is lexicographic, which gives downstream sorts a
/// deterministic tie-break.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    /// Creates a hash from its string form.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the hash is the empty string.
    ///
    /// An empty hash is the one malformed shape the typed model can still
    /// represent; consumers exclude such records rather than fault.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// On-chain outcome reported by a receipt.
///
/// The status partition classifies on receipt *presence* only; this field
/// exists so a finer `{Pending, Confirmed, Failed}` split can be layered on
/// later without overloading the receipt field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    /// Transaction executed successfully.
    Success,
    /// Transaction was mined but reverted on-chain.
    Reverted,
}

/// The confirmation payload attached once a transaction is mined.
///
/// Presence of this payload is the sole confirmation signal in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Block the transaction was included in.
    pub block_number: u64,
    /// On-chain execution outcome.
    pub status: ReceiptStatus,
}

impl TransactionReceipt {
    /// A successful receipt at the given block.
    pub fn success(block_number: u64) -> Self {
        Self {
            block_number,
            status: ReceiptStatus::Success,
        }
    }

    /// A reverted receipt at the given block.
    pub fn reverted(block_number: u64) -> Self {
        Self {
            block_number,
            status: ReceiptStatus::Reverted,
        }
    }
}

/// One locally tracked, submitted transaction.
///
/// INVARIANTS:
/// - `hash` is unique across the registry and never changes.
/// - `added_time` never changes after creation.
/// - `receipt` transitions absent→present at most once and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier, assigned at submission time.
    pub hash: TxHash,
    /// Local submission time in milliseconds since epoch.
    pub added_time: Timestamp,
    /// Confirmation payload; `None` while pending.
    pub receipt: Option<TransactionReceipt>,
}

impl TransactionRecord {
    /// Creates a pending record (no receipt yet).
    pub fn new(hash: TxHash, added_time: Timestamp) -> Self {
        Self {
            hash,
            added_time,
            receipt: None,
        }
    }

    /// Returns true while no receipt is attached.
    pub fn is_pending(&self) -> bool {
        self.receipt.is_none()
    }

    /// Returns true once a receipt is attached.
    pub fn is_confirmed(&self) -> bool {
        self.receipt.is_some()
    }

    /// Returns true if the record carries the fields classification needs.
    pub fn is_well_formed(&self) -> bool {
        !self.hash.is_empty()
    }
}

// =============================================================================
// CLUSTER B: WALLET IDENTITY
// =============================================================================

/// A wallet account address in `0x`-prefixed hex string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Creates an address from its string form.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortens the address for display: `0x1234...cdef`.
    ///
    /// Keeps the `0x` prefix plus `chars` leading and `chars` trailing hex
    /// digits. Addresses too short to elide are returned unchanged.
    pub fn shorten_to(&self, chars: usize) -> String {
        let s = &self.0;
        if s.len() < ADDRESS_STR_LEN || chars + 2 + chars >= s.len() {
            return s.clone();
        }
        // Checked slicing: a non-hex address could put the cut points off a
        // char boundary, and display helpers must never panic.
        match (s.get(..chars + 2), s.get(s.len() - chars..)) {
            (Some(head), Some(tail)) => format!("{head}...{tail}"),
            _ => s.clone(),
        }
    }

    /// Shortens with the conventional four visible digits per side.
    pub fn shorten(&self) -> String {
        self.shorten_to(4)
    }

    /// Seed for the identity marker, derived from the first eight hex
    /// digits after the `0x` prefix. Falls back to zero for addresses that
    /// do not parse; the marker is cosmetic and must never fault.
    pub fn identicon_seed(&self) -> u32 {
        self.0
            .get(2..10)
            .and_then(|digits| u32::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Snapshot of the wallet-provider session.
///
/// Address presence is the sole connection signal the core reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    /// Connected account, if any.
    pub account: Option<WalletAddress>,
    /// Chain the session targets.
    pub chain_id: u64,
}

impl WalletSession {
    /// A disconnected session on the default chain.
    pub fn disconnected() -> Self {
        Self {
            account: None,
            chain_id: DEFAULT_CHAIN_ID,
        }
    }

    /// A connected session on the default chain.
    pub fn connected(account: WalletAddress) -> Self {
        Self {
            account: Some(account),
            chain_id: DEFAULT_CHAIN_ID,
        }
    }

    /// Returns true if an account is present.
    pub fn is_active(&self) -> bool {
        self.account.is_some()
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::disconnected()
    }
}

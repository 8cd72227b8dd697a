//! In-memory transaction registry.
//!
//! This is the registry-owner side: submissions and receipt arrivals go
//! through here, the record invariants are enforced here, and each accepted
//! mutation is announced on the shared bus. The aggregator itself only ever
//! sees this through the read-only `TransactionRegistry` port.

use crate::ports::outbound::TransactionRegistry;
use shared_bus::{EventPublisher, InMemoryEventBus, WalletEvent};
use shared_types::entities::{Timestamp, TransactionReceipt, TransactionRecord, TxHash};
use shared_types::errors::RegistryError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Process-wide transaction store backed by a `HashMap` under an `RwLock`.
///
/// Records are never removed here: eviction, if any, is a future registry
/// owner's concern and the derivation pipeline already ages records out of
/// view via the recency window.
pub struct InMemoryTransactionRegistry {
    /// All tracked records indexed by hash.
    records: RwLock<HashMap<TxHash, TransactionRecord>>,

    /// Bus to announce mutations on, when wired.
    bus: Option<Arc<InMemoryEventBus>>,
}

impl InMemoryTransactionRegistry {
    /// Creates an empty registry with no bus attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            bus: None,
        }
    }

    /// Creates an empty registry that announces mutations on `bus`.
    #[must_use]
    pub fn with_bus(bus: Arc<InMemoryEventBus>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            bus: Some(bus),
        }
    }

    /// Tracks a newly submitted transaction.
    ///
    /// # Errors
    /// - `MalformedRecord` if the hash is empty
    /// - `DuplicateTransaction` if the hash is already tracked
    pub async fn submit(
        &self,
        hash: TxHash,
        added_time: Timestamp,
    ) -> Result<(), RegistryError> {
        if hash.is_empty() {
            return Err(RegistryError::MalformedRecord {
                reason: "empty hash".to_owned(),
            });
        }

        {
            let Ok(mut records) = self.records.write() else {
                return Err(RegistryError::MalformedRecord {
                    reason: "registry lock poisoned".to_owned(),
                });
            };
            if records.contains_key(&hash) {
                return Err(RegistryError::DuplicateTransaction(hash));
            }
            records.insert(
                hash.clone(),
                TransactionRecord::new(hash.clone(), added_time),
            );
        }

        debug!(hash = %hash, added_time, "Transaction tracked");
        self.announce(WalletEvent::TransactionSubmitted { hash, added_time })
            .await;
        Ok(())
    }

    /// Attaches the on-chain receipt to a tracked transaction.
    ///
    /// The absent→present transition happens at most once: a second receipt
    /// for the same hash is rejected, keeping the record monotonic.
    ///
    /// # Errors
    /// - `TransactionNotFound` if the hash is not tracked
    /// - `ReceiptAlreadyAttached` if the record already carries a receipt
    pub async fn attach_receipt(
        &self,
        hash: &TxHash,
        receipt: TransactionReceipt,
    ) -> Result<(), RegistryError> {
        {
            let Ok(mut records) = self.records.write() else {
                return Err(RegistryError::MalformedRecord {
                    reason: "registry lock poisoned".to_owned(),
                });
            };
            let record = records
                .get_mut(hash)
                .ok_or_else(|| RegistryError::TransactionNotFound(hash.clone()))?;
            if record.receipt.is_some() {
                return Err(RegistryError::ReceiptAlreadyAttached(hash.clone()));
            }
            record.receipt = Some(receipt.clone());
        }

        debug!(hash = %hash, block = receipt.block_number, "Receipt attached");
        self.announce(WalletEvent::ReceiptArrived {
            hash: hash.clone(),
            receipt,
        })
        .await;
        Ok(())
    }

    /// Number of tracked records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// True if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the hash is tracked.
    pub fn contains(&self, hash: &TxHash) -> bool {
        self.records
            .read()
            .map(|r| r.contains_key(hash))
            .unwrap_or(false)
    }

    async fn announce(&self, event: WalletEvent) {
        if let Some(bus) = &self.bus {
            bus.publish(event).await;
        }
    }
}

impl Default for InMemoryTransactionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionRegistry for InMemoryTransactionRegistry {
    fn snapshot(&self) -> HashMap<TxHash, TransactionRecord> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(_) => {
                warn!("Registry lock poisoned, serving empty snapshot");
                HashMap::new()
            }
        }
    }
}

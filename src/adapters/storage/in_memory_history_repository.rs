//! In-Memory History Repository Adapter

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::history::HistoryLedger;
use crate::ports::{HistoryRepository, StorageError};

#[derive(Debug, Clone)]
pub struct InMemoryHistoryRepository {
    ledger: Arc<RwLock<HistoryLedger>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(RwLock::new(HistoryLedger::new())),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every following save fail with `StorageError::Io`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored ledger.
    pub async fn stored(&self) -> HistoryLedger {
        self.ledger.read().await.clone()
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<HistoryLedger, StorageError> {
        Ok(self.ledger.read().await.clone())
    }

    async fn save(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("simulated write failure".to_string()));
        }
        *self.ledger.write().await = ledger.clone();
        Ok(())
    }
}

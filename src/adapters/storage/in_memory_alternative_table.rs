//! In-Memory Alternative Table Adapter
//!
//! Keeps rows in memory. Useful for testing and development; writes can be
//! made to fail to exercise storage-failure paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Alternative;
use crate::ports::{AlternativeTable, StorageError};

#[derive(Debug, Clone)]
pub struct InMemoryAlternativeTable {
    rows: Arc<RwLock<Vec<Alternative>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryAlternativeTable {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<Alternative>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every following write fail with `StorageError::Io`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored rows.
    pub async fn rows(&self) -> Vec<Alternative> {
        self.rows.read().await.clone()
    }

    /// Replaces the stored rows directly, bypassing failure injection.
    pub async fn replace(&self, rows: Vec<Alternative>) {
        *self.rows.write().await = rows;
    }
}

impl Default for InMemoryAlternativeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlternativeTable for InMemoryAlternativeTable {
    async fn read_rows(&self) -> Result<Vec<Alternative>, StorageError> {
        Ok(self.rows.read().await.clone())
    }

    async fn write_rows(&self, rows: &[Alternative]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io("simulated write failure".to_string()));
        }
        *self.rows.write().await = rows.to_vec();
        Ok(())
    }
}

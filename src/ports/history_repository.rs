//! History Repository Port - Durable home of the calculation ledger.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::history::HistoryLedger;

/// Port for loading and saving the history ledger
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Load the ledger, including its id counter.
    ///
    /// A missing store loads as an empty ledger.
    async fn load(&self) -> Result<HistoryLedger, StorageError>;

    /// Persist the ledger atomically.
    async fn save(&self, ledger: &HistoryLedger) -> Result<(), StorageError>;
}

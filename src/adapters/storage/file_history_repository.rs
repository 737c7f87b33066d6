//! File-based History Repository Adapter
//!
//! Stores the ledger as pretty-printed JSON:
//! `{"next_id": 7, "entries": [ ...newest first... ]}`.
//! A bare array of entries (the older layout without a counter) is also
//! accepted on load.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::atomic_write::{read_optional, write_atomic};
use crate::domain::history::{HistoryEntry, HistoryLedger};
use crate::ports::{HistoryRepository, StorageError};

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Ledger {
        next_id: u64,
        entries: Vec<HistoryEntry>,
    },
    Legacy(Vec<HistoryEntry>),
}

#[derive(Serialize)]
struct StoredLedger<'a> {
    next_id: u64,
    entries: &'a [HistoryEntry],
}

/// JSON file holding the calculation history
#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<HistoryLedger, StorageError> {
        let Some(json) = read_optional(&self.path).await? else {
            return Ok(HistoryLedger::new());
        };

        if json.trim().is_empty() {
            return Ok(HistoryLedger::new());
        }

        let stored: StoredHistory = serde_json::from_str(&json)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;

        let ledger = match stored {
            StoredHistory::Ledger { next_id, entries } => HistoryLedger::restore(next_id, entries),
            StoredHistory::Legacy(entries) => {
                info!(
                    path = %self.path.display(),
                    count = entries.len(),
                    "Loaded history without id counter, resuming after highest id"
                );
                HistoryLedger::from_entries(entries)
            }
        };

        debug!(path = %self.path.display(), count = ledger.len(), "History loaded");
        Ok(ledger)
    }

    async fn save(&self, ledger: &HistoryLedger) -> Result<(), StorageError> {
        let stored = StoredLedger {
            next_id: ledger.next_id().value(),
            entries: ledger.entries(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        write_atomic(&self.path, json.as_bytes()).await?;
        debug!(path = %self.path.display(), count = ledger.len(), "History written");
        Ok(())
    }
}

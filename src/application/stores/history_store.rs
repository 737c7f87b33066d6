//! HistoryStore - Owns the live history ledger and its repository.
//!
//! Same persist-then-commit discipline as the alternative store.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::foundation::{HistoryId, Timestamp};
use crate::domain::history::{HistoryDraft, HistoryEntry, HistoryError, HistoryLedger};
use crate::ports::HistoryRepository;

pub struct HistoryStore {
    repository: Arc<dyn HistoryRepository>,
    ledger: Mutex<HistoryLedger>,
}

impl HistoryStore {
    pub async fn open(repository: Arc<dyn HistoryRepository>) -> Result<Self, HistoryError> {
        let ledger = repository.load().await?;
        info!(count = ledger.len(), next_id = %ledger.next_id(), "History loaded");
        Ok(Self {
            repository,
            ledger: Mutex::new(ledger),
        })
    }

    pub async fn reload(&self) -> Result<usize, HistoryError> {
        let mut ledger = self.ledger.lock().await;
        *ledger = self.repository.load().await?;
        info!(count = ledger.len(), "History reloaded");
        Ok(ledger.len())
    }

    /// Entries, newest first.
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.ledger.lock().await.entries().to_vec()
    }

    pub async fn get(&self, id: HistoryId) -> Result<HistoryEntry, HistoryError> {
        self.ledger
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or(HistoryError::NotFound(id))
    }

    pub async fn append(&self, draft: HistoryDraft) -> Result<HistoryEntry, HistoryError> {
        let mut ledger = self.ledger.lock().await;
        let mut next = ledger.clone();
        let entry = next.append(draft, Timestamp::now());

        self.persist(&next).await?;
        *ledger = next;

        info!(id = %entry.id, title = %entry.title, top_vendor = %entry.top_vendor, "Calculation saved to history");
        Ok(entry)
    }

    pub async fn remove(&self, id: HistoryId) -> Result<HistoryEntry, HistoryError> {
        let mut ledger = self.ledger.lock().await;
        let mut next = ledger.clone();
        let removed = next.remove(id)?;

        self.persist(&next).await?;
        *ledger = next;

        info!(id = %id, "History entry deleted");
        Ok(removed)
    }

    /// Deletes every entry, returning how many were removed.
    pub async fn clear(&self) -> Result<usize, HistoryError> {
        let mut ledger = self.ledger.lock().await;
        let mut next = ledger.clone();
        let removed = next.clear();

        self.persist(&next).await?;
        *ledger = next;

        info!(removed, "History cleared");
        Ok(removed)
    }

    async fn persist(&self, ledger: &HistoryLedger) -> Result<(), HistoryError> {
        self.repository.save(ledger).await.map_err(|e| {
            warn!(error = %e, "History write failed, keeping previous ledger");
            HistoryError::Storage(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHistoryRepository;
    use crate::domain::analysis::WeightVector;
    use crate::domain::history::HISTORY_CAPACITY;

    fn draft(title: &str) -> HistoryDraft {
        HistoryDraft {
            title: title.to_string(),
            description: None,
            tags: vec![],
            weights: WeightVector::equal(),
            total_alternatives: 2,
            top_vendor: "OVH".to_string(),
            top_plan: "VPS Starter".to_string(),
            top_score: 0.5,
            rankings: vec![],
        }
    }

    async fn store() -> (Arc<InMemoryHistoryRepository>, HistoryStore) {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let store = HistoryStore::open(repo.clone()).await.unwrap();
        (repo, store)
    }

    #[tokio::test]
    async fn append_persists_newest_first() {
        let (repo, store) = store().await;
        store.append(draft("one")).await.unwrap();
        store.append(draft("two")).await.unwrap();

        let titles: Vec<String> = store.list().await.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["two".to_string(), "one".to_string()]);
        assert_eq!(repo.stored().await.len(), 2);
    }

    #[tokio::test]
    async fn fifty_one_appends_keep_fifty() {
        let (_repo, store) = store().await;
        for i in 1..=HISTORY_CAPACITY + 1 {
            store.append(draft(&format!("run {}", i))).await.unwrap();
        }

        let entries = store.list().await;
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries[0].title, "run 51");
        assert!(entries.iter().all(|e| e.title != "run 1"));
    }

    #[tokio::test]
    async fn delete_then_append_gets_fresh_id() {
        let (_repo, store) = store().await;
        store.append(draft("a")).await.unwrap();
        store.append(draft("b")).await.unwrap();
        store.remove(HistoryId::new(1)).await.unwrap();

        let entry = store.append(draft("c")).await.unwrap();

        assert_eq!(entry.id, HistoryId::new(3));
        assert!(store.get(HistoryId::new(2)).await.is_ok());
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_ledger() {
        let (repo, store) = store().await;
        store.append(draft("kept")).await.unwrap();
        repo.set_fail_writes(true);

        assert!(matches!(store.append(draft("lost")).await, Err(HistoryError::Storage(_))));
        assert!(matches!(store.clear().await, Err(HistoryError::Storage(_))));

        let entries = store.list().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "kept");

        repo.set_fail_writes(false);
        let entry = store.append(draft("next")).await.unwrap();
        assert_eq!(entry.id, HistoryId::new(2));
    }

    #[tokio::test]
    async fn remove_unknown_is_not_found() {
        let (_repo, store) = store().await;
        assert!(matches!(
            store.remove(HistoryId::new(1)).await,
            Err(HistoryError::NotFound(_))
        ));
    }
}

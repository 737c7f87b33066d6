//! AlternativeStore - Owns the live catalog and its durable table.
//!
//! Every mutation works on a copy of the catalog, writes the copy to the
//! table and only then swaps it in. A failed write leaves both the table
//! and the in-memory catalog as they were. The lock is held across the
//! write, so mutations are applied one at a time.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::catalog::{Alternative, AlternativeDraft, Catalog, CatalogError};
use crate::domain::foundation::AlternativeId;
use crate::ports::AlternativeTable;

pub struct AlternativeStore {
    table: Arc<dyn AlternativeTable>,
    catalog: Mutex<Catalog>,
}

impl AlternativeStore {
    /// Opens the store, reading the current table.
    pub async fn open(table: Arc<dyn AlternativeTable>) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_rows(table.read_rows().await?);
        info!(count = catalog.len(), "Alternative catalog loaded");
        Ok(Self {
            table,
            catalog: Mutex::new(catalog),
        })
    }

    /// Re-reads the table, replacing the in-memory catalog.
    ///
    /// On failure the current catalog stays in place.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        let rows = self.table.read_rows().await.map_err(|e| {
            warn!(error = %e, "Alternative catalog reload failed");
            e
        })?;
        *catalog = Catalog::from_rows(rows);
        info!(count = catalog.len(), "Alternative catalog reloaded");
        Ok(catalog.len())
    }

    /// Alternatives in ascending id order.
    pub async fn list(&self) -> Vec<Alternative> {
        self.catalog.lock().await.alternatives().to_vec()
    }

    /// A consistent copy of the whole catalog.
    pub async fn snapshot(&self) -> Catalog {
        self.catalog.lock().await.clone()
    }

    pub async fn get(&self, id: AlternativeId) -> Result<Alternative, CatalogError> {
        self.catalog
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    pub async fn add(&self, draft: AlternativeDraft) -> Result<Alternative, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        let mut next = catalog.clone();
        let added = next.add(draft);

        self.persist(&next).await?;
        *catalog = next;

        info!(id = %added.id, vendor = %added.vendor, "Alternative added");
        Ok(added)
    }

    pub async fn update(
        &self,
        id: AlternativeId,
        draft: AlternativeDraft,
    ) -> Result<Alternative, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        let mut next = catalog.clone();
        let updated = next.update(id, draft)?;

        self.persist(&next).await?;
        *catalog = next;

        info!(id = %id, vendor = %updated.vendor, "Alternative updated");
        Ok(updated)
    }

    /// Removes an alternative; later ids shift down by one.
    pub async fn remove(&self, id: AlternativeId) -> Result<Alternative, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        let mut next = catalog.clone();
        let removed = next.remove(id)?;

        self.persist(&next).await?;
        *catalog = next;

        info!(id = %id, vendor = %removed.vendor, remaining = catalog.len(), "Alternative removed");
        Ok(removed)
    }

    async fn persist(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        self.table
            .write_rows(catalog.alternatives())
            .await
            .map_err(|e| {
                warn!(error = %e, "Alternative table write failed, keeping previous catalog");
                CatalogError::Storage(e)
            })?;
        debug!(count = catalog.len(), "Alternative table persisted");
        Ok(())
    }
}

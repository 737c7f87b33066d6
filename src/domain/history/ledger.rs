//! History Ledger - Bounded, most-recent-first list of saved calculations.
//!
//! # Identity
//!
//! Ids come from a counter that only moves forward. Deleting or clearing
//! entries never frees an id, so a new entry cannot collide with a
//! surviving one.

use super::{HistoryDraft, HistoryEntry, HistoryError};
use crate::domain::foundation::{HistoryId, Timestamp};

/// Maximum number of entries retained; older ones are dropped.
pub const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLedger {
    next_id: u64,
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Rebuilds a ledger from persisted parts.
    ///
    /// The counter is raised past every stored id if needed, and entries
    /// beyond capacity are dropped from the tail.
    pub fn restore(next_id: u64, mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        let floor = entries
            .iter()
            .map(|e| e.id.value() + 1)
            .max()
            .unwrap_or(1);
        Self {
            next_id: next_id.max(floor),
            entries,
        }
    }

    /// Rebuilds a ledger from a bare entry list without a stored counter.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self::restore(1, entries)
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The id the next appended entry will receive.
    pub fn next_id(&self) -> HistoryId {
        HistoryId::new(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: HistoryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Prepends a new entry and evicts the oldest beyond capacity.
    pub fn append(&mut self, draft: HistoryDraft, timestamp: Timestamp) -> HistoryEntry {
        let entry = draft.into_entry(HistoryId::new(self.next_id), timestamp);
        self.next_id += 1;
        self.entries.insert(0, entry.clone());
        self.entries.truncate(HISTORY_CAPACITY);
        entry
    }

    pub fn remove(&mut self, id: HistoryId) -> Result<HistoryEntry, HistoryError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(HistoryError::NotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Drops every entry, returning how many were removed. The id counter is kept.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

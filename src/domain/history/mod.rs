//! History module - Saved calculation snapshots.

mod entry;
mod errors;
mod ledger;

pub use entry::{round_score, HistoryDraft, HistoryEntry, RankingSnapshot, SNAPSHOT_RANKINGS};
pub use errors::HistoryError;
pub use ledger::{HistoryLedger, HISTORY_CAPACITY};

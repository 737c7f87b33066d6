//! Stores - Explicit owners of the mutable state behind the service.

mod alternative_store;
mod history_store;

pub use alternative_store::AlternativeStore;
pub use history_store::HistoryStore;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AlternativeTable` - Row source holding the alternative catalog
//! - `HistoryRepository` - Persistence for the calculation history ledger

mod alternative_table;
mod history_repository;
mod storage_error;

pub use alternative_table::AlternativeTable;
pub use history_repository::HistoryRepository;
pub use storage_error::StorageError;

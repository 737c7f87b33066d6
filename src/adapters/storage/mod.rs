//! Storage Adapters
//!
//! Implementations of the `AlternativeTable` and `HistoryRepository` ports.
//!
//! ## Available Adapters
//!
//! - **FileAlternativeTable** - Catalog rows as a YAML file
//! - **FileHistoryRepository** - History ledger as a JSON file
//! - **InMemoryAlternativeTable** / **InMemoryHistoryRepository** - In memory (testing/development)
//!
//! File adapters replace their file atomically on every write.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAlternativeTable, FileHistoryRepository};
//!
//! let table = FileAlternativeTable::new("./data/alternatives.yaml");
//! let history = FileHistoryRepository::new("./data/calculation_history.json");
//! ```

mod atomic_write;
mod file_alternative_table;
mod file_history_repository;
mod in_memory_alternative_table;
mod in_memory_history_repository;

pub use file_alternative_table::FileAlternativeTable;
pub use file_history_repository::FileHistoryRepository;
pub use in_memory_alternative_table::InMemoryAlternativeTable;
pub use in_memory_history_repository::InMemoryHistoryRepository;

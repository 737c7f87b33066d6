//! Alternative Table Port - Durable table of hosting alternatives.
//!
//! The table is read and written whole. Implementations drop rows whose
//! vendor is blank before handing rows to the domain.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::catalog::Alternative;

/// Port for the row source behind the alternative catalog
#[async_trait]
pub trait AlternativeTable: Send + Sync {
    /// Read every usable row in stored order.
    ///
    /// A table that does not exist yet reads as empty.
    ///
    /// # Errors
    /// - `CorruptRow` if a row has a level outside 1..=5
    /// - `Io` / `Deserialization` if the table cannot be read
    async fn read_rows(&self) -> Result<Vec<Alternative>, StorageError>;

    /// Replace the whole table.
    ///
    /// Either every row is written or the previous table is left intact.
    async fn write_rows(&self, rows: &[Alternative]) -> Result<(), StorageError>;
}

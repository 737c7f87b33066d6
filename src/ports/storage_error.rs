//! Storage errors shared by the persistence ports.

/// Errors that can occur while reading or writing durable state
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize: {0}")]
    Serialization(String),

    #[error("Failed to deserialize: {0}")]
    Deserialization(String),

    /// A stored row could not be turned into a domain value.
    #[error("Corrupt row {row}: {reason}")]
    CorruptRow { row: usize, reason: String },
}

impl StorageError {
    pub fn corrupt_row(row: usize, reason: impl Into<String>) -> Self {
        Self::CorruptRow {
            row,
            reason: reason.into(),
        }
    }
}

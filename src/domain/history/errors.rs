//! History error types.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{ErrorCode, HistoryId, ValidationError};
use crate::ports::StorageError;

/// Errors raised while saving, reading or deleting history entries.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History entry not found: {0}")]
    NotFound(HistoryId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The ledger could not be persisted; the previous state is still in effect.
    #[error("History storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl HistoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            HistoryError::NotFound(_) => ErrorCode::HistoryEntryNotFound,
            HistoryError::Validation(_) => ErrorCode::ValidationFailed,
            HistoryError::Analysis(err) => err.code(),
            HistoryError::Storage(_) => ErrorCode::StorageFailure,
        }
    }
}

//! Catalog error types.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{AlternativeId, ErrorCode, ValidationError};
use crate::ports::StorageError;

/// Errors raised by catalog mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Alternative not found: {0}")]
    NotFound(AlternativeId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidLevel(#[from] AnalysisError),

    /// The table could not be persisted; the previous state is still in effect.
    #[error("Catalog storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn not_found(id: AlternativeId) -> Self {
        CatalogError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::NotFound(_) => ErrorCode::AlternativeNotFound,
            CatalogError::Validation(_) => ErrorCode::ValidationFailed,
            CatalogError::InvalidLevel(err) => err.code(),
            CatalogError::Storage(_) => ErrorCode::StorageFailure,
        }
    }
}

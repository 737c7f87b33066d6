//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{Criterion, ErrorCode};

/// Failures raised by the level codec, weight validation and the TOPSIS engine.
///
/// The engine is deterministic, so none of these are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("{criterion} level must be between 1 and 5, got {level}")]
    InvalidLevel { criterion: Criterion, level: i64 },

    #[error("{criterion} value must be a finite non-negative number, got {value}")]
    InvalidValue { criterion: Criterion, value: f64 },

    #[error("{criterion} weight must be a finite non-negative number, got {value}")]
    NegativeWeight { criterion: Criterion, value: f64 },

    #[error("{what} must have {expected} columns, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot rank an empty set of alternatives")]
    EmptyDataset,

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

impl AnalysisError {
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        AnalysisError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        AnalysisError::DegenerateInput(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InvalidLevel { .. } => ErrorCode::InvalidLevel,
            AnalysisError::InvalidValue { .. } => ErrorCode::InvalidValue,
            AnalysisError::NegativeWeight { .. } => ErrorCode::InvalidWeight,
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AnalysisError::EmptyDataset => ErrorCode::EmptyDataset,
            AnalysisError::DegenerateInput(_) => ErrorCode::DegenerateInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_names_the_criterion() {
        let err = AnalysisError::InvalidLevel {
            criterion: Criterion::Ram,
            level: 6,
        };
        assert_eq!(err.to_string(), "RAM level must be between 1 and 5, got 6");
        assert_eq!(err.code(), ErrorCode::InvalidLevel);
    }

    #[test]
    fn dimension_mismatch_displays_counts() {
        let err = AnalysisError::dimension_mismatch("weight vector", 4, 3);
        assert_eq!(err.to_string(), "weight vector must have 4 columns, got 3");
    }

    #[test]
    fn degenerate_input_maps_to_its_code() {
        let err = AnalysisError::degenerate("column CPU is entirely zero");
        assert_eq!(err.code(), ErrorCode::DegenerateInput);
    }
}

//! Decision Matrix - N alternatives by four criterion values.

use serde::Serialize;

use super::AnalysisError;
use crate::domain::foundation::{Criterion, CRITERIA_COUNT};

/// One alternative's values in column order (CPU, RAM, disk I/O, price).
pub type CriterionRow = [f64; CRITERIA_COUNT];

/// Raw criterion values, one row per alternative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<CriterionRow>,
}

impl DecisionMatrix {
    /// Creates a matrix from fixed-width rows.
    pub fn new(rows: Vec<CriterionRow>) -> Self {
        Self { rows }
    }

    /// Creates a matrix from loosely-shaped rows.
    ///
    /// # Errors
    /// `DimensionMismatch` if any row does not hold exactly four values.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AnalysisError> {
        let rows = rows
            .iter()
            .map(|row| {
                <CriterionRow>::try_from(row.as_slice()).map_err(|_| {
                    AnalysisError::dimension_mismatch("decision matrix row", CRITERIA_COUNT, row.len())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CriterionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of a single criterion across all alternatives.
    pub fn column(&self, criterion: Criterion) -> impl Iterator<Item = f64> + '_ {
        let index = criterion.index();
        self.rows.iter().map(move |row| row[index])
    }

    /// Checks every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for row in &self.rows {
            for criterion in Criterion::ALL {
                let value = row[criterion.index()];
                if !value.is_finite() || value < 0.0 {
                    return Err(AnalysisError::InvalidValue { criterion, value });
                }
            }
        }
        Ok(())
    }
}

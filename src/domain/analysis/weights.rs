//! Weight Vector - Per-criterion importance used by the TOPSIS engine.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::domain::foundation::{Criterion, CRITERIA_COUNT};

/// Tolerance for the "weights sum to 1" advisory check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Four non-negative criterion weights.
///
/// The engine uses the weights as given. Any non-negative vector is valid;
/// scaling every weight by the same positive factor leaves the ranking
/// unchanged, so callers decide whether to insist on a sum of 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
    pub price: f64,
}

impl WeightVector {
    /// Creates a validated weight vector.
    ///
    /// # Errors
    /// `NegativeWeight` if any weight is negative, NaN or infinite.
    pub fn new(cpu: f64, ram: f64, disk: f64, price: f64) -> Result<Self, AnalysisError> {
        let weights = Self {
            cpu,
            ram,
            disk,
            price,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Creates a weight vector from a slice in column order.
    ///
    /// # Errors
    /// `DimensionMismatch` if the slice does not hold exactly four weights.
    pub fn from_slice(weights: &[f64]) -> Result<Self, AnalysisError> {
        match weights {
            [cpu, ram, disk, price] => Self::new(*cpu, *ram, *disk, *price),
            _ => Err(AnalysisError::dimension_mismatch(
                "weight vector",
                CRITERIA_COUNT,
                weights.len(),
            )),
        }
    }

    /// Equal weighting of all four criteria.
    pub fn equal() -> Self {
        Self {
            cpu: 0.25,
            ram: 0.25,
            disk: 0.25,
            price: 0.25,
        }
    }

    /// Checks every weight is finite and non-negative.
    ///
    /// Deserialized vectors bypass `new`, so the engine calls this again.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::NegativeWeight { criterion, value });
            }
        }
        Ok(())
    }

    /// Weight of a single criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cpu => self.cpu,
            Criterion::Ram => self.ram,
            Criterion::DiskIo => self.disk,
            Criterion::Price => self.price,
        }
    }

    /// Weights in column order.
    pub fn as_array(&self) -> [f64; CRITERIA_COUNT] {
        [self.cpu, self.ram, self.disk, self.price]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Advisory check for callers that want to warn when weights do not sum to 1.
    pub fn sums_to_one(&self) -> bool {
        (self.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE
    }

    /// Returns a copy with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            cpu: self.cpu * factor,
            ram: self.ram * factor,
            disk: self.disk * factor,
            price: self.price * factor,
        }
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::equal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_negative_weights() {
        let w = WeightVector::new(0.4, 0.3, 0.2, 0.1).unwrap();
        assert_eq!(w.as_array(), [0.4, 0.3, 0.2, 0.1]);
        assert!(w.sums_to_one());
    }

    #[test]
    fn new_accepts_vectors_not_summing_to_one() {
        let w = WeightVector::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(w.sum(), 4.0);
        assert!(!w.sums_to_one());
    }

    #[test]
    fn new_rejects_negative_weight() {
        let err = WeightVector::new(0.5, -0.1, 0.3, 0.3).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NegativeWeight {
                criterion: Criterion::Ram,
                value: -0.1
            }
        );
    }

    #[test]
    fn new_rejects_nan_weight() {
        assert!(WeightVector::new(0.5, 0.5, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn from_slice_requires_four_weights() {
        assert!(WeightVector::from_slice(&[0.25, 0.25, 0.25, 0.25]).is_ok());

        let err = WeightVector::from_slice(&[0.5, 0.5]).unwrap_err();
        assert_eq!(err, AnalysisError::dimension_mismatch("weight vector", 4, 2));

        assert!(WeightVector::from_slice(&[0.2; 5]).is_err());
    }

    #[test]
    fn get_follows_column_order() {
        let w = WeightVector::new(0.1, 0.2, 0.3, 0.4).unwrap();
        for criterion in Criterion::ALL {
            assert_eq!(w.get(criterion), w.as_array()[criterion.index()]);
        }
    }

    #[test]
    fn default_is_equal_weighting() {
        assert_eq!(WeightVector::default(), WeightVector::equal());
        assert!(WeightVector::default().sums_to_one());
    }

    #[test]
    fn scaled_multiplies_every_weight() {
        let w = WeightVector::equal().scaled(4.0);
        assert_eq!(w.as_array(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn deserializes_from_named_fields() {
        let w: WeightVector =
            serde_json::from_str(r#"{"cpu":0.4,"ram":0.3,"disk":0.2,"price":0.1}"#).unwrap();
        assert_eq!(w.get(Criterion::DiskIo), 0.2);
    }
}

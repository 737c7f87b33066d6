//! TOPSIS Engine - Ranking by relative closeness to the ideal solution.
//!
//! # Algorithm
//! 1. Normalize each column: r[i][j] = x[i][j] / √(Σᵢ x[i][j]²)
//! 2. Weight: y[i][j] = r[i][j] × w[j]
//! 3. Ideal solutions: A⁺ takes the column max for benefits and the min for
//!    cost; A⁻ the opposite
//! 4. Distances: D⁺[i] = ‖y[i] − A⁺‖, D⁻[i] = ‖y[i] − A⁻‖
//! 5. Score: S[i] = D⁻[i] / (D⁺[i] + D⁻[i])
//! 6. Rank by descending score with competition ranking (ties share a rank,
//!    the next rank skips by the size of the tie)
//!
//! Pure and synchronous; safe to call from any number of tasks.

use serde::Serialize;

use super::{AnalysisError, CriterionRow, DecisionMatrix, WeightVector};
use crate::domain::foundation::{Criterion, Polarity, CRITERIA_COUNT};

/// Scores closer than this are considered tied.
pub const SCORE_TIE_EPSILON: f64 = 1e-12;

/// Every intermediate step of one TOPSIS run, rows in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisResult {
    /// Decision matrix X.
    pub decision: Vec<CriterionRow>,
    /// Column divisors √(Σx²).
    pub divisors: CriterionRow,
    /// Normalized matrix R.
    pub normalized: Vec<CriterionRow>,
    /// Weighted normalized matrix Y.
    pub weighted: Vec<CriterionRow>,
    pub ideal_positive: CriterionRow,
    pub ideal_negative: CriterionRow,
    pub distances_positive: Vec<f64>,
    pub distances_negative: Vec<f64>,
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

impl TopsisResult {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Row indices ordered by rank; tied rows keep their input order.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&i| self.ranks[i]);
        order
    }
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Runs the full TOPSIS pipeline.
    ///
    /// # Errors
    /// - `EmptyDataset` if the matrix has no rows
    /// - `InvalidValue` / `NegativeWeight` for negative or non-finite inputs
    /// - `DegenerateInput` if a column is entirely zero, or a row coincides
    ///   with both ideal solutions (only possible when every weighted column
    ///   is constant, e.g. a single alternative)
    pub fn rank(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
    ) -> Result<TopsisResult, AnalysisError> {
        weights.validate()?;
        matrix.validate()?;

        let (divisors, normalized) = Self::normalize(matrix)?;
        let weighted = Self::weigh(&normalized, weights);
        let (ideal_positive, ideal_negative) = Self::ideal_solutions(&weighted);

        let distances_positive: Vec<f64> = weighted
            .iter()
            .map(|row| Self::distance(row, &ideal_positive))
            .collect();
        let distances_negative: Vec<f64> = weighted
            .iter()
            .map(|row| Self::distance(row, &ideal_negative))
            .collect();

        let scores = Self::closeness(&distances_positive, &distances_negative)?;
        let ranks = Self::competition_ranks(&scores);

        Ok(TopsisResult {
            decision: matrix.rows().to_vec(),
            divisors,
            normalized,
            weighted,
            ideal_positive,
            ideal_negative,
            distances_positive,
            distances_negative,
            scores,
            ranks,
        })
    }

    /// Runs TOPSIS on loosely-shaped input.
    ///
    /// # Errors
    /// `DimensionMismatch` if any row or the weight slice is not four wide,
    /// plus everything [`TopsisEngine::rank`] can return.
    pub fn rank_rows(values: &[Vec<f64>], weights: &[f64]) -> Result<TopsisResult, AnalysisError> {
        let matrix = DecisionMatrix::from_rows(values)?;
        let weights = WeightVector::from_slice(weights)?;
        Self::rank(&matrix, &weights)
    }

    /// Vector-normalizes each column, returning the divisors and matrix R.
    pub fn normalize(
        matrix: &DecisionMatrix,
    ) -> Result<(CriterionRow, Vec<CriterionRow>), AnalysisError> {
        if matrix.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let mut divisors = [0.0; CRITERIA_COUNT];
        for criterion in Criterion::ALL {
            let divisor = matrix.column(criterion).fold(0.0, f64::hypot);
            if divisor == 0.0 {
                return Err(AnalysisError::degenerate(format!(
                    "every {} value is zero, normalization is undefined",
                    criterion
                )));
            }
            divisors[criterion.index()] = divisor;
        }

        let normalized = matrix
            .rows()
            .iter()
            .map(|row| {
                let mut r = *row;
                for (value, divisor) in r.iter_mut().zip(divisors.iter()) {
                    *value /= divisor;
                }
                r
            })
            .collect();

        Ok((divisors, normalized))
    }

    /// Multiplies each normalized column by its weight.
    pub fn weigh(normalized: &[CriterionRow], weights: &WeightVector) -> Vec<CriterionRow> {
        let w = weights.as_array();
        normalized
            .iter()
            .map(|row| {
                let mut y = *row;
                for (value, weight) in y.iter_mut().zip(w.iter()) {
                    *value *= weight;
                }
                y
            })
            .collect()
    }

    /// Returns (A⁺, A⁻) using each criterion's fixed polarity.
    pub fn ideal_solutions(weighted: &[CriterionRow]) -> (CriterionRow, CriterionRow) {
        let mut positive = [0.0; CRITERIA_COUNT];
        let mut negative = [0.0; CRITERIA_COUNT];

        for criterion in Criterion::ALL {
            let j = criterion.index();
            let max = weighted.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max);
            let min = weighted.iter().map(|row| row[j]).fold(f64::INFINITY, f64::min);

            let (best, worst) = match criterion.polarity() {
                Polarity::Benefit => (max, min),
                Polarity::Cost => (min, max),
            };
            positive[j] = best;
            negative[j] = worst;
        }

        (positive, negative)
    }

    /// Euclidean distance between a weighted row and an ideal vector.
    pub fn distance(row: &CriterionRow, ideal: &CriterionRow) -> f64 {
        row.iter()
            .zip(ideal.iter())
            .map(|(y, a)| y - a)
            .fold(0.0, f64::hypot)
    }

    /// Relative closeness D⁻ / (D⁺ + D⁻) for every row.
    pub fn closeness(
        distances_positive: &[f64],
        distances_negative: &[f64],
    ) -> Result<Vec<f64>, AnalysisError> {
        distances_positive
            .iter()
            .zip(distances_negative.iter())
            .enumerate()
            .map(|(i, (d_pos, d_neg))| {
                let total = d_pos + d_neg;
                if total == 0.0 {
                    Err(AnalysisError::degenerate(format!(
                        "alternative at row {} coincides with both ideal solutions",
                        i + 1
                    )))
                } else {
                    Ok(d_neg / total)
                }
            })
            .collect()
    }

    /// Competition ranking by descending score ("1224" style).
    pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0u32; scores.len()];
        let mut current_rank = 0u32;
        let mut group_score: Option<f64> = None;

        for (position, &index) in order.iter().enumerate() {
            let score = scores[index];
            match group_score {
                Some(leading) if (leading - score).abs() <= SCORE_TIE_EPSILON => {}
                _ => {
                    current_rank = position as u32 + 1;
                    group_score = Some(score);
                }
            }
            ranks[index] = current_rank;
        }

        ranks
    }
}

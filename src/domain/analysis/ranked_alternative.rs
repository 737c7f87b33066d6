//! Ranked Alternative - An alternative joined with its TOPSIS outcome.

use serde::Serialize;

use super::{CriterionRow, TopsisResult};
use crate::domain::catalog::Alternative;

/// One row of a ranking, produced fresh on every calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub alternative: Alternative,
    /// Representative criterion values in column order.
    pub values: CriterionRow,
    pub score: f64,
    /// 1 = best; tied scores share a rank.
    pub rank: u32,
    pub distance_positive: f64,
    pub distance_negative: f64,
}

impl RankedAlternative {
    /// Joins alternatives with the result computed from their matrix,
    /// ordered by rank (ties keep catalog order).
    ///
    /// `alternatives` must be the rows the result was computed from.
    pub fn assemble(alternatives: &[Alternative], result: &TopsisResult) -> Vec<Self> {
        result
            .order()
            .into_iter()
            .filter_map(|i| {
                alternatives.get(i).map(|alternative| Self {
                    alternative: alternative.clone(),
                    values: result.decision[i],
                    score: result.scores[i],
                    rank: result.ranks[i],
                    distance_positive: result.distances_positive[i],
                    distance_negative: result.distances_negative[i],
                })
            })
            .collect()
    }
}

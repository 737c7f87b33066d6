//! CalculateRankingHandler - Runs TOPSIS over the current catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::application::stores::AlternativeStore;
use crate::domain::analysis::{
    AnalysisError, CriterionRow, RankedAlternative, TopsisEngine, TopsisResult, WeightVector,
};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{Criterion, Polarity};

/// Command to rank the catalog under a set of weights.
#[derive(Debug, Clone)]
pub struct CalculateRankingCommand {
    pub weights: WeightVector,
}

/// Column metadata shipped with a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionSummary {
    pub criterion: Criterion,
    pub label: &'static str,
    pub unit: &'static str,
    pub polarity: Polarity,
}

impl From<Criterion> for CriterionSummary {
    fn from(criterion: Criterion) -> Self {
        Self {
            criterion,
            label: criterion.label(),
            unit: criterion.unit(),
            polarity: criterion.polarity(),
        }
    }
}

/// Everything a caller needs to render a ranking and its intermediate steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub weights: WeightVector,
    /// Advisory only; the engine uses the weights as given.
    pub weights_sum_to_one: bool,
    pub criteria: Vec<CriterionSummary>,
    /// Best first.
    pub ranking: Vec<RankedAlternative>,
    /// Every matrix and vector, in catalog order.
    pub detail: TopsisResult,
}

impl RankingReport {
    /// Ranks every alternative in `catalog`.
    pub fn from_catalog(catalog: &Catalog, weights: WeightVector) -> Result<Self, AnalysisError> {
        let detail = TopsisEngine::rank(&catalog.decision_matrix(), &weights)?;
        let ranking = RankedAlternative::assemble(catalog.alternatives(), &detail);

        Ok(Self {
            weights,
            weights_sum_to_one: weights.sums_to_one(),
            criteria: Criterion::ALL.into_iter().map(CriterionSummary::from).collect(),
            ranking,
            detail,
        })
    }

    /// The rank-1 alternative (first in catalog order on a tie).
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }

    pub fn ideal_positive(&self) -> &CriterionRow {
        &self.detail.ideal_positive
    }

    pub fn ideal_negative(&self) -> &CriterionRow {
        &self.detail.ideal_negative
    }
}

/// Handler for ranking calculations.
pub struct CalculateRankingHandler {
    alternatives: Arc<AlternativeStore>,
}

impl CalculateRankingHandler {
    pub fn new(alternatives: Arc<AlternativeStore>) -> Self {
        Self { alternatives }
    }

    pub async fn handle(&self, cmd: CalculateRankingCommand) -> Result<RankingReport, AnalysisError> {
        cmd.weights.validate()?;
        if !cmd.weights.sums_to_one() {
            debug!(sum = cmd.weights.sum(), "Weights do not sum to 1, using them as given");
        }

        let catalog = self.alternatives.snapshot().await;
        let report = RankingReport::from_catalog(&catalog, cmd.weights).map_err(|e| {
            warn!(error = %e, alternatives = catalog.len(), "Ranking calculation rejected");
            e
        })?;

        if let Some(top) = report.top() {
            debug!(
                vendor = %top.alternative.vendor,
                score = top.score,
                alternatives = report.ranking.len(),
                "Ranking calculated"
            );
        }
        Ok(report)
    }
}

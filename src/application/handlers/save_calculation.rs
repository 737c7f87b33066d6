//! SaveCalculationHandler - Ranks the catalog and records the outcome in history.

use std::sync::Arc;

use crate::application::stores::{AlternativeStore, HistoryStore};
use crate::domain::analysis::WeightVector;
use crate::domain::history::{HistoryDraft, HistoryEntry, HistoryError};

use super::RankingReport;

/// Command to save a calculation under a title.
#[derive(Debug, Clone)]
pub struct SaveCalculationCommand {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub weights: WeightVector,
}

/// Handler for saving calculations to history.
pub struct SaveCalculationHandler {
    alternatives: Arc<AlternativeStore>,
    history: Arc<HistoryStore>,
}

impl SaveCalculationHandler {
    pub fn new(alternatives: Arc<AlternativeStore>, history: Arc<HistoryStore>) -> Self {
        Self {
            alternatives,
            history,
        }
    }

    pub async fn handle(&self, cmd: SaveCalculationCommand) -> Result<HistoryEntry, HistoryError> {
        // 1. Rank the current catalog
        let catalog = self.alternatives.snapshot().await;
        let report = RankingReport::from_catalog(&catalog, cmd.weights)?;

        // 2. Condense into a snapshot
        let draft = HistoryDraft::from_ranking(
            cmd.title,
            cmd.description,
            cmd.tags,
            cmd.weights,
            &report.ranking,
        )?;

        // 3. Persist
        self.history.append(draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryAlternativeTable, InMemoryHistoryRepository};
    use crate::domain::analysis::AnalysisError;
    use crate::domain::catalog::{AlternativeDraft, CriterionLevels};
    use crate::domain::foundation::HistoryId;
    use crate::domain::history::SNAPSHOT_RANKINGS;

    async fn handler_with(count: i64) -> (SaveCalculationHandler, Arc<HistoryStore>) {
        let alternatives = AlternativeStore::open(Arc::new(InMemoryAlternativeTable::new()))
            .await
            .unwrap();
        for i in 0..count {
            let levels = CriterionLevels::from_raw(i % 5 + 1, (i + 1) % 5 + 1, 3, (i + 3) % 5 + 1).unwrap();
            alternatives
                .add(AlternativeDraft::new(format!("vendor-{}", i), format!("plan-{}", i), levels).unwrap())
                .await
                .unwrap();
        }
        let history = Arc::new(
            HistoryStore::open(Arc::new(InMemoryHistoryRepository::new()))
                .await
                .unwrap(),
        );
        (
            SaveCalculationHandler::new(Arc::new(alternatives), history.clone()),
            history,
        )
    }

    fn command(title: &str) -> SaveCalculationCommand {
        SaveCalculationCommand {
            title: title.to_string(),
            description: None,
            tags: vec!["baseline".to_string()],
            weights: WeightVector::new(0.4, 0.3, 0.2, 0.1).unwrap(),
        }
    }

    #[tokio::test]
    async fn saves_top_five_snapshot() {
        let (handler, history) = handler_with(7).await;

        let entry = handler.handle(command("first run")).await.unwrap();

        assert_eq!(entry.id, HistoryId::new(1));
        assert_eq!(entry.total_alternatives, 7);
        assert_eq!(entry.rankings.len(), SNAPSHOT_RANKINGS);
        assert_eq!(entry.top_vendor, entry.rankings[0].vendor);
        assert_eq!(entry.top_plan, entry.rankings[0].plan);
        assert_eq!(entry.top_score, (entry.rankings[0].score * 10_000.0).round() / 10_000.0);
        assert_eq!(history.list().await.len(), 1);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_without_saving() {
        let (handler, history) = handler_with(3).await;

        let err = handler.handle(command("   ")).await.unwrap_err();

        assert!(matches!(err, HistoryError::Validation(_)));
        assert!(history.list().await.is_empty());
    }

    #[tokio::test]
    async fn empty_catalog_is_rejected() {
        let (handler, _history) = handler_with(0).await;

        let err = handler.handle(command("nothing")).await.unwrap_err();
        assert!(matches!(err, HistoryError::Analysis(AnalysisError::EmptyDataset)));
    }
}

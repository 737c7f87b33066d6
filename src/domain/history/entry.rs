//! History entries - Condensed snapshots of past calculations.

use serde::{Deserialize, Deserializer, Serialize};

use super::HistoryError;
use crate::domain::analysis::{AnalysisError, RankedAlternative, WeightVector};
use crate::domain::foundation::{HistoryId, Timestamp, ValidationError};

/// How many ranking rows a snapshot keeps.
pub const SNAPSHOT_RANKINGS: usize = 5;

/// Rounds a score to the four decimals stored as `top_score`.
pub fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

/// One condensed ranking row.
///
/// The aliases accept the column names of older history files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    #[serde(alias = "Rank")]
    pub rank: u32,
    #[serde(alias = "Vendor")]
    pub vendor: String,
    #[serde(default, alias = "Nama Paket (Plan)")]
    pub plan: String,
    #[serde(alias = "Score")]
    pub score: f64,
}

impl From<&RankedAlternative> for RankingSnapshot {
    fn from(ranked: &RankedAlternative) -> Self {
        Self {
            rank: ranked.rank,
            vendor: ranked.alternative.vendor.clone(),
            plan: ranked.alternative.plan.clone(),
            score: ranked.score,
        }
    }
}

/// A saved calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub timestamp: Timestamp,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub weights: WeightVector,
    pub total_alternatives: usize,
    pub top_vendor: String,
    #[serde(default)]
    pub top_plan: String,
    pub top_score: f64,
    #[serde(default)]
    pub rankings: Vec<RankingSnapshot>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything needed to append an entry, minus the id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryDraft {
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub weights: WeightVector,
    pub total_alternatives: usize,
    pub top_vendor: String,
    pub top_plan: String,
    pub top_score: f64,
    pub rankings: Vec<RankingSnapshot>,
}

impl HistoryDraft {
    /// Condenses a ranking (already ordered best first) into a draft.
    ///
    /// # Errors
    /// - `Validation` if the title is blank
    /// - `Analysis(EmptyDataset)` if the ranking is empty
    pub fn from_ranking(
        title: impl Into<String>,
        description: Option<String>,
        tags: Vec<String>,
        weights: WeightVector,
        ranking: &[RankedAlternative],
    ) -> Result<Self, HistoryError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }

        let top = ranking.first().ok_or(AnalysisError::EmptyDataset)?;

        Ok(Self {
            title,
            description: description.filter(|d| !d.trim().is_empty()),
            tags: tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            weights,
            total_alternatives: ranking.len(),
            top_vendor: top.alternative.vendor.clone(),
            top_plan: top.alternative.plan.clone(),
            top_score: round_score(top.score),
            rankings: ranking
                .iter()
                .take(SNAPSHOT_RANKINGS)
                .map(RankingSnapshot::from)
                .collect(),
        })
    }

    /// Stamps the draft with its id and time.
    pub fn into_entry(self, id: HistoryId, timestamp: Timestamp) -> HistoryEntry {
        HistoryEntry {
            id,
            timestamp,
            title: self.title,
            description: self.description,
            tags: self.tags,
            weights: self.weights,
            total_alternatives: self.total_alternatives,
            top_vendor: self.top_vendor,
            top_plan: self.top_plan,
            top_score: self.top_score,
            rankings: self.rankings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{TopsisEngine, WeightVector};
    use crate::domain::catalog::{AlternativeDraft, Catalog, CriterionLevels};

    fn ranking_of(count: i64) -> Vec<RankedAlternative> {
        let mut catalog = Catalog::new();
        for i in 0..count {
            let levels = CriterionLevels::from_raw(i % 5 + 1, 3, (i + 2) % 5 + 1, 2).unwrap();
            catalog.add(AlternativeDraft::new(format!("vendor-{}", i), "plan", levels).unwrap());
        }
        let result = TopsisEngine::rank(&catalog.decision_matrix(), &WeightVector::equal()).unwrap();
        RankedAlternative::assemble(catalog.alternatives(), &result)
    }

    #[test]
    fn round_score_keeps_four_decimals() {
        assert_eq!(round_score(0.123456), 0.1235);
        assert_eq!(round_score(1.0), 1.0);
        assert_eq!(round_score(0.00004), 0.0);
    }

    #[test]
    fn from_ranking_condenses_top_five() {
        let ranking = ranking_of(8);
        let draft = HistoryDraft::from_ranking(
            "Quarterly review",
            Some("baseline".to_string()),
            vec!["q1".to_string(), "  ".to_string()],
            WeightVector::equal(),
            &ranking,
        )
        .unwrap();

        assert_eq!(draft.total_alternatives, 8);
        assert_eq!(draft.rankings.len(), SNAPSHOT_RANKINGS);
        assert_eq!(draft.top_vendor, ranking[0].alternative.vendor);
        assert_eq!(draft.top_score, round_score(ranking[0].score));
        assert_eq!(draft.tags, vec!["q1".to_string()]);
        assert_eq!(draft.rankings[0].rank, 1);
    }

    #[test]
    fn from_ranking_keeps_all_rows_when_fewer_than_five() {
        let ranking = ranking_of(3);
        let draft =
            HistoryDraft::from_ranking("small", None, vec![], WeightVector::equal(), &ranking)
                .unwrap();
        assert_eq!(draft.rankings.len(), 3);
    }

    #[test]
    fn from_ranking_rejects_blank_title() {
        let ranking = ranking_of(3);
        let err = HistoryDraft::from_ranking("  ", None, vec![], WeightVector::equal(), &ranking)
            .unwrap_err();
        assert!(matches!(err, HistoryError::Validation(_)));
    }

    #[test]
    fn from_ranking_rejects_empty_ranking() {
        let err = HistoryDraft::from_ranking("t", None, vec![], WeightVector::equal(), &[])
            .unwrap_err();
        assert!(matches!(err, HistoryError::Analysis(AnalysisError::EmptyDataset)));
    }

    #[test]
    fn entry_reads_null_tags_as_empty() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{
                "id": 4,
                "timestamp": "2024-05-02T09:15:00.000001",
                "title": "legacy",
                "description": "",
                "tags": null,
                "weights": {"cpu": 0.4, "ram": 0.3, "disk": 0.2, "price": 0.1},
                "total_alternatives": 12,
                "top_vendor": "Linode",
                "top_score": 0.6931,
                "rankings": []
            }"#,
        )
        .unwrap();

        assert!(entry.tags.is_empty());
        assert_eq!(entry.top_plan, "");
        assert_eq!(entry.id, HistoryId::new(4));
    }

    #[test]
    fn snapshot_accepts_legacy_column_names() {
        let snapshot: RankingSnapshot = serde_json::from_str(
            r#"{"Rank": 1, "Vendor": "DigitalOcean", "Nama Paket (Plan)": "Basic", "Score": 0.71}"#,
        )
        .unwrap();

        assert_eq!(snapshot.rank, 1);
        assert_eq!(snapshot.vendor, "DigitalOcean");
        assert_eq!(snapshot.plan, "Basic");
    }
}

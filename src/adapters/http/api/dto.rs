//! Data Transfer Objects for the ranking API.
//!
//! These types define the HTTP request/response format and convert
//! between domain types and JSON representations.

use serde::{Deserialize, Serialize};

use crate::application::{CriterionSummary, RankingReport};
use crate::domain::analysis::{
    AnalysisError, CriterionRow, LevelBand, LevelCodec, RankedAlternative, WeightVector,
};
use crate::domain::catalog::{Alternative, AlternativeDraft, CatalogError, CriterionLevels};
use crate::domain::foundation::{Criterion, ErrorCode, Polarity};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add or replace an alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct AlternativeRequest {
    pub vendor: String,
    #[serde(default, alias = "nama_paket")]
    pub plan: String,
    pub cpu_level: i64,
    pub ram_level: i64,
    pub diskio_level: i64,
    pub price_level: i64,
}

impl AlternativeRequest {
    pub fn into_draft(self) -> Result<AlternativeDraft, CatalogError> {
        let levels = CriterionLevels::from_raw(
            self.cpu_level,
            self.ram_level,
            self.diskio_level,
            self.price_level,
        )?;
        Ok(AlternativeDraft::new(self.vendor, self.plan, levels)?)
    }
}

/// Criterion weights in column order.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightRequest {
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
    pub price: f64,
}

impl WeightRequest {
    pub fn into_weights(self) -> Result<WeightVector, AnalysisError> {
        WeightVector::new(self.cpu, self.ram, self.disk, self.price)
    }
}

/// Request to save a calculation to history.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveHistoryRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub weights: WeightRequest,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeResponse {
    pub id: u32,
    pub vendor: String,
    pub plan: String,
    pub cpu_level: u8,
    pub ram_level: u8,
    pub diskio_level: u8,
    pub price_level: u8,
}

impl From<Alternative> for AlternativeResponse {
    fn from(alternative: Alternative) -> Self {
        Self {
            id: alternative.id.value(),
            vendor: alternative.vendor,
            plan: alternative.plan,
            cpu_level: alternative.levels.cpu.value(),
            ram_level: alternative.levels.ram.value(),
            diskio_level: alternative.levels.disk_io.value(),
            price_level: alternative.levels.price.value(),
        }
    }
}

/// Acknowledgement for mutations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
            count: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// One ranked row with its representative values.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRowResponse {
    pub rank: u32,
    pub id: u32,
    pub vendor: String,
    pub plan: String,
    pub cpu_value: f64,
    pub ram_value: f64,
    pub disk_value: f64,
    pub price_value: f64,
    pub score: f64,
    pub distance_positive: f64,
    pub distance_negative: f64,
}

impl From<&RankedAlternative> for RankingRowResponse {
    fn from(ranked: &RankedAlternative) -> Self {
        Self {
            rank: ranked.rank,
            id: ranked.alternative.id.value(),
            vendor: ranked.alternative.vendor.clone(),
            plan: ranked.alternative.plan.clone(),
            cpu_value: ranked.values[Criterion::Cpu.index()],
            ram_value: ranked.values[Criterion::Ram.index()],
            disk_value: ranked.values[Criterion::DiskIo.index()],
            price_value: ranked.values[Criterion::Price.index()],
            score: ranked.score,
            distance_positive: ranked.distance_positive,
            distance_negative: ranked.distance_negative,
        }
    }
}

/// Result of POST /api/calculate.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub rankings: Vec<RankingRowResponse>,
    pub top_recommendation: Option<RankingRowResponse>,
    pub ideal_positive: CriterionRow,
    pub ideal_negative: CriterionRow,
    pub weights_sum_to_one: bool,
}

impl From<&RankingReport> for CalculateResponse {
    fn from(report: &RankingReport) -> Self {
        Self {
            rankings: report.ranking.iter().map(RankingRowResponse::from).collect(),
            top_recommendation: report.top().map(RankingRowResponse::from),
            ideal_positive: *report.ideal_positive(),
            ideal_negative: *report.ideal_negative(),
            weights_sum_to_one: report.weights_sum_to_one,
        }
    }
}

/// Result of POST /api/calculate-detail: every step in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationDetailResponse {
    pub weights: WeightVector,
    pub weights_sum_to_one: bool,
    pub criteria: Vec<CriterionSummary>,
    pub vendors: Vec<String>,
    pub decision: Vec<CriterionRow>,
    pub divisors: CriterionRow,
    pub normalized: Vec<CriterionRow>,
    pub weighted: Vec<CriterionRow>,
    pub ideal_positive: CriterionRow,
    pub ideal_negative: CriterionRow,
    pub distances_positive: Vec<f64>,
    pub distances_negative: Vec<f64>,
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

impl CalculationDetailResponse {
    /// `vendors` must be the catalog the report was computed from, in order.
    pub fn new(report: RankingReport, vendors: Vec<String>) -> Self {
        let detail = report.detail;
        Self {
            weights: report.weights,
            weights_sum_to_one: report.weights_sum_to_one,
            criteria: report.criteria,
            vendors,
            decision: detail.decision,
            divisors: detail.divisors,
            normalized: detail.normalized,
            weighted: detail.weighted,
            ideal_positive: detail.ideal_positive,
            ideal_negative: detail.ideal_negative,
            distances_positive: detail.distances_positive,
            distances_negative: detail.distances_negative,
            scores: detail.scores,
            ranks: detail.ranks,
        }
    }
}

/// Level guide for one criterion.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionLevelsResponse {
    pub criterion: Criterion,
    pub label: &'static str,
    pub unit: &'static str,
    pub polarity: Polarity,
    pub bands: Vec<LevelBand>,
}

impl From<Criterion> for CriterionLevelsResponse {
    fn from(criterion: Criterion) -> Self {
        Self {
            criterion,
            label: criterion.label(),
            unit: criterion.unit(),
            polarity: criterion.polarity(),
            bands: LevelCodec::bands(criterion).to_vec(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

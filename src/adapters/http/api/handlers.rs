//! HTTP handlers for the ranking API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AlternativeStore, CalculateRankingCommand, CalculateRankingHandler, HistoryStore,
    SaveCalculationCommand, SaveCalculationHandler,
};
use crate::domain::analysis::AnalysisError;
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{AlternativeId, Criterion, ErrorCode, HistoryId};
use crate::domain::history::HistoryError;

use super::dto::{
    AlternativeRequest, AlternativeResponse, CalculateResponse, CalculationDetailResponse,
    CriterionLevelsResponse, ErrorResponse, MessageResponse, SaveHistoryRequest, WeightRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApiHandlers {
    alternatives: Arc<AlternativeStore>,
    history: Arc<HistoryStore>,
    calculate_handler: Arc<CalculateRankingHandler>,
    save_handler: Arc<SaveCalculationHandler>,
}

impl ApiHandlers {
    pub fn new(alternatives: Arc<AlternativeStore>, history: Arc<HistoryStore>) -> Self {
        Self {
            calculate_handler: Arc::new(CalculateRankingHandler::new(alternatives.clone())),
            save_handler: Arc::new(SaveCalculationHandler::new(
                alternatives.clone(),
                history.clone(),
            )),
            alternatives,
            history,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/data - List alternatives
pub async fn list_alternatives(State(handlers): State<ApiHandlers>) -> Response {
    let rows: Vec<AlternativeResponse> = handlers
        .alternatives
        .list()
        .await
        .into_iter()
        .map(AlternativeResponse::from)
        .collect();
    (StatusCode::OK, Json(rows)).into_response()
}

/// POST /api/data - Add an alternative
pub async fn add_alternative(
    State(handlers): State<ApiHandlers>,
    Json(req): Json<AlternativeRequest>,
) -> Response {
    let draft = match req.into_draft() {
        Ok(draft) => draft,
        Err(e) => return handle_catalog_error(e),
    };

    match handlers.alternatives.add(draft).await {
        Ok(added) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("Alternative added").with_id(u64::from(added.id.value()))),
        )
            .into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// PUT /api/data/:id - Replace an alternative
pub async fn update_alternative(
    State(handlers): State<ApiHandlers>,
    Path(id): Path<String>,
    Json(req): Json<AlternativeRequest>,
) -> Response {
    let id = match id.parse::<AlternativeId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid alternative ID"),
    };
    let draft = match req.into_draft() {
        Ok(draft) => draft,
        Err(e) => return handle_catalog_error(e),
    };

    match handlers.alternatives.update(id, draft).await {
        Ok(updated) => (StatusCode::OK, Json(AlternativeResponse::from(updated))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// DELETE /api/data/:id - Remove an alternative (later ids shift down)
pub async fn delete_alternative(
    State(handlers): State<ApiHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<AlternativeId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid alternative ID"),
    };

    match handlers.alternatives.remove(id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse::new("Alternative deleted").with_id(u64::from(id.value()))),
        )
            .into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// POST /api/data/reload - Re-read the alternative table from storage
pub async fn reload_alternatives(State(handlers): State<ApiHandlers>) -> Response {
    match handlers.alternatives.reload().await {
        Ok(count) => (
            StatusCode::OK,
            Json(MessageResponse::new("Alternatives reloaded").with_count(count)),
        )
            .into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Calculation handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate - Rank the catalog
pub async fn calculate(
    State(handlers): State<ApiHandlers>,
    Json(req): Json<WeightRequest>,
) -> Response {
    let weights = match req.into_weights() {
        Ok(weights) => weights,
        Err(e) => return handle_analysis_error(e),
    };

    match handlers
        .calculate_handler
        .handle(CalculateRankingCommand { weights })
        .await
    {
        Ok(report) => (StatusCode::OK, Json(CalculateResponse::from(&report))).into_response(),
        Err(e) => handle_analysis_error(e),
    }
}

/// POST /api/calculate-detail - Rank the catalog and return every step
pub async fn calculate_detail(
    State(handlers): State<ApiHandlers>,
    Json(req): Json<WeightRequest>,
) -> Response {
    let weights = match req.into_weights() {
        Ok(weights) => weights,
        Err(e) => return handle_analysis_error(e),
    };

    match handlers
        .calculate_handler
        .handle(CalculateRankingCommand { weights })
        .await
    {
        Ok(report) => {
            // Report detail rows are in catalog order; the ranking is not.
            let mut rows: Vec<_> = report
                .ranking
                .iter()
                .map(|r| (r.alternative.id, r.alternative.vendor.clone()))
                .collect();
            rows.sort_by_key(|(id, _)| *id);
            let vendors = rows.into_iter().map(|(_, vendor)| vendor).collect();

            let response = CalculationDetailResponse::new(report, vendors);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/levels - Level guide for every criterion
pub async fn level_guide() -> Response {
    let guide: Vec<CriterionLevelsResponse> = Criterion::ALL
        .into_iter()
        .map(CriterionLevelsResponse::from)
        .collect();
    (StatusCode::OK, Json(guide)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// History handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/history - List saved calculations, newest first
pub async fn list_history(State(handlers): State<ApiHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.history.list().await)).into_response()
}

/// GET /api/history/:id - One saved calculation
pub async fn get_history(
    State(handlers): State<ApiHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<HistoryId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid history ID"),
    };

    match handlers.history.get(id).await {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => handle_history_error(e),
    }
}

/// POST /api/history - Rank the catalog and save the outcome
pub async fn save_history(
    State(handlers): State<ApiHandlers>,
    Json(req): Json<SaveHistoryRequest>,
) -> Response {
    let weights = match req.weights.into_weights() {
        Ok(weights) => weights,
        Err(e) => return handle_analysis_error(e),
    };
    let cmd = SaveCalculationCommand {
        title: req.title,
        description: req.description,
        tags: req.tags.unwrap_or_default(),
        weights,
    };

    match handlers.save_handler.handle(cmd).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("Calculation saved to history").with_id(entry.id.value())),
        )
            .into_response(),
        Err(e) => handle_history_error(e),
    }
}

/// DELETE /api/history/:id - Delete one saved calculation
pub async fn delete_history(
    State(handlers): State<ApiHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<HistoryId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid history ID"),
    };

    match handlers.history.remove(id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse::new("History entry deleted").with_id(id.value())),
        )
            .into_response(),
        Err(e) => handle_history_error(e),
    }
}

/// DELETE /api/history - Delete every saved calculation
pub async fn clear_history(State(handlers): State<ApiHandlers>) -> Response {
    match handlers.history.clear().await {
        Ok(count) => (
            StatusCode::OK,
            Json(MessageResponse::new("All history cleared").with_count(count)),
        )
            .into_response(),
        Err(e) => handle_history_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidLevel
        | ErrorCode::InvalidValue
        | ErrorCode::InvalidWeight
        | ErrorCode::DimensionMismatch => StatusCode::BAD_REQUEST,
        ErrorCode::EmptyDataset | ErrorCode::DegenerateInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::AlternativeNotFound | ErrorCode::HistoryEntryNotFound => StatusCode::NOT_FOUND,
        ErrorCode::StorageFailure | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(code: ErrorCode, message: String) -> Response {
    (status_for(code), Json(ErrorResponse::new(code, message))).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

fn handle_catalog_error(error: CatalogError) -> Response {
    error_response(error.code(), error.to_string())
}

fn handle_analysis_error(error: AnalysisError) -> Response {
    error_response(error.code(), error.to_string())
}

fn handle_history_error(error: HistoryError) -> Response {
    error_response(error.code(), error.to_string())
}

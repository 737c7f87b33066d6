//! HTTP adapter for the catalog, calculation and history endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AlternativeRequest, AlternativeResponse, CalculateResponse, CalculationDetailResponse,
    CriterionLevelsResponse, ErrorResponse, MessageResponse, RankingRowResponse,
    SaveHistoryRequest, WeightRequest,
};
pub use handlers::ApiHandlers;
pub use routes::api_routes;

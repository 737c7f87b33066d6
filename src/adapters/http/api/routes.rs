//! HTTP routes for the ranking API.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    add_alternative, calculate, calculate_detail, clear_history, delete_alternative,
    delete_history, get_history, level_guide, list_alternatives, list_history,
    reload_alternatives, save_history, update_alternative, ApiHandlers,
};

/// Creates the API router; mount it under `/api`.
pub fn api_routes(handlers: ApiHandlers) -> Router {
    Router::new()
        .route("/data", get(list_alternatives).post(add_alternative))
        .route("/data/reload", post(reload_alternatives))
        .route("/data/:id", put(update_alternative).delete(delete_alternative))
        .route("/calculate", post(calculate))
        .route("/calculate-detail", post(calculate_detail))
        .route("/levels", get(level_guide))
        .route(
            "/history",
            get(list_history).post(save_history).delete(clear_history),
        )
        .route("/history/:id", get(get_history).delete(delete_history))
        .with_state(handlers)
}

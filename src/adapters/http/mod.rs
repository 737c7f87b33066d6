//! HTTP adapters - REST API implementation.
//!
//! `app_router` is the bare router (health check plus `/api`);
//! `with_middleware` adds request tracing, CORS and the request timeout.

pub mod api;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::ServerConfig;

pub use api::{api_routes, ApiHandlers, MessageResponse};

/// Creates the application router without middleware.
pub fn app_router(handlers: ApiHandlers) -> Router {
    Router::new()
        .route("/", get(health))
        .nest("/api", api_routes(handlers))
}

/// Wraps a router in the tracing, CORS and timeout layers.
///
/// Without configured origins CORS is permissive (development setup).
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// GET / - Liveness message
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Cloud Ranker API is running"))
}

//! Route table for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the router with all endpoints and middleware.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/catalog", get(handlers::get_catalog))
        .route("/api/v1/quotes", post(handlers::create_quote))
        .route("/api/v1/inquiries", post(handlers::create_inquiry))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

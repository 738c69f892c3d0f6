//! # REST API
//!
//! REST endpoints using axum for the quote service.
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/catalog` - The pricing catalog
//! - `POST /api/v1/quotes` - Calculate (and optionally submit) a quote
//! - `POST /api/v1/inquiries` - Submit a contact inquiry
//!
//! # Usage
//!
//! ```ignore
//! use craft_quote::api::rest::{create_router, AppState};
//! use craft_quote::application::engine::EngineConfig;
//! use craft_quote::domain::catalog::Catalog;
//! use craft_quote::infrastructure::gateway::InMemoryGateway;
//! use std::sync::Arc;
//!
//! let state = AppState {
//!     catalog: Arc::new(Catalog::standard()?),
//!     gateway: Arc::new(InMemoryGateway::new()),
//!     engine_config: EngineConfig::default(),
//! };
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, ErrorResponse, HealthResponse, InquiryRequest, InquiryResponse, QuoteRequest,
    QuoteResponse,
};
pub use routes::create_router;

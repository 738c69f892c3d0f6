//! # REST Handlers
//!
//! Request/response types and handler functions for the quote API.
//!
//! Quote requests are stateless: each request carries the full selection,
//! which is replayed through a fresh engine against the shared catalog.
//! Unknown catalog ids are rejected with `422` rather than ignored, so a
//! stale client cannot silently receive a price for a different selection
//! than it asked for.

use crate::application::engine::{EngineConfig, QuoteEngine};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::catalog::{Catalog, DetailAttribute};
use crate::domain::entities::inquiry::ContactInquiry;
use crate::domain::entities::quote_record::QuoteRecord;
use crate::domain::errors::DomainError;
use crate::infrastructure::gateway::{GatewayError, SubmissionGateway, SubmissionReceipt};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::value_objects::{AddonId, OptionId, PackageId, TermId};

/// Shared state for all REST handlers.
#[derive(Clone)]
pub struct AppState {
    /// The pricing catalog.
    pub catalog: Arc<Catalog>,
    /// The submission gateway.
    pub gateway: Arc<dyn SubmissionGateway>,
    /// Engine behaviour configuration.
    pub engine_config: EngineConfig,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// API error with HTTP status mapping.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, error = %self.message, "request rejected");
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Domain(
                DomainError::UnknownCatalogEntry { .. } | DomainError::IncompleteSelection(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            ApplicationError::Domain(_) | ApplicationError::Inquiry(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Gateway(GatewayError::Transport(_)) => StatusCode::BAD_GATEWAY,
            ApplicationError::Gateway(GatewayError::Configuration(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApplicationError::Gateway(_)
            | ApplicationError::Catalog(_)
            | ApplicationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

/// Request body for quote calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuoteRequest {
    /// Base package id.
    pub base: PackageId,
    /// Selected add-on ids.
    #[serde(default)]
    pub addons: Vec<AddonId>,
    /// Selected detail options, keyed by attribute.
    #[serde(default)]
    pub details: BTreeMap<DetailAttribute, OptionId>,
    /// Contract term id.
    pub contract: TermId,
    /// When true, the quote is also delivered through the gateway.
    #[serde(default)]
    pub submit: bool,
}

/// Response body for a calculated quote.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// The generated quote.
    pub quote: QuoteRecord,
    /// Delivery receipt, present when submission was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
}

/// Request body for a contact inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InquiryRequest {
    /// The inquiry payload.
    #[serde(flatten)]
    pub inquiry: ContactInquiry,
}

/// Response body for an accepted inquiry.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Confirmation message for the visitor.
    pub message: String,
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/v1/catalog`
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// `POST /api/v1/quotes`
///
/// Replays the submitted selection through a fresh engine and returns the
/// generated quote. With `submit = true` the quote is also delivered
/// through the gateway and the receipt is included.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = replay_selection(&state, &request)?;
    info!(quote = %quote.id(), total = %quote.prices().total, "quote calculated");

    let receipt = if request.submit {
        let receipt = state
            .gateway
            .submit_quote(&quote)
            .await
            .map_err(ApplicationError::from)?;
        Some(receipt)
    } else {
        None
    };

    Ok(Json(QuoteResponse { quote, receipt }))
}

/// `POST /api/v1/inquiries`
///
/// Validates the inquiry and delivers it through the gateway.
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>, ApiError> {
    request.inquiry.validate().map_err(ApplicationError::from)?;
    let receipt = state
        .gateway
        .submit_inquiry(&request.inquiry)
        .await
        .map_err(ApplicationError::from)?;
    info!(company = %request.inquiry.company, "inquiry submitted");
    Ok(Json(InquiryResponse {
        success: true,
        message: receipt.message,
    }))
}

fn replay_selection(state: &AppState, request: &QuoteRequest) -> ApplicationResult<QuoteRecord> {
    let mut engine = QuoteEngine::with_config(Arc::clone(&state.catalog), state.engine_config);
    engine.select_base(&request.base)?;
    for addon in &request.addons {
        engine.toggle_addon(addon, true)?;
    }
    for (attribute, option) in &request.details {
        engine.set_detail(*attribute, option)?;
    }
    engine.select_contract(&request.contract)?;
    Ok(engine.generate_quote()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;
    use crate::infrastructure::gateway::InMemoryGateway;

    fn state() -> (AppState, Arc<InMemoryGateway>) {
        let gateway = Arc::new(InMemoryGateway::new());
        let state = AppState {
            catalog: Arc::new(Catalog::standard().unwrap()),
            gateway: Arc::clone(&gateway) as Arc<dyn SubmissionGateway>,
            engine_config: EngineConfig::default(),
        };
        (state, gateway)
    }

    fn quote_request() -> QuoteRequest {
        QuoteRequest {
            base: PackageId::new("professional-website"),
            addons: vec![AddonId::new("ai-integration")],
            details: BTreeMap::from([(DetailAttribute::CompanySize, OptionId::new("medium"))]),
            contract: TermId::new("annual"),
            submit: false,
        }
    }

    #[tokio::test]
    async fn catalog_endpoint_serializes_the_full_catalog() {
        let (state, _) = state();
        let Json(catalog) = get_catalog(State(state)).await;

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["base-packages"].as_array().unwrap().len(), 3);
        assert_eq!(json["addons"].as_array().unwrap().len(), 6);
        assert_eq!(json["contract-terms"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn application_errors_map_to_statuses() {
        let unknown: ApiError =
            ApplicationError::from(DomainError::unknown_entry("add-on", "time-travel")).into();
        assert_eq!(unknown.status, StatusCode::UNPROCESSABLE_ENTITY);

        let incomplete: ApiError =
            ApplicationError::from(DomainError::IncompleteSelection("no base package selected"))
                .into();
        assert_eq!(incomplete.status, StatusCode::UNPROCESSABLE_ENTITY);

        let transport: ApiError =
            ApplicationError::from(GatewayError::transport("relay down")).into();
        assert_eq!(transport.status, StatusCode::BAD_GATEWAY);

        let unconfigured: ApiError =
            ApplicationError::from(GatewayError::configuration("no smtp")).into();
        assert_eq!(unconfigured.status, StatusCode::SERVICE_UNAVAILABLE);

        let internal: ApiError = ApplicationError::internal("snapshot desync").into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn quote_endpoint_prices_the_selection() {
        let (state, gateway) = state();
        let Json(response) = create_quote(State(state), Json(quote_request()))
            .await
            .unwrap();

        assert_eq!(response.quote.prices().subtotal, Money::from_units(988));
        assert_eq!(response.quote.prices().total, Money::from_units(889));
        assert!(response.receipt.is_none());
        assert!(gateway.quotes().is_empty());
    }

    #[tokio::test]
    async fn quote_endpoint_submits_when_asked() {
        let (state, gateway) = state();
        let mut request = quote_request();
        request.submit = true;

        let Json(response) = create_quote(State(state), Json(request)).await.unwrap();
        assert!(response.receipt.is_some());
        assert_eq!(gateway.quotes().len(), 1);
    }

    #[tokio::test]
    async fn unknown_id_maps_to_422() {
        let (state, _) = state();
        let mut request = quote_request();
        request.base = PackageId::new("platinum-website");

        let err = create_quote(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("platinum-website"));
    }

    #[tokio::test]
    async fn invalid_inquiry_maps_to_400() {
        let (state, gateway) = state();
        let request = InquiryRequest {
            inquiry: ContactInquiry {
                name: "Lena Kraus".to_string(),
                company: "Kraus Climate".to_string(),
                email: "not-an-email".to_string(),
                phone: None,
                industry: "hvac".to_string(),
                website_type: None,
                message: None,
                quote: None,
            },
        };

        let err = create_inquiry(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(gateway.inquiries().is_empty());
    }

    #[tokio::test]
    async fn gateway_outage_maps_to_502() {
        let (state, gateway) = state();
        gateway.inject_failure(GatewayError::transport("relay down"));
        let mut request = quote_request();
        request.submit = true;

        let err = create_quote(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn valid_inquiry_returns_confirmation() {
        let (state, gateway) = state();
        let request = InquiryRequest {
            inquiry: ContactInquiry {
                name: "Lena Kraus".to_string(),
                company: "Kraus Climate".to_string(),
                email: "lena@kraus-climate.example".to_string(),
                phone: Some("+49 151 2345678".to_string()),
                industry: "hvac".to_string(),
                website_type: Some("new-website".to_string()),
                message: Some("Interested in the premium tier.".to_string()),
                quote: None,
            },
        };

        let Json(response) = create_inquiry(State(state), Json(request)).await.unwrap();
        assert!(response.success);
        assert_eq!(gateway.inquiries().len(), 1);
    }
}

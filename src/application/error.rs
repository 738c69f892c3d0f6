//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur while driving the quote
//! engine or handling a submission, wrapping domain-level rejections and
//! infrastructure failures behind a single surface.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)       - Selection/pricing rule violations
//! ├── Catalog(CatalogError)     - Catalog assembly or load failures
//! ├── Inquiry(InquiryValidationError) - Contact form validation failures
//! ├── Gateway(GatewayError)     - Submission transport failures
//! └── Internal(String)          - Unexpected internal failures
//! ```
//!
//! # Examples
//!
//! ```
//! use craft_quote::application::error::ApplicationError;
//! use craft_quote::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::IncompleteSelection("no base package selected").into();
//! assert!(err.is_rejection());
//! ```

use crate::domain::catalog::CatalogError;
use crate::domain::entities::inquiry::InquiryValidationError;
use crate::domain::errors::DomainError;
use crate::infrastructure::gateway::GatewayError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps domain and infrastructure errors with application-specific context.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from selection or pricing rules.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Catalog assembly or load failure.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Contact inquiry failed validation.
    #[error("inquiry validation: {0}")]
    Inquiry(#[from] InquiryValidationError),

    /// Submission gateway failure.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the error is a client-side rejection rather than a
    /// server-side failure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::Inquiry(_))
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Gateway(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

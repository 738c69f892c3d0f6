//! # Submission Gateway
//!
//! Port definition for delivering quotes and inquiries to the business.
//!
//! The [`SubmissionGateway`] trait is the seam between the quote flow and
//! whatever transport actually carries the submission. The production
//! adapter is [`smtp::SmtpGateway`]; tests use [`in_memory::InMemoryGateway`].
//!
//! # Examples
//!
//! ```ignore
//! use craft_quote::infrastructure::gateway::{SubmissionGateway, GatewayResult};
//!
//! struct MyGateway { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl SubmissionGateway for MyGateway {
//!     // ... implement required methods
//! }
//! ```

pub mod in_memory;
pub mod smtp;

use crate::domain::entities::inquiry::ContactInquiry;
use crate::domain::entities::quote_record::QuoteRecord;
use crate::domain::value_objects::Timestamp;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use in_memory::InMemoryGateway;
pub use smtp::SmtpGateway;

/// Error type for submission gateway operations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Transport-level failure while delivering the submission.
    #[error("gateway transport error: {0}")]
    Transport(String),

    /// Gateway is reachable but refused the submission.
    #[error("gateway rejected submission: {0}")]
    Rejected(String),

    /// Gateway is not configured for delivery.
    #[error("gateway not configured: {0}")]
    Configuration(String),

    /// Submission payload could not be rendered.
    #[error("gateway formatting error: {0}")]
    Formatting(String),
}

impl GatewayError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the submission may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Human-readable confirmation message.
    pub message: String,
    /// When the gateway accepted the submission.
    pub submitted_at: Timestamp,
}

impl SubmissionReceipt {
    /// Creates a receipt timestamped now.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            submitted_at: Timestamp::now(),
        }
    }
}

/// Port for delivering completed quotes and contact inquiries.
///
/// Implementations must not mutate the submitted records; callers pass
/// validated, immutable data and receive a receipt or an error.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Delivers a generated quote.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when delivery fails; the quote itself is
    /// unaffected and may be resubmitted.
    async fn submit_quote(&self, quote: &QuoteRecord) -> GatewayResult<SubmissionReceipt>;

    /// Delivers a contact inquiry, optionally carrying a quote.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when delivery fails.
    async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> GatewayResult<SubmissionReceipt>;
}

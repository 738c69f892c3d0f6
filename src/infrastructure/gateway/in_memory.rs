//! In-memory submission gateway for tests and local development.

use crate::domain::entities::inquiry::ContactInquiry;
use crate::domain::entities::quote_record::QuoteRecord;
use crate::infrastructure::gateway::{
    GatewayError, GatewayResult, SubmissionGateway, SubmissionReceipt,
};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

/// Recording gateway that accepts every submission.
///
/// Submissions are kept in memory for later inspection. A failure can be
/// injected to exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    quotes: Mutex<Vec<QuoteRecord>>,
    inquiries: Mutex<Vec<ContactInquiry>>,
    failure: Mutex<Option<GatewayError>>,
}

impl InMemoryGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent submission fail with the given error.
    pub fn inject_failure(&self, error: GatewayError) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(error);
        }
    }

    /// Clears any injected failure.
    pub fn clear_failure(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    /// Returns the recorded quote submissions.
    #[must_use]
    pub fn quotes(&self) -> Vec<QuoteRecord> {
        self.quotes.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Returns the recorded inquiry submissions.
    #[must_use]
    pub fn inquiries(&self) -> Vec<ContactInquiry> {
        self.inquiries.lock().map(|i| i.clone()).unwrap_or_default()
    }

    fn check_failure(&self) -> GatewayResult<()> {
        match self.failure.lock() {
            Ok(failure) => match failure.as_ref() {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            },
            Err(_) => Err(GatewayError::transport("gateway state poisoned")),
        }
    }
}

#[async_trait]
impl SubmissionGateway for InMemoryGateway {
    async fn submit_quote(&self, quote: &QuoteRecord) -> GatewayResult<SubmissionReceipt> {
        self.check_failure()?;
        if let Ok(mut quotes) = self.quotes.lock() {
            quotes.push(quote.clone());
        }
        info!(quote = %quote.id(), "quote recorded in memory");
        Ok(SubmissionReceipt::new("quote recorded"))
    }

    async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> GatewayResult<SubmissionReceipt> {
        self.check_failure()?;
        if let Ok(mut inquiries) = self.inquiries.lock() {
            inquiries.push(inquiry.clone());
        }
        info!(company = %inquiry.company, "inquiry recorded in memory");
        Ok(SubmissionReceipt::new("inquiry recorded"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Mia Berg".to_string(),
            company: "Berg Plumbing".to_string(),
            email: "mia@berg-plumbing.example".to_string(),
            phone: None,
            industry: "plumbing".to_string(),
            website_type: None,
            message: Some("Please call back.".to_string()),
            quote: None,
        }
    }

    #[tokio::test]
    async fn records_submissions() {
        let gateway = InMemoryGateway::new();
        gateway.submit_inquiry(&inquiry()).await.unwrap();
        assert_eq!(gateway.inquiries().len(), 1);
        assert_eq!(gateway.inquiries()[0].company, "Berg Plumbing");
    }

    #[tokio::test]
    async fn injected_failure_blocks_submissions() {
        let gateway = InMemoryGateway::new();
        gateway.inject_failure(GatewayError::transport("relay down"));

        let err = gateway.submit_inquiry(&inquiry()).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(gateway.inquiries().is_empty());

        gateway.clear_failure();
        assert!(gateway.submit_inquiry(&inquiry()).await.is_ok());
    }
}

//! # SMTP Gateway
//!
//! Delivers quotes and inquiries as plain-text notification emails.
//!
//! The adapter renders a submission into a readable summary for the sales
//! inbox and sends it over an authenticated SMTP relay. Rendering is split
//! into pure functions so it can be tested without a transport.

use crate::domain::entities::inquiry::ContactInquiry;
use crate::domain::entities::quote_record::QuoteRecord;
use crate::infrastructure::gateway::{
    GatewayError, GatewayResult, SubmissionGateway, SubmissionReceipt,
};
use crate::infrastructure::settings::SmtpSettings;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

/// Confirmation message returned for accepted submissions.
const CONFIRMATION: &str =
    "Thank you for your inquiry! We will get back to you within 48 hours.";

/// SMTP-backed submission gateway.
pub struct SmtpGateway {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    recipient: String,
}

impl SmtpGateway {
    /// Creates a gateway from SMTP settings.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when the relay host or the
    /// sender/recipient addresses are invalid.
    pub fn new(settings: &SmtpSettings) -> GatewayResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| GatewayError::configuration(format!("invalid relay host: {e}")))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .port(settings.port)
            .build();

        Ok(Self {
            transport,
            sender: settings.sender.clone(),
            recipient: settings.recipient.clone(),
        })
    }

    async fn send(&self, subject: String, body: String) -> GatewayResult<SubmissionReceipt> {
        let message = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|e| GatewayError::configuration(format!("invalid sender: {e}")))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|e| GatewayError::configuration(format!("invalid recipient: {e}")))?)
            .subject(&subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| GatewayError::Formatting(e.to_string()))?;

        match self.transport.send(message).await {
            Ok(_) => {
                info!(%subject, "submission delivered");
                Ok(SubmissionReceipt::new(CONFIRMATION))
            }
            Err(e) => {
                error!(%subject, error = %e, "submission delivery failed");
                Err(GatewayError::transport(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl SubmissionGateway for SmtpGateway {
    async fn submit_quote(&self, quote: &QuoteRecord) -> GatewayResult<SubmissionReceipt> {
        let subject = format!("New quote request ({})", quote.base().id);
        self.send(subject, format_quote(quote)).await
    }

    async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> GatewayResult<SubmissionReceipt> {
        let subject = format!("New website inquiry from {}", inquiry.company);
        self.send(subject, format_inquiry(inquiry)).await
    }
}

/// Renders a quote record as a plain-text summary.
#[must_use]
pub fn format_quote(quote: &QuoteRecord) -> String {
    let mut body = String::from("SELECTED PACKAGE:\n");
    body.push_str(&format!(
        "- {} ({}/month)\n",
        quote.base().id,
        quote.base().monthly_price
    ));

    body.push_str("\nADD-ON MODULES:\n");
    if quote.addons().is_empty() {
        body.push_str("- none selected\n");
    } else {
        for addon in quote.addons() {
            body.push_str(&format!("- {} (+{}/month)\n", addon.id, addon.monthly_price));
        }
    }

    if !quote.details().is_empty() {
        body.push_str("\nPROJECT DETAILS:\n");
        for (attribute, option) in quote.details() {
            body.push_str(&format!("- {attribute}: {option}\n"));
        }
    }

    body.push_str(&format!(
        "\nCONTRACT:\n- term: {} ({} discount)\n",
        quote.contract().id,
        quote.contract().discount
    ));

    let prices = quote.prices();
    body.push_str(&format!(
        "\nPRICE OVERVIEW:\n\
         - base package: {}/month\n\
         - add-on modules: {}/month\n\
         - support: {}/month\n\
         - subtotal: {}/month\n",
        prices.base, prices.addons, prices.support, prices.subtotal
    ));
    if !prices.discount.is_zero() {
        body.push_str(&format!("- discount: -{}/month\n", prices.discount));
    }
    body.push_str(&format!(
        "- monthly total: {}\n- one-time setup fee: {}\n",
        prices.total, prices.setup
    ));

    body.push_str(&format!(
        "\nQuote id: {}\nConfigured at: {}\n",
        quote.id(),
        quote.created_at().to_rfc3339()
    ));
    body
}

/// Renders a contact inquiry as a plain-text summary.
#[must_use]
pub fn format_inquiry(inquiry: &ContactInquiry) -> String {
    let mut body = String::from("A new website inquiry has arrived.\n\nCONTACT DATA:\n");
    body.push_str(&format!("- name: {}\n", inquiry.name));
    body.push_str(&format!("- company: {}\n", inquiry.company));
    body.push_str(&format!("- email: {}\n", inquiry.email));
    body.push_str(&format!(
        "- phone: {}\n",
        inquiry.phone.as_deref().unwrap_or("not provided")
    ));
    body.push_str(&format!("- industry: {}\n", inquiry.industry));
    body.push_str(&format!(
        "- requested website: {}\n",
        inquiry.website_type.as_deref().unwrap_or("not specified")
    ));

    body.push_str(&format!(
        "\nMESSAGE:\n{}\n",
        inquiry.message.as_deref().unwrap_or("no message left")
    ));

    match &inquiry.quote {
        Some(quote) => {
            body.push_str("\nCONFIGURED QUOTE:\n\n");
            body.push_str(&format_quote(quote));
        }
        None => body.push_str("\nNo quote configuration attached.\n"),
    }
    body
}

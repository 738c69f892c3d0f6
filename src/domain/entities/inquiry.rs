//! # Contact Inquiry
//!
//! The contact payload relayed through the submission gateway.
//!
//! An inquiry bundles the visitor's contact fields with an optional
//! [`QuoteRecord`] produced by the configurator. Validation mirrors the
//! published form rules: name, company, email and industry are required,
//! the email must have a plausible shape, a phone number (when given) must
//! look like one, and the company name needs at least two characters.

use crate::domain::entities::quote_record::QuoteRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").ok());

/// Minimum length of a company name.
const MIN_COMPANY_LEN: usize = 2;

/// Minimum length of a phone number, when one is given.
const MIN_PHONE_LEN: usize = 10;

/// Error type for inquiry validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryValidationError {
    /// A required field is empty or missing.
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// The email address has no plausible shape.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// The phone number has no plausible shape.
    #[error("invalid phone number: '{0}'")]
    InvalidPhone(String),

    /// The company name is too short.
    #[error("company name must be at least {MIN_COMPANY_LEN} characters")]
    CompanyTooShort,
}

/// A contact inquiry, optionally carrying a finalized quote.
///
/// Field names follow the public form on the wire (`website-type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContactInquiry {
    /// Contact person.
    pub name: String,
    /// Company name, at least two characters.
    pub company: String,
    /// Reply address.
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Trade / industry of the business.
    pub industry: String,
    /// Kind of website the visitor is after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    /// Free-text message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Finalized configurator quote, when one was generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteRecord>,
}

impl ContactInquiry {
    /// Validates the required fields and field shapes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InquiryValidationError`] encountered, checking
    /// required fields before shapes.
    pub fn validate(&self) -> Result<(), InquiryValidationError> {
        require("name", &self.name)?;
        require("company", &self.company)?;
        require("email", &self.email)?;
        require("industry", &self.industry)?;

        if self.company.trim().chars().count() < MIN_COMPANY_LEN {
            return Err(InquiryValidationError::CompanyTooShort);
        }

        let email = self.email.trim();
        let email_ok = EMAIL_SHAPE
            .as_ref()
            .is_some_and(|re| re.is_match(email));
        if !email_ok {
            return Err(InquiryValidationError::InvalidEmail(email.to_owned()));
        }

        if let Some(phone) = self.phone.as_deref() {
            let phone = phone.trim();
            if !phone.is_empty() {
                let shape_ok = PHONE_SHAPE
                    .as_ref()
                    .is_some_and(|re| re.is_match(phone));
                if !shape_ok || phone.chars().count() < MIN_PHONE_LEN {
                    return Err(InquiryValidationError::InvalidPhone(phone.to_owned()));
                }
            }
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), InquiryValidationError> {
    if value.trim().is_empty() {
        return Err(InquiryValidationError::MissingField(field));
    }
    Ok(())
}

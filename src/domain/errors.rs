//! # Domain Errors
//!
//! Error types for business rule violations.
//!
//! Every engine operation that can be rejected reports one of these
//! variants. Rejections are local and non-fatal: the selection state is
//! left unchanged and the caller decides how to surface the failure.
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::errors::DomainError;
//!
//! let err = DomainError::unknown_entry("add-on", "no-such-addon");
//! assert!(err.to_string().contains("no-such-addon"));
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
///
/// All variants represent rejected operations, never process-level
/// failures. The engine never panics on any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A referenced id is absent from the catalog.
    ///
    /// The triggering operation leaves all selection state unchanged.
    #[error("unknown {kind}: '{id}'")]
    UnknownCatalogEntry {
        /// The kind of catalog entry that was looked up.
        kind: &'static str,
        /// The id that failed to resolve.
        id: String,
    },

    /// `generate_quote` was called before both mandatory selections were made.
    #[error("incomplete selection: {0}")]
    IncompleteSelection(&'static str),

    /// An attempt to advance past an incomplete step or leave the step range.
    #[error("invalid step transition: {0}")]
    InvalidStepTransition(String),

    /// A currency amount failed validation or checked arithmetic.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A rate or surcharge was outside its permitted range.
    #[error("invalid rate: {0}")]
    InvalidRate(String),
}

impl DomainError {
    /// Creates an [`UnknownCatalogEntry`](Self::UnknownCatalogEntry) error.
    #[must_use]
    pub fn unknown_entry(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownCatalogEntry {
            kind,
            id: id.into(),
        }
    }

    /// Creates an [`InvalidStepTransition`](Self::InvalidStepTransition) error.
    #[must_use]
    pub fn invalid_transition(reason: impl Into<String>) -> Self {
        Self::InvalidStepTransition(reason.into())
    }

    /// Creates an [`InvalidAmount`](Self::InvalidAmount) error.
    #[must_use]
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount(reason.into())
    }

    /// Creates an [`InvalidRate`](Self::InvalidRate) error.
    #[must_use]
    pub fn invalid_rate(reason: impl Into<String>) -> Self {
        Self::InvalidRate(reason.into())
    }

    /// Returns true if this is an unknown-catalog-entry error.
    #[must_use]
    pub fn is_unknown_entry(&self) -> bool {
        matches!(self, Self::UnknownCatalogEntry { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

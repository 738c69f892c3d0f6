//! # Identifier Types
//!
//! Newtype identifiers for catalog entries and quotes.
//!
//! Catalog ids are human-readable slugs supplied by the catalog author
//! (for example `professional-website` or `ai-integration`); [`QuoteId`]
//! is a generated UUID identifying one finalized quote record.
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::value_objects::{AddonId, QuoteId};
//!
//! let id = AddonId::new("booking-system");
//! assert_eq!(id.as_str(), "booking-system");
//!
//! let quote_id = QuoteId::new_v4();
//! assert_ne!(quote_id, QuoteId::new_v4());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! slug_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new id from a slug.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

slug_id! {
    /// Identifier of a base package.
    PackageId
}

slug_id! {
    /// Identifier of an add-on module.
    AddonId
}

slug_id! {
    /// Identifier of a detail option within an attribute group.
    OptionId
}

slug_id! {
    /// Identifier of a contract term.
    TermId
}

/// Unique identifier of a finalized quote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(Uuid);

impl QuoteId {
    /// Generates a new random quote id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for QuoteId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

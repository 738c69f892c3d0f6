//! # Quote Record
//!
//! The immutable snapshot of a completed configuration.
//!
//! A [`QuoteRecord`] is a one-way copy: once generated it is decoupled from
//! further mutation of the live selection state, and it is the sole artifact
//! handed to the submission gateway.
//!
//! # Examples
//!
//! ```
//! use craft_quote::application::engine::QuoteEngine;
//! use craft_quote::domain::catalog::Catalog;
//! use craft_quote::domain::value_objects::{PackageId, TermId};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::standard().unwrap());
//! let mut engine = QuoteEngine::new(catalog);
//! engine.select_base(&PackageId::new("basic-website")).unwrap();
//! engine.select_contract(&TermId::new("monthly")).unwrap();
//!
//! let record = engine.generate_quote().unwrap();
//! assert_eq!(record.base().id.as_str(), "basic-website");
//! ```

use crate::domain::entities::selection::Selection;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::catalog::DetailAttribute;
use crate::domain::services::pricing::PricingSnapshot;
use crate::domain::value_objects::{
    AddonId, DiscountRate, Money, OptionId, PackageId, QuoteId, TermId, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The chosen base package with its resolved prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuotedPackage {
    /// Catalog id of the package.
    pub id: PackageId,
    /// Resolved monthly price at quote time.
    pub monthly_price: Money,
    /// Resolved setup fee at quote time (before modifier scaling).
    pub setup_fee: Money,
}

/// One chosen add-on with its resolved price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuotedAddon {
    /// Catalog id of the add-on.
    pub id: AddonId,
    /// Resolved monthly price at quote time.
    pub monthly_price: Money,
}

/// The chosen contract term with its resolved discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuotedContract {
    /// Catalog id of the term.
    pub id: TermId,
    /// Resolved discount rate at quote time.
    pub discount: DiscountRate,
}

/// Immutable snapshot of a completed configuration.
///
/// # Invariants
///
/// - Only constructible when both a base package and a contract term are
///   selected (the minimum viable configuration).
/// - Never mutated after construction; later selection changes produce new
///   records instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuoteRecord {
    id: QuoteId,
    base: QuotedPackage,
    addons: Vec<QuotedAddon>,
    details: BTreeMap<DetailAttribute, OptionId>,
    contract: QuotedContract,
    prices: PricingSnapshot,
    created_at: Timestamp,
}

impl QuoteRecord {
    /// Builds a record from a selection and its current pricing snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IncompleteSelection`] when the base package or
    /// the contract term is missing.
    pub fn from_selection(
        selection: &Selection,
        prices: PricingSnapshot,
    ) -> DomainResult<Self> {
        let base = selection
            .base()
            .ok_or(DomainError::IncompleteSelection("no base package selected"))?;
        let contract = selection
            .contract()
            .ok_or(DomainError::IncompleteSelection("no contract term selected"))?;

        let addons = selection
            .addons()
            .values()
            .map(|a| QuotedAddon {
                id: a.id.clone(),
                monthly_price: a.monthly_price,
            })
            .collect();

        let details = selection
            .details()
            .iter()
            .map(|(attribute, option)| (*attribute, option.id.clone()))
            .collect();

        Ok(Self {
            id: QuoteId::new_v4(),
            base: QuotedPackage {
                id: base.id.clone(),
                monthly_price: base.monthly_price,
                setup_fee: base.setup_fee,
            },
            addons,
            details,
            contract: QuotedContract {
                id: contract.id.clone(),
                discount: contract.discount,
            },
            prices,
            created_at: Timestamp::now(),
        })
    }

    /// Returns the quote id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuoteId {
        self.id
    }

    /// Returns the chosen base package.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &QuotedPackage {
        &self.base
    }

    /// Returns the chosen add-ons.
    #[inline]
    #[must_use]
    pub fn addons(&self) -> &[QuotedAddon] {
        &self.addons
    }

    /// Returns the detail selections, attribute to option id.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &BTreeMap<DetailAttribute, OptionId> {
        &self.details
    }

    /// Returns the chosen contract term.
    #[inline]
    #[must_use]
    pub fn contract(&self) -> &QuotedContract {
        &self.contract
    }

    /// Returns the full pricing snapshot at quote time.
    #[inline]
    #[must_use]
    pub fn prices(&self) -> &PricingSnapshot {
        &self.prices
    }

    /// Returns when the record was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({}: {} + {} add-ons, total {}/month)",
            self.id,
            self.base.id,
            self.addons.len(),
            self.prices.total
        )
    }
}

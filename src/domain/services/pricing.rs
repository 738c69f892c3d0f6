//! # Pricing Service
//!
//! Pure derivation of the pricing snapshot from a selection.
//!
//! [`compute_snapshot`] is a pure function of the selection state; it owns
//! the whole pricing formula so the engine can recompute eagerly after every
//! mutation and callers can unit-test prices with no engine (and no
//! rendering surface) involved.
//!
//! # Formula
//!
//! ```text
//! modifier = Π (1 + surcharge)        over surcharge-bearing details
//! subtotal = round((base + addons + support) × modifier)
//! discount = round(subtotal × contract.discount)
//! total    = subtotal − discount
//! setup    = round(base.setup_fee × modifier)
//! ```
//!
//! Each derived field is rounded exactly once.

use crate::domain::entities::selection::Selection;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Money, RoundingMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived pricing figures for one selection state.
///
/// Recomputed on every mutation, never independently mutated.
///
/// # Invariants
///
/// - `modifier >= 1` (surcharges are never discounts)
/// - `0 <= discount <= subtotal`
/// - `total == subtotal - discount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PricingSnapshot {
    /// Monthly price of the selected base package, zero when unset.
    pub base: Money,
    /// Sum of selected add-on prices.
    pub addons: Money,
    /// Sum of flat-priced detail selections (support level).
    pub support: Money,
    /// Combined multiplicative price modifier.
    pub modifier: Decimal,
    /// `round((base + addons + support) × modifier)`.
    pub subtotal: Money,
    /// `round(subtotal × discount rate)`, zero without a contract.
    pub discount: Money,
    /// `subtotal − discount`.
    pub total: Money,
    /// `round(setup fee × modifier)`, zero without a base package.
    pub setup: Money,
}

impl PricingSnapshot {
    /// The snapshot of an empty selection.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            base: Money::zero(),
            addons: Money::zero(),
            support: Money::zero(),
            modifier: Decimal::ONE,
            subtotal: Money::zero(),
            discount: Money::zero(),
            total: Money::zero(),
            setup: Money::zero(),
        }
    }
}

impl Default for PricingSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for PricingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {} (subtotal {}, discount {}, setup {})",
            self.total, self.subtotal, self.discount, self.setup
        )
    }
}

/// One `(label, price)` pair for the summary display.
///
/// Contract terms carry no price of their own; their line shows the label
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LineItem {
    /// Display label of the selected entry.
    pub label: String,
    /// Monthly price, absent for the contract-term line.
    pub price: Option<Money>,
}

/// Computes the pricing snapshot for a selection.
///
/// Pure: same selection and rounding mode always produce the same snapshot.
///
/// # Errors
///
/// Returns [`DomainError::InvalidAmount`](crate::domain::errors::DomainError::InvalidAmount)
/// on decimal overflow, which validated catalogs cannot trigger in practice.
pub fn compute_snapshot(
    selection: &Selection,
    rounding: RoundingMode,
) -> DomainResult<PricingSnapshot> {
    let base = selection
        .base()
        .map_or(Money::zero(), |p| p.monthly_price);

    let mut addons = Money::zero();
    for addon in selection.addons().values() {
        addons = addons.checked_add(addon.monthly_price)?;
    }

    let mut support = Money::zero();
    let mut modifier = Decimal::ONE;
    for option in selection.details().values() {
        support = support.checked_add(option.pricing.flat_price())?;
        modifier *= option.pricing.surcharge().factor();
    }

    let gross = base.checked_add(addons)?.checked_add(support)?;
    let subtotal = gross.scaled(modifier, rounding)?;

    let discount = match selection.contract() {
        Some(term) => subtotal.scaled(term.discount.get(), rounding)?,
        None => Money::zero(),
    };
    let total = subtotal.checked_sub(discount)?;

    let setup = selection
        .base()
        .map_or(Ok(Money::zero()), |p| p.setup_fee.scaled(modifier, rounding))?;

    Ok(PricingSnapshot {
        base,
        addons,
        support,
        modifier,
        subtotal,
        discount,
        total,
        setup,
    })
}

/// Produces the `(label, price)` summary list for the current selection.
///
/// Order: base package, add-ons, flat-priced details, contract term.
#[must_use]
pub fn line_items(selection: &Selection) -> Vec<LineItem> {
    let mut items = Vec::new();

    if let Some(base) = selection.base() {
        items.push(LineItem {
            label: base.name.clone(),
            price: Some(base.monthly_price),
        });
    }

    for addon in selection.addons().values() {
        items.push(LineItem {
            label: addon.name.clone(),
            price: Some(addon.monthly_price),
        });
    }

    for option in selection.details().values() {
        let flat = option.pricing.flat_price();
        if !flat.is_zero() {
            items.push(LineItem {
                label: option.label.clone(),
                price: Some(flat),
            });
        }
    }

    if let Some(term) = selection.contract() {
        items.push(LineItem {
            label: term.label.clone(),
            price: None,
        });
    }

    items
}

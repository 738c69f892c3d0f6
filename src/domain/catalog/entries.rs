//! # Catalog Entries
//!
//! The read-only pricing configuration the engine selects from.
//!
//! Four entry kinds exist: [`BasePackage`] (mutually exclusive recurring
//! tiers), [`Addon`] (stackable recurring modules), [`DetailOption`]
//! (grouped by [`DetailAttribute`], carrying either a flat price or a
//! percentage surcharge), and [`ContractTerm`] (commitment durations with a
//! discount rate).

use crate::domain::value_objects::{
    AddonId, DiscountRate, Money, OptionId, PackageId, Surcharge, TermId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A selection group of detail options.
///
/// Exactly one option per attribute may be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailAttribute {
    /// Number of employees; carries a surcharge.
    CompanySize,
    /// Number of business locations; carries a surcharge.
    Locations,
    /// Support level; carries a flat monthly price.
    Support,
}

impl DetailAttribute {
    /// All known attributes, in display order.
    pub const ALL: [Self; 3] = [Self::CompanySize, Self::Locations, Self::Support];

    /// Returns the kebab-case name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompanySize => "company-size",
            Self::Locations => "locations",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for DetailAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary recurring-price tier a customer selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BasePackage {
    /// Catalog id of this package.
    pub id: PackageId,
    /// Display name.
    pub name: String,
    /// Recurring monthly price.
    pub monthly_price: Money,
    /// One-time setup fee for this tier, scaled by the price modifier.
    pub setup_fee: Money,
}

impl BasePackage {
    /// Creates a base package.
    #[must_use]
    pub fn new(
        id: impl Into<PackageId>,
        name: impl Into<String>,
        monthly_price: Money,
        setup_fee: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            monthly_price,
            setup_fee,
        }
    }
}

/// An optional recurring feature module stacked on the base package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Addon {
    /// Catalog id of this add-on.
    pub id: AddonId,
    /// Display name.
    pub name: String,
    /// Recurring monthly price.
    pub monthly_price: Money,
}

impl Addon {
    /// Creates an add-on.
    #[must_use]
    pub fn new(id: impl Into<AddonId>, name: impl Into<String>, monthly_price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            monthly_price,
        }
    }
}

/// Pricing carried by a detail option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailPricing {
    /// A flat monthly price added to the subtotal base (support levels).
    Flat(Money),
    /// A percentage surcharge folded into the price modifier.
    Surcharge(Surcharge),
}

impl DetailPricing {
    /// Returns the flat price, or zero for surcharge options.
    #[must_use]
    pub fn flat_price(&self) -> Money {
        match self {
            Self::Flat(price) => *price,
            Self::Surcharge(_) => Money::zero(),
        }
    }

    /// Returns the surcharge, or the neutral surcharge for flat options.
    #[must_use]
    pub fn surcharge(&self) -> Surcharge {
        match self {
            Self::Flat(_) => Surcharge::zero(),
            Self::Surcharge(s) => *s,
        }
    }
}

/// One selectable option within a detail attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DetailOption {
    /// Catalog id of this option, unique within its attribute group.
    pub id: OptionId,
    /// Display label.
    pub label: String,
    /// Flat price or percentage surcharge.
    pub pricing: DetailPricing,
}

impl DetailOption {
    /// Creates a flat-priced option.
    #[must_use]
    pub fn flat(id: impl Into<OptionId>, label: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            pricing: DetailPricing::Flat(price),
        }
    }

    /// Creates a surcharge-bearing option.
    #[must_use]
    pub fn surcharge(id: impl Into<OptionId>, label: impl Into<String>, surcharge: Surcharge) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            pricing: DetailPricing::Surcharge(surcharge),
        }
    }
}

/// A commitment duration carrying a discount rate on the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContractTerm {
    /// Catalog id of this term.
    pub id: TermId,
    /// Display label.
    pub label: String,
    /// Discount fraction applied to the subtotal.
    pub discount: DiscountRate,
}

impl ContractTerm {
    /// Creates a contract term.
    #[must_use]
    pub fn new(id: impl Into<TermId>, label: impl Into<String>, discount: DiscountRate) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            discount,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn attribute_wire_names() {
        assert_eq!(DetailAttribute::CompanySize.as_str(), "company-size");
        assert_eq!(DetailAttribute::Locations.to_string(), "locations");
        assert_eq!(
            serde_json::to_string(&DetailAttribute::Support).unwrap(),
            "\"support\""
        );
    }

    #[test]
    fn flat_option_has_neutral_surcharge() {
        let option = DetailOption::flat("priority", "Priority Support", Money::from_units(99));
        assert_eq!(option.pricing.flat_price(), Money::from_units(99));
        assert_eq!(option.pricing.surcharge(), Surcharge::zero());
    }

    #[test]
    fn surcharge_option_has_zero_flat_price() {
        let option = DetailOption::surcharge(
            "medium",
            "6-20 employees",
            Surcharge::new(Decimal::new(10, 2)).unwrap(),
        );
        assert!(option.pricing.flat_price().is_zero());
        assert_eq!(
            option.pricing.surcharge().get(),
            Decimal::new(10, 2)
        );
    }

    #[test]
    fn entries_serde_roundtrip() {
        let package = BasePackage::new(
            PackageId::new("professional-website"),
            "Professional Website",
            Money::from_units(599),
            Money::from_units(2500),
        );
        let json = serde_json::to_string(&package).unwrap();
        let back: BasePackage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, package);
    }
}

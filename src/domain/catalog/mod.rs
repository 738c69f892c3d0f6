//! # Catalog
//!
//! Read-only lookup service for pricing configuration.
//!
//! The [`Catalog`] holds the validated entry collections the engine resolves
//! ids against. Construction goes through [`CatalogBuilder`], which enforces
//! id uniqueness per collection and the presence of the minimum viable
//! configuration (at least one base package and one contract term). Price
//! and rate invariants are enforced earlier, by the value objects the
//! entries are built from.
//!
//! # Examples
//!
//! ```
//! use craft_quote::domain::catalog::Catalog;
//! use craft_quote::domain::value_objects::PackageId;
//!
//! let catalog = Catalog::standard().unwrap();
//! let pkg = catalog.base_package(&PackageId::new("professional-website")).unwrap();
//! assert_eq!(pkg.name, "Professional Website");
//! ```

pub mod entries;

pub use entries::{
    Addon, BasePackage, ContractTerm, DetailAttribute, DetailOption, DetailPricing,
};

use crate::domain::value_objects::{
    AddonId, DiscountRate, Money, OptionId, PackageId, Surcharge, TermId,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error type for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries of the same kind share an id.
    #[error("duplicate {kind} id: '{id}'")]
    DuplicateEntry {
        /// The kind of entry.
        kind: &'static str,
        /// The repeated id.
        id: String,
    },

    /// A mandatory collection is empty.
    #[error("catalog has no {0}")]
    EmptyCollection(&'static str),

    /// A value inside an entry failed validation.
    #[error("invalid catalog value: {0}")]
    InvalidValue(String),
}

impl CatalogError {
    /// Creates a duplicate-entry error.
    #[must_use]
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            kind,
            id: id.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Validated, read-only pricing configuration.
///
/// One instance is shared by every engine session; nothing in it changes
/// after [`CatalogBuilder::build`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    base_packages: Vec<BasePackage>,
    addons: Vec<Addon>,
    details: BTreeMap<DetailAttribute, Vec<DetailOption>>,
    contract_terms: Vec<ContractTerm>,
}

impl Catalog {
    /// Returns a builder for assembling a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Looks up a base package by id.
    #[must_use]
    pub fn base_package(&self, id: &PackageId) -> Option<&BasePackage> {
        self.base_packages.iter().find(|p| &p.id == id)
    }

    /// Looks up an add-on by id.
    #[must_use]
    pub fn addon(&self, id: &AddonId) -> Option<&Addon> {
        self.addons.iter().find(|a| &a.id == id)
    }

    /// Looks up a detail option within an attribute group.
    #[must_use]
    pub fn detail_option(&self, attribute: DetailAttribute, id: &OptionId) -> Option<&DetailOption> {
        self.details
            .get(&attribute)
            .and_then(|options| options.iter().find(|o| &o.id == id))
    }

    /// Looks up a contract term by id.
    #[must_use]
    pub fn contract_term(&self, id: &TermId) -> Option<&ContractTerm> {
        self.contract_terms.iter().find(|t| &t.id == id)
    }

    /// All base packages, in catalog order.
    #[must_use]
    pub fn base_packages(&self) -> &[BasePackage] {
        &self.base_packages
    }

    /// All add-ons, in catalog order.
    #[must_use]
    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    /// All detail option groups.
    #[must_use]
    pub fn details(&self) -> &BTreeMap<DetailAttribute, Vec<DetailOption>> {
        &self.details
    }

    /// All options within one detail attribute group, in catalog order.
    #[must_use]
    pub fn detail_options(&self, attribute: DetailAttribute) -> &[DetailOption] {
        self.details
            .get(&attribute)
            .map_or(&[], |options| options.as_slice())
    }

    /// All contract terms, in catalog order.
    #[must_use]
    pub fn contract_terms(&self) -> &[ContractTerm] {
        &self.contract_terms
    }

    /// The built-in catalog used by the demo server and tests.
    ///
    /// Mirrors the published pricing page: three website tiers with
    /// tier-dependent setup fees, six add-on modules, three detail groups and
    /// three contract terms.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] only if the built-in data is inconsistent,
    /// which the test suite guards against.
    pub fn standard() -> CatalogResult<Self> {
        let pct = |points: i64| {
            Surcharge::new(Decimal::new(points, 2))
                .map_err(|e| CatalogError::InvalidValue(e.to_string()))
        };
        let disc = |points: i64| {
            DiscountRate::new(Decimal::new(points, 2))
                .map_err(|e| CatalogError::InvalidValue(e.to_string()))
        };

        Self::builder()
            .base_package(BasePackage::new(
                "basic-website",
                "Essential Website",
                Money::from_units(399),
                Money::from_units(1990),
            ))
            .base_package(BasePackage::new(
                "professional-website",
                "Professional Website",
                Money::from_units(599),
                Money::from_units(2500),
            ))
            .base_package(BasePackage::new(
                "premium-website",
                "Premium Website",
                Money::from_units(799),
                Money::from_units(3490),
            ))
            .addon(Addon::new("ai-integration", "AI Integration", Money::from_units(299)))
            .addon(Addon::new("booking-system", "Online Booking", Money::from_units(199)))
            .addon(Addon::new("crm-integration", "CRM & Analytics", Money::from_units(249)))
            .addon(Addon::new(
                "whatsapp-integration",
                "WhatsApp Business",
                Money::from_units(99),
            ))
            .addon(Addon::new("multilingual", "Multilingual Site", Money::from_units(149)))
            .addon(Addon::new(
                "workflow-automation",
                "Workflow Automation",
                Money::from_units(399),
            ))
            .detail_option(
                DetailAttribute::CompanySize,
                DetailOption::surcharge("small", "1-5 employees", pct(0)?),
            )
            .detail_option(
                DetailAttribute::CompanySize,
                DetailOption::surcharge("medium", "6-20 employees", pct(10)?),
            )
            .detail_option(
                DetailAttribute::CompanySize,
                DetailOption::surcharge("large", "21+ employees", pct(25)?),
            )
            .detail_option(
                DetailAttribute::Locations,
                DetailOption::surcharge("single", "One location", pct(0)?),
            )
            .detail_option(
                DetailAttribute::Locations,
                DetailOption::surcharge("multi", "2-5 locations", pct(15)?),
            )
            .detail_option(
                DetailAttribute::Locations,
                DetailOption::surcharge("regional", "6+ locations", pct(30)?),
            )
            .detail_option(
                DetailAttribute::Support,
                DetailOption::flat("basic", "Basic Support", Money::zero()),
            )
            .detail_option(
                DetailAttribute::Support,
                DetailOption::flat("priority", "Priority Support", Money::from_units(99)),
            )
            .detail_option(
                DetailAttribute::Support,
                DetailOption::flat("premium", "Premium Support", Money::from_units(199)),
            )
            .contract_term(ContractTerm::new("monthly", "Monthly", disc(0)?))
            .contract_term(ContractTerm::new("annual", "Annual", disc(10)?))
            .contract_term(ContractTerm::new("biannual", "Two Years", disc(15)?))
            .build()
    }
}

/// Builder assembling and validating a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    base_packages: Vec<BasePackage>,
    addons: Vec<Addon>,
    details: BTreeMap<DetailAttribute, Vec<DetailOption>>,
    contract_terms: Vec<ContractTerm>,
}

impl CatalogBuilder {
    /// Adds a base package.
    #[must_use]
    pub fn base_package(mut self, package: BasePackage) -> Self {
        self.base_packages.push(package);
        self
    }

    /// Adds an add-on.
    #[must_use]
    pub fn addon(mut self, addon: Addon) -> Self {
        self.addons.push(addon);
        self
    }

    /// Adds a detail option to an attribute group.
    #[must_use]
    pub fn detail_option(mut self, attribute: DetailAttribute, option: DetailOption) -> Self {
        self.details.entry(attribute).or_default().push(option);
        self
    }

    /// Adds a contract term.
    #[must_use]
    pub fn contract_term(mut self, term: ContractTerm) -> Self {
        self.contract_terms.push(term);
        self
    }

    /// Validates and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateEntry`] on repeated ids within a
    /// collection and [`CatalogError::EmptyCollection`] when no base package
    /// or no contract term was added.
    pub fn build(self) -> CatalogResult<Catalog> {
        if self.base_packages.is_empty() {
            return Err(CatalogError::EmptyCollection("base packages"));
        }
        if self.contract_terms.is_empty() {
            return Err(CatalogError::EmptyCollection("contract terms"));
        }

        check_unique("base package", self.base_packages.iter().map(|p| p.id.as_str()))?;
        check_unique("add-on", self.addons.iter().map(|a| a.id.as_str()))?;
        check_unique("contract term", self.contract_terms.iter().map(|t| t.id.as_str()))?;
        for options in self.details.values() {
            check_unique("detail option", options.iter().map(|o| o.id.as_str()))?;
        }

        Ok(Catalog {
            base_packages: self.base_packages,
            addons: self.addons,
            details: self.details,
            contract_terms: self.contract_terms,
        })
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> CatalogResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::duplicate(kind, id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod builder {
        use super::*;

        #[test]
        fn rejects_empty_base_packages() {
            let result = Catalog::builder()
                .contract_term(ContractTerm::new("monthly", "Monthly", DiscountRate::zero()))
                .build();
            assert!(matches!(result, Err(CatalogError::EmptyCollection("base packages"))));
        }

        #[test]
        fn rejects_empty_contract_terms() {
            let result = Catalog::builder()
                .base_package(BasePackage::new(
                    "basic-website",
                    "Essential",
                    Money::from_units(399),
                    Money::from_units(1990),
                ))
                .build();
            assert!(matches!(
                result,
                Err(CatalogError::EmptyCollection("contract terms"))
            ));
        }

        #[test]
        fn rejects_duplicate_package_ids() {
            let package = BasePackage::new(
                "basic-website",
                "Essential",
                Money::from_units(399),
                Money::from_units(1990),
            );
            let result = Catalog::builder()
                .base_package(package.clone())
                .base_package(package)
                .contract_term(ContractTerm::new("monthly", "Monthly", DiscountRate::zero()))
                .build();
            assert!(matches!(result, Err(CatalogError::DuplicateEntry { .. })));
        }

        #[test]
        fn duplicate_option_ids_allowed_across_attributes() {
            // 'basic' may appear in different attribute groups.
            let result = Catalog::builder()
                .base_package(BasePackage::new(
                    "basic-website",
                    "Essential",
                    Money::from_units(399),
                    Money::from_units(1990),
                ))
                .contract_term(ContractTerm::new("monthly", "Monthly", DiscountRate::zero()))
                .detail_option(
                    DetailAttribute::Support,
                    DetailOption::flat("basic", "Basic Support", Money::zero()),
                )
                .detail_option(
                    DetailAttribute::CompanySize,
                    DetailOption::surcharge("basic", "Basic", Surcharge::zero()),
                )
                .build();
            assert!(result.is_ok());
        }
    }

    mod lookups {
        use super::*;

        #[test]
        fn standard_catalog_builds() {
            let catalog = Catalog::standard().unwrap();
            assert_eq!(catalog.base_packages().len(), 3);
            assert_eq!(catalog.addons().len(), 6);
            assert_eq!(catalog.details().len(), 3);
            assert_eq!(catalog.contract_terms().len(), 3);
        }

        #[test]
        fn base_package_by_id() {
            let catalog = Catalog::standard().unwrap();
            let pkg = catalog
                .base_package(&PackageId::new("premium-website"))
                .unwrap();
            assert_eq!(pkg.monthly_price, Money::from_units(799));
            assert_eq!(pkg.setup_fee, Money::from_units(3490));
        }

        #[test]
        fn unknown_ids_return_none() {
            let catalog = Catalog::standard().unwrap();
            assert!(catalog.base_package(&PackageId::new("gold-website")).is_none());
            assert!(catalog.addon(&AddonId::new("teleportation")).is_none());
            assert!(catalog.contract_term(&TermId::new("decade")).is_none());
        }

        #[test]
        fn detail_option_is_scoped_to_attribute() {
            let catalog = Catalog::standard().unwrap();
            let id = OptionId::new("medium");
            assert!(catalog
                .detail_option(DetailAttribute::CompanySize, &id)
                .is_some());
            // 'medium' only exists under company-size.
            assert!(catalog.detail_option(DetailAttribute::Support, &id).is_none());
        }

        #[test]
        fn annual_term_discounts_ten_percent() {
            let catalog = Catalog::standard().unwrap();
            let term = catalog.contract_term(&TermId::new("annual")).unwrap();
            assert_eq!(term.discount.get(), Decimal::new(10, 2));
        }
    }
}

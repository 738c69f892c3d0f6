//! # Catalog File
//!
//! Loads a pricing catalog from a TOML file.
//!
//! The file schema keeps prices as whole currency units and rates as integer
//! percent points, so no floating point values enter the money path. The
//! mirror structs here convert into domain types through the catalog
//! builder, which applies the usual uniqueness and non-emptiness checks.
//!
//! # File schema
//!
//! ```toml
//! [[base-packages]]
//! id = "basic-website"
//! name = "Essential Website"
//! monthly-price = 399
//! setup-fee = 1990
//!
//! [[addons]]
//! id = "ai-integration"
//! name = "AI Integration"
//! monthly-price = 299
//!
//! [[details.company-size]]
//! id = "medium"
//! label = "6-20 employees"
//! surcharge-percent = 10
//!
//! [[details.support]]
//! id = "priority"
//! label = "Priority Support"
//! flat-price = 99
//!
//! [[contract-terms]]
//! id = "annual"
//! label = "Annual"
//! discount-percent = 10
//! ```

use crate::domain::catalog::{
    Addon, BasePackage, Catalog, CatalogError, ContractTerm, DetailAttribute, DetailOption,
};
use crate::domain::value_objects::{DiscountRate, Money, Surcharge};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Error loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    /// File could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML or does not match the schema.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed entries violate a catalog invariant.
    #[error("invalid catalog file: {0}")]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct BasePackageEntry {
    id: String,
    name: String,
    monthly_price: u64,
    setup_fee: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct AddonEntry {
    id: String,
    name: String,
    monthly_price: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct DetailOptionEntry {
    id: String,
    label: String,
    #[serde(default)]
    flat_price: Option<u64>,
    #[serde(default)]
    surcharge_percent: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct DetailGroups {
    #[serde(default)]
    company_size: Vec<DetailOptionEntry>,
    #[serde(default)]
    locations: Vec<DetailOptionEntry>,
    #[serde(default)]
    support: Vec<DetailOptionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ContractTermEntry {
    id: String,
    label: String,
    discount_percent: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    base_packages: Vec<BasePackageEntry>,
    #[serde(default)]
    addons: Vec<AddonEntry>,
    #[serde(default)]
    details: DetailGroups,
    #[serde(default)]
    contract_terms: Vec<ContractTermEntry>,
}

impl DetailOptionEntry {
    fn into_domain(self) -> Result<DetailOption, CatalogFileError> {
        match (self.flat_price, self.surcharge_percent) {
            (Some(units), None) => Ok(DetailOption::flat(
                self.id.as_str(),
                self.label,
                Money::from_units(units),
            )),
            (None, Some(points)) => {
                let surcharge = Surcharge::new(Decimal::new(i64::from(points), 2))
                    .map_err(|e| CatalogError::InvalidValue(e.to_string()))?;
                Ok(DetailOption::surcharge(
                    self.id.as_str(),
                    self.label,
                    surcharge,
                ))
            }
            _ => Err(CatalogError::InvalidValue(format!(
                "detail option '{}' must set exactly one of flat-price or surcharge-percent",
                self.id
            ))
            .into()),
        }
    }
}

impl CatalogFile {
    fn into_catalog(self) -> Result<Catalog, CatalogFileError> {
        let mut builder = Catalog::builder();

        for entry in self.base_packages {
            builder = builder.base_package(BasePackage::new(
                entry.id.as_str(),
                entry.name,
                Money::from_units(entry.monthly_price),
                Money::from_units(entry.setup_fee),
            ));
        }
        for entry in self.addons {
            builder = builder.addon(Addon::new(
                entry.id.as_str(),
                entry.name,
                Money::from_units(entry.monthly_price),
            ));
        }

        let groups = [
            (DetailAttribute::CompanySize, self.details.company_size),
            (DetailAttribute::Locations, self.details.locations),
            (DetailAttribute::Support, self.details.support),
        ];
        for (attribute, entries) in groups {
            for entry in entries {
                builder = builder.detail_option(attribute, entry.into_domain()?);
            }
        }

        for entry in self.contract_terms {
            let discount = DiscountRate::new(Decimal::new(i64::from(entry.discount_percent), 2))
                .map_err(|e| CatalogError::InvalidValue(e.to_string()))?;
            builder = builder.contract_term(ContractTerm::new(
                entry.id.as_str(),
                entry.label,
                discount,
            ));
        }

        Ok(builder.build()?)
    }
}

/// Parses a catalog from TOML text.
///
/// # Errors
///
/// Returns [`CatalogFileError`] when the text is not valid TOML or the
/// entries violate a catalog invariant.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogFileError> {
    let file: CatalogFile = toml::from_str(text)?;
    file.into_catalog()
}

/// Loads a catalog from a TOML file on disk.
///
/// # Errors
///
/// Returns [`CatalogFileError`] when the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogFileError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&text)?;
    info!(
        path = %path.display(),
        base_packages = catalog.base_packages().len(),
        addons = catalog.addons().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{OptionId, PackageId, TermId};

    const MINIMAL: &str = r#"
        [[base-packages]]
        id = "basic-website"
        name = "Essential Website"
        monthly-price = 399
        setup-fee = 1990

        [[details.support]]
        id = "priority"
        label = "Priority Support"
        flat-price = 99

        [[details.company-size]]
        id = "medium"
        label = "6-20 employees"
        surcharge-percent = 10

        [[contract-terms]]
        id = "annual"
        label = "Annual"
        discount-percent = 10
    "#;

    #[test]
    fn parses_minimal_catalog() {
        let catalog = parse_catalog(MINIMAL).unwrap();

        let package = catalog
            .base_package(&PackageId::new("basic-website"))
            .unwrap();
        assert_eq!(package.monthly_price, Money::from_units(399));
        assert_eq!(package.setup_fee, Money::from_units(1990));

        let option = catalog
            .detail_option(DetailAttribute::CompanySize, &OptionId::new("medium"))
            .unwrap();
        assert_eq!(option.pricing.surcharge().get(), Decimal::new(10, 2));

        let term = catalog.contract_term(&TermId::new("annual")).unwrap();
        assert_eq!(term.discount.get(), Decimal::new(10, 2));
    }

    #[test]
    fn rejects_detail_option_with_both_pricings() {
        let text = r#"
            [[base-packages]]
            id = "basic-website"
            name = "Essential Website"
            monthly-price = 399
            setup-fee = 1990

            [[details.support]]
            id = "odd"
            label = "Odd"
            flat-price = 99
            surcharge-percent = 10

            [[contract-terms]]
            id = "monthly"
            label = "Monthly"
            discount-percent = 0
        "#;
        let err = parse_catalog(text).unwrap_err();
        assert!(matches!(err, CatalogFileError::Invalid(_)));
    }

    #[test]
    fn rejects_missing_contract_terms() {
        let text = r#"
            [[base-packages]]
            id = "basic-website"
            name = "Essential Website"
            monthly-price = 399
            setup-fee = 1990
        "#;
        let err = parse_catalog(text).unwrap_err();
        assert!(matches!(err, CatalogFileError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_catalog("not = [valid").unwrap_err();
        assert!(matches!(err, CatalogFileError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_catalog("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogFileError::Io(_)));
    }
}

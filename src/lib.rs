//! # Craft Quote
//!
//! Pricing configurator and quote-submission backend for a web agency
//! serving skilled-trade businesses.
//!
//! The crate is organized in layers:
//!
//! - [`domain`] - Catalog, selection state, pricing rules, and quote records
//! - [`application`] - The interactive [`application::engine::QuoteEngine`]
//! - [`infrastructure`] - Settings, catalog files, and submission gateways
//! - [`api`] - The REST surface
//!
//! # Examples
//!
//! ```
//! use craft_quote::application::engine::QuoteEngine;
//! use craft_quote::domain::catalog::{Catalog, DetailAttribute};
//! use craft_quote::domain::value_objects::{AddonId, OptionId, PackageId, TermId};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(Catalog::standard()?);
//! let mut engine = QuoteEngine::new(catalog);
//!
//! engine.select_base(&PackageId::new("professional-website"))?;
//! engine.toggle_addon(&AddonId::new("ai-integration"), true)?;
//! engine.set_detail(DetailAttribute::CompanySize, &OptionId::new("medium"))?;
//! engine.select_contract(&TermId::new("annual"))?;
//!
//! let quote = engine.generate_quote()?;
//! assert_eq!(quote.prices().total.to_string(), "889€");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

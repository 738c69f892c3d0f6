//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`PackageId`], [`AddonId`], [`OptionId`], [`TermId`]: slug identifiers
//!   for catalog entries
//! - [`QuoteId`]: UUID identifier for finalized quote records
//!
//! ## Numeric Types
//!
//! - [`Money`]: non-negative currency amount with checked arithmetic
//! - [`DiscountRate`]: contract discount fraction in `[0, 1]`
//! - [`Surcharge`]: non-negative percentage markup
//! - [`RoundingMode`]: explicit rounding policy for derived fields
//!
//! ## State
//!
//! - [`WizardStep`]: linear step position of the pricing configurator
//! - [`Timestamp`]: UTC timestamp, RFC 3339 on the wire

pub mod ids;
pub mod money;
pub mod rate;
pub mod timestamp;
pub mod wizard_step;

pub use ids::{AddonId, OptionId, PackageId, QuoteId, TermId};
pub use money::{Money, RoundingMode};
pub use rate::{DiscountRate, Surcharge};
pub use timestamp::Timestamp;
pub use wizard_step::{InvalidWizardStepError, WizardStep};

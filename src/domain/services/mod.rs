//! # Domain Services
//!
//! Domain services encapsulating business logic that doesn't naturally
//! belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`pricing`]: pure derivation of the pricing snapshot and the summary
//!   line items from a selection

pub mod pricing;

pub use pricing::{LineItem, PricingSnapshot, compute_snapshot, line_items};

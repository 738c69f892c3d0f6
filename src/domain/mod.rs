//! # Domain Layer
//!
//! Business rules of the pricing configurator, free of any transport,
//! rendering, or delivery concern.
//!
//! - [`value_objects`]: validated immutable types (ids, money, rates, steps)
//! - [`catalog`]: the read-only pricing configuration
//! - [`entities`]: selection state, quote records, contact inquiries
//! - [`services`]: the pure pricing derivation
//! - [`errors`]: rejected-operation error types

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

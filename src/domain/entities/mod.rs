//! # Domain Entities
//!
//! Mutable state and immutable snapshots of the configurator.
//!
//! - [`Selection`]: the per-session selection state the engine mutates
//! - [`QuoteRecord`]: the immutable snapshot of a completed configuration
//! - [`ContactInquiry`]: the contact payload handed to the submission
//!   gateway, optionally carrying a quote record

pub mod inquiry;
pub mod quote_record;
pub mod selection;

pub use inquiry::{ContactInquiry, InquiryValidationError};
pub use quote_record::{QuoteRecord, QuotedAddon, QuotedContract, QuotedPackage};
pub use selection::Selection;

//! # Application Layer
//!
//! Use case orchestration on top of the domain layer.
//!
//! The application layer owns the interactive [`engine::QuoteEngine`] and
//! the error surface drivers program against. It depends on the domain
//! layer and on the infrastructure traits, never on concrete adapters.

pub mod engine;
pub mod error;

pub use engine::{DetailsGating, EngineConfig, QuoteEngine};
pub use error::{ApplicationError, ApplicationResult};

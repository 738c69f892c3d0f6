//! # Infrastructure Layer
//!
//! Adapters to the outside world: runtime settings, catalog files, and the
//! submission gateway implementations.

pub mod catalog_file;
pub mod gateway;
pub mod settings;

pub use settings::Settings;

//! # API Layer
//!
//! External interfaces to the quote service.

pub mod rest;

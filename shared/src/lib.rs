//! Shared types and models for the Café POS costing platform
//!
//! This crate contains domain types shared between the reconciliation
//! engine and any host surface (admin API, seeding tools) built on top of
//! it.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

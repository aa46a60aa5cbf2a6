//! Cost & Recipe Reconciliation Engine for the Café POS platform
//!
//! Translates completed sale lines from the commerce provider into
//! inventory deductions and cost figures: recipe resolution and
//! versioning, fuzzy ingredient matching, unit conversion, pack/unit cost
//! derivation, and recipe-based COGS computation.
//!
//! The engine is computation-only: no network calls, no blocking I/O. The
//! calling context owns persistence and is responsible for applying a
//! sale line's consumption as a single logical transaction.

pub mod config;
pub mod error;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};

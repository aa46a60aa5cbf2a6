//! Error handling for the reconciliation engine
//!
//! Matching and conversion failures inside a multi-line computation are
//! collected into a missing list rather than thrown on first occurrence;
//! the variants here are for callers that need the hard-failure channel.

use thiserror::Error;
use uuid::Uuid;

use shared::Unit;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    // Conversion errors
    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: Unit, to: Unit },

    // Matching errors
    #[error("No inventory item matched recipe line: {label}")]
    NoIngredientMatch { label: String },

    /// Strict-mode aggregate: every unresolved line of the computation,
    /// reported together in one pass
    #[error("{} recipe line(s) could not be resolved", .missing.len())]
    MissingIngredients {
        missing: Vec<crate::services::consumption::MissingIngredient>,
    },

    // Recipe versioning errors
    #[error("Recipe already exists for sellable {sellable_id} (current version {version})")]
    RecipeVersionConflict { sellable_id: Uuid, version: i32 },

    // Costing errors
    #[error("Invalid pack size: {0}")]
    InvalidPackSize(i32),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal engine error")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code for host surfaces
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            EngineError::NoIngredientMatch { .. } => "NO_INGREDIENT_MATCH",
            EngineError::MissingIngredients { .. } => "MISSING_INGREDIENTS",
            EngineError::RecipeVersionConflict { .. } => "RECIPE_VERSION_CONFLICT",
            EngineError::InvalidPackSize(_) => "INVALID_PACK_SIZE",
            EngineError::Validation { .. } => "VALIDATION_ERROR",
            EngineError::NotFound(_) => "NOT_FOUND",
            EngineError::Configuration(_) => "CONFIGURATION_ERROR",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

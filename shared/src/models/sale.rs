//! Sale event models
//!
//! The engine consumes this shape from the commerce provider's completed
//! orders; it does not own its persistence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a completed sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    pub sellable_id: Uuid,
    /// Units of the base sellable sold
    pub quantity: Decimal,
    /// Modifier options selected on this line, applied once each
    pub modifier_ids: Vec<Uuid>,
}

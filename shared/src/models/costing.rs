//! Cost figure and cost history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit/pack cost figures for an inventory item
///
/// Unit cost is the canonical stored value; pack cost is derived from it
/// through the pack size in effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostFigures {
    pub unit_cost: Decimal,
    pub pack_cost: Decimal,
    pub pack_size: i32,
}

/// Where a unit-cost change came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CostChangeSource {
    Restock,
    ManualEdit,
    Revert,
}

impl CostChangeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostChangeSource::Restock => "restock",
            CostChangeSource::ManualEdit => "manual_edit",
            CostChangeSource::Revert => "revert",
        }
    }
}

/// One unit-cost change for an inventory item, kept to support reverting
/// to a prior cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostHistoryEntry {
    pub item_id: Uuid,
    pub previous_unit_cost: Decimal,
    pub new_unit_cost: Decimal,
    /// Pack size in effect when the change was recorded
    pub pack_size: i32,
    pub source: CostChangeSource,
    pub recorded_at: DateTime<Utc>,
}

//! Inventory catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Unit;

/// A stocked ingredient, supply, or resellable unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    /// Unit in which stock and unit cost are canonically stored
    pub unit: Unit,
    /// Cost per one native unit, regardless of how the item is purchased
    pub unit_cost: Decimal,
    /// Units per supplier pack, always >= 1
    pub pack_size: i32,
    /// Current stock in native units
    pub stock: Decimal,
    pub category: Option<String>,
    /// Archived items are kept for history rather than hard-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Pack cost before display rounding
    pub fn pack_cost_exact(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.pack_size)
    }
}

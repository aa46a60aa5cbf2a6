//! Recipe versioning models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::Unit;

/// One ingredient requirement within a recipe version
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeLineSpec {
    /// Human-readable label ("Milk", "Espresso beans")
    #[validate(length(min = 1))]
    pub label: String,
    /// Ordered name fragments matched against inventory item names
    #[validate(length(min = 1))]
    pub candidates: Vec<String>,
    /// Required quantity in the unit natural for the ingredient
    pub quantity: Decimal,
    pub unit: Unit,
    /// Expected waste/spillage in percent, tracked for reporting but
    /// never applied to the deducted quantity
    pub loss_percent: Decimal,
}

/// Lifecycle state of a recipe version
///
/// A version is authored as a draft, promoted to current on publish, and
/// superseded when a forced re-seed publishes its successor. At most one
/// version per sellable is current at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecipeState {
    Draft,
    Current,
    Superseded,
}

impl RecipeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeState::Draft => "draft",
            RecipeState::Current => "current",
            RecipeState::Superseded => "superseded",
        }
    }

    /// Valid transitions: Draft -> Current -> Superseded
    pub fn can_transition(&self, next: RecipeState) -> bool {
        matches!(
            (self, next),
            (RecipeState::Draft, RecipeState::Current)
                | (RecipeState::Current, RecipeState::Superseded)
        )
    }
}

/// One version of a sellable's recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeVersion {
    pub sellable_id: Uuid,
    pub version: i32,
    pub lines: Vec<RecipeLineSpec>,
    pub state: RecipeState,
    pub effective_from: DateTime<Utc>,
    /// None while this version is current
    pub effective_to: Option<DateTime<Utc>>,
}

impl RecipeVersion {
    pub fn is_current(&self) -> bool {
        self.state == RecipeState::Current && self.effective_to.is_none()
    }
}

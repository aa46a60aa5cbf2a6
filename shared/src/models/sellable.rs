//! Sellable catalog models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a sellable is a standalone product or a modifier option
/// attached to one (oat milk substitution, extra shot)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SellableKind {
    Product,
    ModifierOption,
}

/// A product or modifier option that can appear on a sale line, tied 1:1
/// to an external catalog identifier and to its own recipe lineage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sellable {
    pub id: Uuid,
    /// Identifier in the external commerce provider's catalog
    pub external_id: String,
    pub name: String,
    pub kind: SellableKind,
}

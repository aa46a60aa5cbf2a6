//! Ingredient consumption and COGS computation for sale lines
//!
//! For one sale line: resolve the base sellable's current recipe, match
//! each line against the catalog, convert into the matched item's native
//! unit, and multiply by the quantity sold. Each selected modifier's own
//! recipe is resolved independently and applied once per sale line.
//! Entries for the same inventory item accumulate additively.
//!
//! Lines that fail to match or convert land in the missing list and are
//! excluded from the totals; strict mode turns any missing line into a
//! hard failure carrying the complete list.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::{InventoryItem, SaleLine, Unit};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

use super::conversion::convert;
use super::costing::CostingService;
use super::matching::IngredientMatcher;
use super::recipe::RecipeStore;

/// How missing ingredients are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionMode {
    /// Any missing line fails the whole computation
    Strict,
    /// Missing lines are reported alongside a partial result
    Advisory,
}

impl ConsumptionMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ConsumptionMode::Strict
        } else {
            ConsumptionMode::Advisory
        }
    }
}

/// One recipe line's contribution to a consumption entry
#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionSource {
    pub label: String,
    /// Quantity contributed, in the inventory item's native unit
    pub quantity: Decimal,
    /// Expected waste in percent, metadata for downstream reporting;
    /// never applied to the deducted quantity
    pub loss_percent: Decimal,
}

/// Total deduction for one inventory item across the whole sale line
#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionEntry {
    pub item_id: Uuid,
    pub item_name: String,
    /// The item's native unit; `quantity` and stock deduction use it
    pub unit: Unit,
    pub quantity: Decimal,
    /// Unit cost in effect when the sale was reconciled
    pub unit_cost: Decimal,
    /// quantity x unit cost, at unit-cost precision
    pub cost: Decimal,
    pub sources: Vec<ConsumptionSource>,
}

/// A recipe line that could not be resolved, with a human-readable reason
#[derive(Debug, Clone, Serialize)]
pub struct MissingIngredient {
    pub label: String,
    pub reason: String,
}

/// Consumption and COGS for one sale line
#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionReport {
    pub entries: Vec<ConsumptionEntry>,
    pub missing: Vec<MissingIngredient>,
    /// Ingredient-cost total for the line, at money display precision
    pub total_cost: Decimal,
}

/// Walks recipes into consumption lists and cost snapshots
#[derive(Debug, Clone, Default)]
pub struct ConsumptionCalculator {
    matcher: IngredientMatcher,
    costing: CostingService,
}

impl ConsumptionCalculator {
    pub fn new(matcher: IngredientMatcher, costing: CostingService) -> Self {
        Self { matcher, costing }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            matcher: IngredientMatcher::new(config.matcher),
            costing: CostingService::new(config.costing),
        }
    }

    /// Compute the consumption list and COGS snapshot for one sale line
    pub fn compute(
        &self,
        sale: &SaleLine,
        catalog: &[InventoryItem],
        recipes: &RecipeStore,
        mode: ConsumptionMode,
    ) -> EngineResult<ConsumptionReport> {
        if sale.quantity < Decimal::ZERO {
            return Err(EngineError::Validation {
                field: "quantity".to_string(),
                message: "Sale line quantity cannot be negative".to_string(),
            });
        }

        let mut entries: Vec<ConsumptionEntry> = Vec::new();
        let mut missing: Vec<MissingIngredient> = Vec::new();

        self.consume_recipe(
            sale.sellable_id,
            sale.quantity,
            catalog,
            recipes,
            &mut entries,
            &mut missing,
        );

        // Modifier recipes apply once per sale line, not per unit of the
        // base sellable
        for modifier_id in &sale.modifier_ids {
            self.consume_recipe(
                *modifier_id,
                Decimal::ONE,
                catalog,
                recipes,
                &mut entries,
                &mut missing,
            );
        }

        if mode == ConsumptionMode::Strict && !missing.is_empty() {
            tracing::warn!(
                sellable_id = %sale.sellable_id,
                missing = missing.len(),
                "strict consumption failed with unresolved recipe lines"
            );
            return Err(EngineError::MissingIngredients { missing });
        }

        let mut total_cost = Decimal::ZERO;
        for entry in &mut entries {
            entry.cost = self.costing.round_unit_cost(entry.quantity * entry.unit_cost);
            total_cost += entry.cost;
        }
        let total_cost = self.costing.round_money(total_cost);

        Ok(ConsumptionReport {
            entries,
            missing,
            total_cost,
        })
    }

    /// Resolve one sellable's current recipe and fold its lines into the
    /// running entry/missing lists
    fn consume_recipe(
        &self,
        sellable_id: Uuid,
        multiplier: Decimal,
        catalog: &[InventoryItem],
        recipes: &RecipeStore,
        entries: &mut Vec<ConsumptionEntry>,
        missing: &mut Vec<MissingIngredient>,
    ) {
        let Some(version) = recipes.current(sellable_id) else {
            tracing::warn!(%sellable_id, "no current recipe version for sellable");
            missing.push(MissingIngredient {
                label: sellable_id.to_string(),
                reason: "no current recipe version".to_string(),
            });
            return;
        };

        for line in &version.lines {
            let Some(matched) = self.matcher.best_match(&line.candidates, catalog) else {
                missing.push(MissingIngredient {
                    label: line.label.clone(),
                    reason: "no inventory item scored at or above the match threshold"
                        .to_string(),
                });
                continue;
            };

            let converted = match convert(line.quantity, line.unit, matched.item.unit) {
                Ok(quantity) => quantity,
                Err(err) => {
                    missing.push(MissingIngredient {
                        label: line.label.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let deducted = converted * multiplier;
            let source = ConsumptionSource {
                label: line.label.clone(),
                quantity: deducted,
                loss_percent: line.loss_percent,
            };

            match entries
                .iter_mut()
                .find(|entry| entry.item_id == matched.item.id)
            {
                Some(entry) => {
                    entry.quantity += deducted;
                    entry.sources.push(source);
                }
                None => {
                    entries.push(ConsumptionEntry {
                        item_id: matched.item.id,
                        item_name: matched.item.name.clone(),
                        unit: matched.item.unit,
                        quantity: deducted,
                        unit_cost: matched.item.unit_cost,
                        cost: Decimal::ZERO,
                        sources: vec![source],
                    });
                }
            }
        }
    }
}

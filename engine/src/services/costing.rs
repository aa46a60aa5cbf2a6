//! Pack/unit cost computation and cost history
//!
//! Unit cost is the canonical stored value (cost per one native unit);
//! pack cost is derived through the pack size in effect. Unit cost keeps
//! four decimal places, pack cost two. Changing pack size preserves unit
//! cost and recomputes pack cost; the source-of-truth direction never
//! flips per edit.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use shared::{
    validate_cost, validate_pack_size, CostChangeSource, CostFigures, CostHistoryEntry,
};

use crate::config::CostingConfig;
use crate::error::{EngineError, EngineResult};

/// A user edit to an item's cost figures
#[derive(Debug, Clone, Copy)]
pub enum CostEdit {
    /// Recomputes pack cost through the pack size in effect
    SetUnitCost(Decimal),
    /// Recomputes unit cost through the pack size in effect
    SetPackCost(Decimal),
    /// Preserves unit cost and recomputes pack cost
    SetPackSize(i32),
}

/// Pack/unit cost derivation with uniform rounding
#[derive(Debug, Clone)]
pub struct CostingService {
    config: CostingConfig,
}

impl CostingService {
    pub fn new(config: CostingConfig) -> Self {
        Self { config }
    }

    /// Canonical rounding for unit costs and per-entry cost amounts
    pub fn round_unit_cost(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(
            self.config.unit_cost_dp,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Display/storage rounding for pack cost and money totals
    pub fn round_money(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(
            self.config.pack_cost_dp,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Cost figures from a canonical unit cost and pack size
    pub fn figures(&self, unit_cost: Decimal, pack_size: i32) -> EngineResult<CostFigures> {
        if validate_pack_size(pack_size).is_err() {
            return Err(EngineError::InvalidPackSize(pack_size));
        }
        validate_cost(unit_cost).map_err(|message| EngineError::Validation {
            field: "unit_cost".to_string(),
            message: message.to_string(),
        })?;

        let unit_cost = self.round_unit_cost(unit_cost);
        let pack_cost = self.round_money(unit_cost * Decimal::from(pack_size));
        Ok(CostFigures {
            unit_cost,
            pack_cost,
            pack_size,
        })
    }

    /// Canonical unit cost recovered from a pack cost
    pub fn unit_cost_from_pack(&self, pack_cost: Decimal, pack_size: i32) -> EngineResult<Decimal> {
        if validate_pack_size(pack_size).is_err() {
            return Err(EngineError::InvalidPackSize(pack_size));
        }
        validate_cost(pack_cost).map_err(|message| EngineError::Validation {
            field: "pack_cost".to_string(),
            message: message.to_string(),
        })?;

        Ok(self.round_unit_cost(pack_cost / Decimal::from(pack_size)))
    }

    /// Apply one edit, recomputing the dependent field
    ///
    /// Invalid input is rejected before any recomputation; the prior
    /// figures are left untouched.
    pub fn apply_edit(&self, current: &CostFigures, edit: CostEdit) -> EngineResult<CostFigures> {
        match edit {
            CostEdit::SetUnitCost(unit_cost) => self.figures(unit_cost, current.pack_size),
            CostEdit::SetPackCost(pack_cost) => {
                let unit_cost = self.unit_cost_from_pack(pack_cost, current.pack_size)?;
                Ok(CostFigures {
                    unit_cost,
                    pack_cost: self.round_money(pack_cost),
                    pack_size: current.pack_size,
                })
            }
            CostEdit::SetPackSize(pack_size) => self.figures(current.unit_cost, pack_size),
        }
    }
}

impl Default for CostingService {
    fn default() -> Self {
        Self::new(CostingConfig::default())
    }
}

/// In-memory unit-cost change log, kept per item to support reverting to
/// a prior cost
#[derive(Debug, Default)]
pub struct CostHistory {
    entries: HashMap<Uuid, Vec<CostHistoryEntry>>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit-cost change
    pub fn record(
        &mut self,
        item_id: Uuid,
        previous_unit_cost: Decimal,
        new_unit_cost: Decimal,
        pack_size: i32,
        source: CostChangeSource,
        now: DateTime<Utc>,
    ) {
        tracing::debug!(
            %item_id,
            %previous_unit_cost,
            %new_unit_cost,
            source = source.as_str(),
            "recording cost change"
        );
        self.entries.entry(item_id).or_default().push(CostHistoryEntry {
            item_id,
            previous_unit_cost,
            new_unit_cost,
            pack_size,
            source,
            recorded_at: now,
        });
    }

    /// Change history for an item, oldest first
    pub fn entries(&self, item_id: Uuid) -> &[CostHistoryEntry] {
        self.entries
            .get(&item_id)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Restore the unit cost prior to the most recent change, returning
    /// the recomputed figures and logging the revert itself
    pub fn revert(
        &mut self,
        item_id: Uuid,
        costing: &CostingService,
        now: DateTime<Utc>,
    ) -> EngineResult<CostFigures> {
        let last = self
            .entries
            .get(&item_id)
            .and_then(|entries| entries.last())
            .cloned()
            .ok_or_else(|| EngineError::NotFound("Cost history for item".to_string()))?;

        let figures = costing.figures(last.previous_unit_cost, last.pack_size)?;
        self.record(
            item_id,
            last.new_unit_cost,
            last.previous_unit_cost,
            last.pack_size,
            CostChangeSource::Revert,
            now,
        );
        Ok(figures)
    }
}

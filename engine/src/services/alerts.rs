//! Stock-level alert evaluation
//!
//! Pure threshold checks against a catalog snapshot; an alert triggers
//! when the item's level is at or below its threshold. A pending
//! consumption report can be subtracted first so callers can see which
//! alerts a sale would trip before committing the deduction.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::InventoryItem;

use crate::error::{EngineError, EngineResult};

use super::consumption::ConsumptionReport;

/// Threshold alert configuration for one inventory item
#[derive(Debug, Clone)]
pub struct StockAlert {
    pub item_id: Uuid,
    /// Level at or below which the alert fires, in native units
    pub threshold: Decimal,
}

/// An alert whose item is at or below its threshold
#[derive(Debug, Clone, Serialize)]
pub struct TriggeredAlert {
    pub item_id: Uuid,
    pub item_name: String,
    /// Stock level used for the check, after any pending deduction
    pub level: Decimal,
    pub threshold: Decimal,
}

/// Evaluate alerts against a catalog snapshot
///
/// Soft-deleted items never trigger. An alert referencing an unknown
/// item is a caller error, reported as NotFound.
pub fn evaluate_alerts(
    alerts: &[StockAlert],
    catalog: &[InventoryItem],
    pending: Option<&ConsumptionReport>,
) -> EngineResult<Vec<TriggeredAlert>> {
    let mut triggered = Vec::new();

    for alert in alerts {
        if alert.threshold <= Decimal::ZERO {
            return Err(EngineError::Validation {
                field: "threshold".to_string(),
                message: "Threshold must be positive".to_string(),
            });
        }

        let Some(item) = catalog.iter().find(|item| item.id == alert.item_id) else {
            return Err(EngineError::NotFound(format!(
                "Inventory item {}",
                alert.item_id
            )));
        };

        if !item.is_active() {
            continue;
        }

        let pending_draw = pending
            .and_then(|report| {
                report
                    .entries
                    .iter()
                    .find(|entry| entry.item_id == item.id)
            })
            .map(|entry| entry.quantity)
            .unwrap_or(Decimal::ZERO);

        let level = item.stock - pending_draw;
        if level <= alert.threshold {
            tracing::debug!(item = %item.name, %level, threshold = %alert.threshold, "stock alert triggered");
            triggered.push(TriggeredAlert {
                item_id: item.id,
                item_name: item.name.clone(),
                level,
                threshold: alert.threshold,
            });
        }
    }

    Ok(triggered)
}

//! Stock alert evaluation tests

use chrono::Utc;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use costing_engine::error::EngineError;
use costing_engine::services::{
    evaluate_alerts, ConsumptionCalculator, ConsumptionMode, CreateVersionInput, RecipeStore,
    StockAlert,
};
use shared::{InventoryItem, RecipeLineSpec, SaleLine, Unit};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn item(name: &str, stock: &str) -> InventoryItem {
    InventoryItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        unit: Unit::Ounce,
        unit_cost: dec("0.05"),
        pack_size: 1,
        stock: dec(stock),
        category: None,
        deleted_at: None,
    }
}

#[test]
fn test_alert_triggers_at_or_below_threshold() {
    let catalog = vec![item("Whole Milk", "30"), item("Oat Milk", "60")];
    let alerts = vec![
        StockAlert {
            item_id: catalog[0].id,
            threshold: dec("50"),
        },
        StockAlert {
            item_id: catalog[1].id,
            threshold: dec("50"),
        },
    ];

    let triggered = evaluate_alerts(&alerts, &catalog, None).unwrap();

    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].item_name, "Whole Milk");
    assert_eq!(triggered[0].level, dec("30"));
}

#[test]
fn test_alert_triggers_at_exact_threshold() {
    let catalog = vec![item("Whole Milk", "50")];
    let alerts = vec![StockAlert {
        item_id: catalog[0].id,
        threshold: dec("50"),
    }];

    let triggered = evaluate_alerts(&alerts, &catalog, None).unwrap();
    assert_eq!(triggered.len(), 1);
}

/// A pending consumption report is subtracted before the check, so
/// callers can see which alerts a sale would trip before committing
#[test]
fn test_pending_consumption_subtracted() {
    let catalog = vec![item("Whole Milk", "55")];
    let mut store = RecipeStore::new();
    let latte = Uuid::new_v4();
    store
        .create_version(
            CreateVersionInput {
                sellable_id: latte,
                lines: vec![RecipeLineSpec {
                    label: "Milk".to_string(),
                    candidates: vec!["whole milk".to_string()],
                    quantity: dec("10"),
                    unit: Unit::Ounce,
                    loss_percent: Decimal::ZERO,
                }],
            },
            false,
            Utc::now(),
        )
        .unwrap();

    let sale = SaleLine {
        sellable_id: latte,
        quantity: dec("1"),
        modifier_ids: vec![],
    };
    let report = ConsumptionCalculator::default()
        .compute(&sale, &catalog, &store, ConsumptionMode::Strict)
        .unwrap();

    let alerts = vec![StockAlert {
        item_id: catalog[0].id,
        threshold: dec("50"),
    }];

    // 55 on hand does not trigger; 55 - 10 pending does
    assert!(evaluate_alerts(&alerts, &catalog, None).unwrap().is_empty());
    let triggered = evaluate_alerts(&alerts, &catalog, Some(&report)).unwrap();
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].level, dec("45"));
}

#[test]
fn test_soft_deleted_items_never_trigger() {
    let mut archived = item("Whole Milk", "0");
    archived.deleted_at = Some(Utc::now());
    let alerts = vec![StockAlert {
        item_id: archived.id,
        threshold: dec("50"),
    }];

    let triggered = evaluate_alerts(&alerts, &[archived], None).unwrap();
    assert!(triggered.is_empty());
}

#[test]
fn test_unknown_item_is_an_error() {
    let catalog = vec![item("Whole Milk", "30")];
    let alerts = vec![StockAlert {
        item_id: Uuid::new_v4(),
        threshold: dec("50"),
    }];

    assert!(matches!(
        evaluate_alerts(&alerts, &catalog, None),
        Err(EngineError::NotFound(_))
    ));
}

#[test]
fn test_nonpositive_threshold_rejected() {
    let catalog = vec![item("Whole Milk", "30")];
    for bad in ["0", "-5"] {
        let alerts = vec![StockAlert {
            item_id: catalog[0].id,
            threshold: dec(bad),
        }];
        assert!(matches!(
            evaluate_alerts(&alerts, &catalog, None),
            Err(EngineError::Validation { .. })
        ));
    }
}

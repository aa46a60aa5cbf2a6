//! Unit conversion between catalog measurement units
//!
//! Pound and ounce convert as weights; ounce, gallon, liter, and
//! milliliter convert as fluid volumes through an intermediate milliliter
//! representation. Count units never convert into anything else, and a
//! failed conversion is always a distinct outcome from a zero quantity.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use shared::Unit;

/// Ounces per one unit, for units measurable as weight
fn ounces_per(unit: Unit) -> Option<Decimal> {
    match unit {
        Unit::Pound => Some(Decimal::from(16)),
        Unit::Ounce => Some(Decimal::ONE),
        _ => None,
    }
}

/// Milliliters per one unit, for units measurable as fluid volume
fn milliliters_per(unit: Unit) -> Option<Decimal> {
    match unit {
        // 1 fl oz = 29.5735295625 mL
        Unit::Ounce => Some(Decimal::new(295_735_295_625, 10)),
        // 1 gallon = 3785.411784 mL
        Unit::Gallon => Some(Decimal::new(3_785_411_784, 6)),
        Unit::Liter => Some(Decimal::from(1000)),
        Unit::Milliliter => Some(Decimal::ONE),
        Unit::Each | Unit::Pound => None,
    }
}

/// Convert a quantity from one unit to another
///
/// Same-unit conversion is the identity and never fails. Weight and
/// volume never convert into each other, and `each` participates in no
/// conversion other than identity.
pub fn convert(amount: Decimal, from: Unit, to: Unit) -> EngineResult<Decimal> {
    if amount < Decimal::ZERO {
        return Err(EngineError::Validation {
            field: "amount".to_string(),
            message: "Conversion amount cannot be negative".to_string(),
        });
    }

    if from == to {
        return Ok(amount);
    }

    if let (Some(from_oz), Some(to_oz)) = (ounces_per(from), ounces_per(to)) {
        return Ok(amount * from_oz / to_oz);
    }

    if let (Some(from_ml), Some(to_ml)) = (milliliters_per(from), milliliters_per(to)) {
        return Ok(amount * from_ml / to_ml);
    }

    Err(EngineError::UnsupportedConversion { from, to })
}

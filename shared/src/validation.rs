//! Validation utilities for the Café POS costing platform

use rust_decimal::Decimal;

// ============================================================================
// Cost & Pack Validations
// ============================================================================

/// Validate pack size is a positive integer (units per supplier pack)
pub fn validate_pack_size(pack_size: i32) -> Result<(), &'static str> {
    if pack_size < 1 {
        return Err("Pack size must be at least 1");
    }
    Ok(())
}

/// Validate a monetary cost is non-negative
pub fn validate_cost(cost: Decimal) -> Result<(), &'static str> {
    if cost < Decimal::ZERO {
        return Err("Cost cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Recipe Line Validations
// ============================================================================

/// Validate a recipe line quantity is non-negative
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate loss percentage is between 0 and 100
pub fn validate_loss_percent(loss_percent: Decimal) -> Result<(), &'static str> {
    if loss_percent < Decimal::ZERO || loss_percent > Decimal::from(100) {
        return Err("Loss percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a stock level is non-negative
pub fn validate_stock(stock: Decimal) -> Result<(), &'static str> {
    if stock < Decimal::ZERO {
        return Err("Stock cannot be negative");
    }
    Ok(())
}

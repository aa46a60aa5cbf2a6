//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Measurement units an inventory item can be stocked and costed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Countable items (cups, lids, pastries)
    Each,
    Pound,
    /// Dry weight against pounds, fluid volume against the volume units
    Ounce,
    Gallon,
    Liter,
    Milliliter,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Each => "each",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Gallon => "gallon",
            Unit::Liter => "liter",
            Unit::Milliliter => "milliliter",
        }
    }

    /// Parse a unit from catalog or recipe text, accepting common
    /// abbreviations ("oz", "lb", "ml", ...)
    pub fn parse(s: &str) -> Option<Unit> {
        match s.trim().to_lowercase().as_str() {
            "each" | "ea" | "unit" | "count" => Some(Unit::Each),
            "pound" | "pounds" | "lb" | "lbs" => Some(Unit::Pound),
            "ounce" | "ounces" | "oz" | "fl oz" | "floz" => Some(Unit::Ounce),
            "gallon" | "gallons" | "gal" => Some(Unit::Gallon),
            "liter" | "liters" | "litre" | "litres" | "l" => Some(Unit::Liter),
            "milliliter" | "milliliters" | "ml" => Some(Unit::Milliliter),
            _ => None,
        }
    }

    /// Whether this unit can be read as a count
    pub fn is_count(&self) -> bool {
        matches!(self, Unit::Each)
    }

    /// Whether this unit can be read as a weight
    pub fn is_weight(&self) -> bool {
        matches!(self, Unit::Pound | Unit::Ounce)
    }

    /// Whether this unit can be read as a fluid volume (ounce is treated
    /// as a fluid ounce in volume contexts)
    pub fn is_volume(&self) -> bool {
        matches!(
            self,
            Unit::Ounce | Unit::Gallon | Unit::Liter | Unit::Milliliter
        )
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Measurement classes for reporting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    Count,
    Weight,
    Volume,
}

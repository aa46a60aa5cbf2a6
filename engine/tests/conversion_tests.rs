//! Unit conversion tests
//!
//! Covers identity conversion, exact weight ratios, volume conversion
//! through milliliters, and cross-class failure.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use costing_engine::error::EngineError;
use costing_engine::services::convert;
use shared::Unit;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Same-unit conversion is the identity for every unit
    #[test]
    fn test_identity_conversion() {
        for unit in [
            Unit::Each,
            Unit::Pound,
            Unit::Ounce,
            Unit::Gallon,
            Unit::Liter,
            Unit::Milliliter,
        ] {
            let amount = dec("12.75");
            assert_eq!(convert(amount, unit, unit).unwrap(), amount);
        }
    }

    /// Identity holds for zero as well
    #[test]
    fn test_identity_zero() {
        assert_eq!(
            convert(Decimal::ZERO, Unit::Each, Unit::Each).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_pound_to_ounce() {
        assert_eq!(convert(dec("1"), Unit::Pound, Unit::Ounce).unwrap(), dec("16"));
        assert_eq!(
            convert(dec("2.5"), Unit::Pound, Unit::Ounce).unwrap(),
            dec("40")
        );
    }

    #[test]
    fn test_ounce_to_pound() {
        assert_eq!(convert(dec("16"), Unit::Ounce, Unit::Pound).unwrap(), dec("1"));
        assert_eq!(
            convert(dec("8"), Unit::Ounce, Unit::Pound).unwrap(),
            dec("0.5")
        );
    }

    #[test]
    fn test_fluid_ounce_to_milliliter() {
        assert_eq!(
            convert(dec("1"), Unit::Ounce, Unit::Milliliter).unwrap(),
            dec("29.5735295625")
        );
    }

    #[test]
    fn test_gallon_to_liter() {
        assert_eq!(
            convert(dec("1"), Unit::Gallon, Unit::Liter).unwrap(),
            dec("3.785411784")
        );
    }

    #[test]
    fn test_liter_to_milliliter() {
        assert_eq!(
            convert(dec("1.5"), Unit::Liter, Unit::Milliliter).unwrap(),
            dec("1500")
        );
    }

    /// Any volume unit converts to any other volume unit through
    /// milliliters
    #[test]
    fn test_gallon_to_fluid_ounce() {
        // 3785.411784 / 29.5735295625 = 128 fl oz per gallon
        let ounces = convert(dec("1"), Unit::Gallon, Unit::Ounce).unwrap();
        assert!((ounces - dec("128")).abs() < dec("0.000001"));
    }

    /// Count never converts into weight or volume, for any amount
    /// including zero
    #[test]
    fn test_each_conversions_fail() {
        for target in [Unit::Pound, Unit::Ounce, Unit::Gallon, Unit::Liter, Unit::Milliliter] {
            assert!(matches!(
                convert(dec("1"), Unit::Each, target),
                Err(EngineError::UnsupportedConversion { .. })
            ));
            assert!(matches!(
                convert(Decimal::ZERO, Unit::Each, target),
                Err(EngineError::UnsupportedConversion { .. })
            ));
            assert!(matches!(
                convert(dec("1"), target, Unit::Each),
                Err(EngineError::UnsupportedConversion { .. })
            ));
        }
    }

    /// Weight and volume never convert into each other
    #[test]
    fn test_cross_class_conversions_fail() {
        for target in [Unit::Gallon, Unit::Liter, Unit::Milliliter] {
            assert!(matches!(
                convert(dec("1"), Unit::Pound, target),
                Err(EngineError::UnsupportedConversion { .. })
            ));
            assert!(matches!(
                convert(dec("1"), target, Unit::Pound),
                Err(EngineError::UnsupportedConversion { .. })
            ));
        }
    }

    /// Failure is distinct from zero: an unsupported pair errors rather
    /// than returning zero
    #[test]
    fn test_failure_not_coerced_to_zero() {
        let result = convert(dec("5"), Unit::Each, Unit::Ounce);
        assert!(result.is_err());
    }

    /// Negative amounts are a caller error, rejected up front
    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            convert(dec("-1"), Unit::Pound, Unit::Ounce),
            Err(EngineError::Validation { .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for positive amounts up to 1000 with 3 decimal places
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=1_000_000i64).prop_map(|n| Decimal::new(n, 3))
    }

    fn volume_unit_strategy() -> impl Strategy<Value = Unit> {
        prop_oneof![
            Just(Unit::Ounce),
            Just(Unit::Gallon),
            Just(Unit::Liter),
            Just(Unit::Milliliter),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Pound/ounce round-trips are exact
        #[test]
        fn prop_weight_round_trip_exact(amount in amount_strategy()) {
            let ounces = convert(amount, Unit::Pound, Unit::Ounce).unwrap();
            let back = convert(ounces, Unit::Ounce, Unit::Pound).unwrap();
            prop_assert_eq!(back, amount);
        }

        /// Volume round-trips through milliliters stay within tolerance
        #[test]
        fn prop_volume_round_trip(
            amount in amount_strategy(),
            from in volume_unit_strategy(),
            to in volume_unit_strategy()
        ) {
            let converted = convert(amount, from, to).unwrap();
            let back = convert(converted, to, from).unwrap();
            prop_assert!((back - amount).abs() <= dec("0.000001"));
        }

        /// Converted amounts are never negative
        #[test]
        fn prop_conversion_preserves_sign(
            amount in amount_strategy(),
            from in volume_unit_strategy(),
            to in volume_unit_strategy()
        ) {
            let converted = convert(amount, from, to).unwrap();
            prop_assert!(converted > Decimal::ZERO);
        }

        /// Conversion scales linearly: converting 2x yields twice the
        /// result
        #[test]
        fn prop_conversion_linear(
            amount in amount_strategy(),
            from in volume_unit_strategy(),
            to in volume_unit_strategy()
        ) {
            let single = convert(amount, from, to).unwrap();
            let double = convert(amount * dec("2"), from, to).unwrap();
            prop_assert!((double - single * dec("2")).abs() <= dec("0.000001"));
        }
    }
}

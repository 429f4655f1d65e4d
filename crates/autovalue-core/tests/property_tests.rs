//! Property-based tests for valuation records and formatting
//!
//! Uses proptest to check the transmission contract and the display helpers.

use autovalue_core::format::{format_price, format_thousands};
use autovalue_core::{PricePosition, Transmission, ValuationRecord};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Strings that are neither `manual` nor `automatic`
fn unknown_transmission_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z -]{0,20}")
        .expect("valid regex")
        .prop_filter("not a known transmission", |s| {
            s != "manual" && s != "automatic"
        })
}

fn transmission_strategy() -> impl Strategy<Value = Transmission> {
    prop_oneof![Just(Transmission::Manual), Just(Transmission::Automatic)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Anything other than the two known values fails to parse
    #[test]
    fn unknown_transmission_is_rejected(raw in unknown_transmission_strategy()) {
        prop_assert!(raw.parse::<Transmission>().is_err());

        let json = serde_json::to_string(&raw).unwrap();
        prop_assert!(serde_json::from_str::<Transmission>(&json).is_err());
    }

    /// The wire value of every variant parses back to that variant
    #[test]
    fn transmission_wire_value_parses(t in transmission_strategy()) {
        prop_assert_eq!(t.as_str().parse::<Transmission>().unwrap(), t);
    }

    /// Every other field of a record accepts any value of its type
    #[test]
    fn record_accepts_any_primitive_values(
        make in ".{0,40}",
        model in ".{0,40}",
        vin in ".{0,40}",
        year in any::<u16>(),
        mileage in any::<u32>(),
        reserve in prop::option::of(0.0f64..1e9),
        average in prop::option::of(0.0f64..1e9),
        transmission in transmission_strategy(),
    ) {
        let record = ValuationRecord {
            make, model, vin, year, mileage, transmission,
            reserve_price: reserve,
            average_price: average,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ValuationRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.has_valuation(), reserve.is_some() && average.is_some());
        prop_assert_eq!(back.transmission, transmission);
    }

    /// Grouping never changes the digits
    #[test]
    fn thousands_keeps_digits(value in any::<u64>()) {
        let grouped = format_thousands(value);
        prop_assert_eq!(grouped.replace(',', ""), value.to_string());
        for group in grouped.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Prices always carry the currency symbol
    #[test]
    fn price_has_symbol(amount in 0.0f64..1e12) {
        prop_assert!(format_price(amount).starts_with('$'));
    }

    /// A reserve equal to the average is always at market
    #[test]
    fn equal_prices_are_at_market(price in 1.0f64..1e9) {
        prop_assert_eq!(PricePosition::compare(price, price), PricePosition::AtMarket);
    }
}

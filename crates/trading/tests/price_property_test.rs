// Property-based tests for asking price conversion

use proptest::prelude::*;
use rust_decimal::Decimal;
use trading::price::{price_in_wei, total_cost};
use tokens::U256;

const FINNEY: u64 = 1_000_000_000_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A higher asking price never converts to fewer wei
    #[test]
    fn prop_price_conversion_monotonic(
        a in 0u64..10_000_000,
        b in 0u64..10_000_000,
        decimals in 0u32..=6,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // prices with up to six decimals of ether
        let low_text = Decimal::new(low as i64, 6).to_string();
        let high_text = Decimal::new(high as i64, 6).to_string();

        prop_assert!(price_in_wei(&low_text, decimals) <= price_in_wei(&high_text, decimals));
    }

    /// Whole finney prices convert exactly at three decimals
    #[test]
    fn prop_whole_finney_exact(finney in 0u64..1_000_000) {
        let text = Decimal::new(finney as i64, 3).to_string();
        prop_assert_eq!(price_in_wei(&text, 3), U256::from(finney) * U256::from(FINNEY));
    }

    /// Text that isn't a number is worth nothing
    #[test]
    fn prop_non_numeric_is_zero(text in "[a-zA-Z ]{0,12}") {
        prop_assert_eq!(price_in_wei(&text, 3), U256::ZERO);
        prop_assert_eq!(total_cost(1, &text), None);
    }

    /// The displayed total scales with the quantity
    #[test]
    fn prop_total_scales_with_quantity(milli in 1u64..1_000_000, quantity in 0u32..100) {
        let text = Decimal::new(milli as i64, 3).to_string();
        let single = total_cost(1, &text).unwrap();
        prop_assert_eq!(total_cost(quantity, &text).unwrap(), single * Decimal::from(quantity));
    }
}

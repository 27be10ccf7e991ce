//! Asking price arithmetic for the sell screen.

use alloy_primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy};
use tokens::units::{self, Unit};

/// Convert an asking price in ether to wei.
///
/// The price is cut to `decimals` places of ether first (3 keeps whole
/// finney). Empty, malformed or negative text is worth zero.
pub fn price_in_wei(text: &str, decimals: u32) -> U256 {
    let Ok(value) = units::parse_amount(text) else {
        return U256::ZERO;
    };
    if value <= Decimal::ZERO {
        return U256::ZERO;
    }

    let kept = value.round_dp_with_strategy(decimals, RoundingStrategy::ToZero);
    units::to_wei(kept, Unit::Ether).unwrap_or(U256::ZERO)
}

/// `quantity × price` in ether, or `None` when the price text isn't a number.
pub fn total_cost(quantity: u32, text: &str) -> Option<Decimal> {
    let price = units::parse_amount(text).ok()?;
    price.checked_mul(Decimal::from(quantity)).map(|total| total.normalize())
}

pub fn format_total(total: Decimal, currency_symbol: &str) -> String {
    format!("{} {}", total.normalize(), currency_symbol)
}

/// Whether the text converts to a non-negative wei amount
pub fn is_valid_amount(text: &str) -> bool {
    units::eth_to_wei(text).is_ok()
}

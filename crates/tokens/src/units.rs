//! Ether denomination conversions.
//!
//! Amounts entered by users are `Decimal`s; amounts on chain are `U256` wei.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use shared::{Error, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Wei,
    Kwei,
    Mwei,
    Gwei,
    Szabo,
    Finney,
    Ether,
}

impl Unit {
    /// Power of ten this unit is worth in wei
    pub fn exponent(&self) -> u32 {
        match self {
            Unit::Wei => 0,
            Unit::Kwei => 3,
            Unit::Mwei => 6,
            Unit::Gwei => 9,
            Unit::Szabo => 12,
            Unit::Finney => 15,
            Unit::Ether => 18,
        }
    }

    pub fn wei_factor(&self) -> U256 {
        pow10(self.exponent())
    }
}

fn pow10(exponent: u32) -> U256 {
    U256::from(10u8).pow(U256::from(exponent))
}

/// Convert an amount in `unit` to wei, truncating anything below one wei.
pub fn to_wei(value: Decimal, unit: Unit) -> Result<U256> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::InvalidAmount(format!("negative amount {}", value)));
    }

    let mantissa = U256::from(value.mantissa().unsigned_abs());
    Ok(mantissa * unit.wei_factor() / pow10(value.scale()))
}

/// Convert wei to an amount in `unit`.
pub fn from_wei(wei: U256, unit: Unit) -> Result<Decimal> {
    let raw = u128::try_from(wei)
        .ok()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| Error::InvalidAmount(format!("{} wei is out of range", wei)))?;

    let value = Decimal::try_from_i128_with_scale(raw, unit.exponent())
        .map_err(|e| Error::InvalidAmount(e.to_string()))?;
    Ok(value.normalize())
}

/// Parse user-entered ether text, accepting plain or scientific notation.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount("empty amount".to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::InvalidAmount(trimmed.to_string()))
}

/// Convert ether text to wei, failing for anything that isn't a non-negative number.
pub fn eth_to_wei(text: &str) -> Result<U256> {
    to_wei(parse_amount(text)?, Unit::Ether)
}

//! Token id list formats.
//!
//! Balances travel between screens as comma separated hex ids (`"1a,1b"`),
//! while marketplace assets carry a single decimal id.

use alloy_primitives::U256;
use shared::{Error, Result};

/// Parse a single hex id, with or without a `0x` prefix.
pub fn parse_hex_id(text: &str) -> Result<U256> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::InvalidTokenId(text.to_string()));
    }

    U256::from_str_radix(digits, 16).map_err(|_| Error::InvalidTokenId(text.to_string()))
}

/// Parse a comma separated list of hex ids. Empty entries are skipped.
pub fn parse_hex_id_list(text: &str) -> Result<Vec<U256>> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_hex_id)
        .collect()
}

/// Format ids as a comma separated lowercase hex list without prefixes.
pub fn format_hex_id_list(ids: &[U256], keep_zeros: bool) -> String {
    ids.iter()
        .filter(|id| keep_zeros || !id.is_zero())
        .map(|id| format!("{:x}", id))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a decimal token id such as the ones reported by marketplaces.
pub fn parse_decimal_id(text: &str) -> Result<U256> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidTokenId(text.to_string()));
    }

    U256::from_str_radix(trimmed, 10).map_err(|_| Error::InvalidTokenId(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_list() {
        let ids = parse_hex_id_list("0x1, 0a,ff").unwrap();
        assert_eq!(ids, vec![U256::from(1), U256::from(10), U256::from(255)]);
    }

    #[test]
    fn test_parse_hex_list_skips_empty_entries() {
        assert_eq!(parse_hex_id_list("").unwrap(), Vec::<U256>::new());
        assert_eq!(parse_hex_id_list("1,,2,").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_hex_list_rejects_garbage() {
        assert!(matches!(
            parse_hex_id_list("1,zz"),
            Err(Error::InvalidTokenId(_))
        ));
        assert!(parse_hex_id("0x").is_err());
    }

    #[test]
    fn test_format_keeps_or_drops_zeros() {
        let ids = vec![U256::from(0x1f), U256::ZERO, U256::from(2)];
        assert_eq!(format_hex_id_list(&ids, true), "1f,0,2");
        assert_eq!(format_hex_id_list(&ids, false), "1f,2");
    }

    #[test]
    fn test_parse_decimal_id() {
        assert_eq!(parse_decimal_id("1234").unwrap(), U256::from(1234));
        assert!(parse_decimal_id("-5").is_err());
        assert!(parse_decimal_id("12ab").is_err());
        assert!(parse_decimal_id("").is_err());
    }
}

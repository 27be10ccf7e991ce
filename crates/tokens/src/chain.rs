use alloy_primitives::Address;
use shared::{Error, Result};

/// Supported EVM-compatible blockchains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvmChain {
    Ethereum,
    Classic,
    Sepolia,
    Polygon,
    BinanceSmartChain,
}

impl EvmChain {
    pub fn name(&self) -> &'static str {
        match self {
            EvmChain::Ethereum => "Ethereum",
            EvmChain::Classic => "Ethereum Classic",
            EvmChain::Sepolia => "Sepolia",
            EvmChain::Polygon => "Polygon",
            EvmChain::BinanceSmartChain => "Binance Smart Chain",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            EvmChain::Ethereum => 1,
            EvmChain::Classic => 61,
            EvmChain::Sepolia => 11_155_111,
            EvmChain::Polygon => 137,
            EvmChain::BinanceSmartChain => 56,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(EvmChain::Ethereum),
            61 => Some(EvmChain::Classic),
            11_155_111 => Some(EvmChain::Sepolia),
            137 => Some(EvmChain::Polygon),
            56 => Some(EvmChain::BinanceSmartChain),
            _ => None,
        }
    }

    /// Symbol of the native currency used to price sales
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            EvmChain::Ethereum | EvmChain::Sepolia => "ETH",
            EvmChain::Classic => "ETC",
            EvmChain::Polygon => "POL",
            EvmChain::BinanceSmartChain => "BNB",
        }
    }
}

/// Validate an Ethereum-compatible address format (0x + 40 hex chars)
pub fn validate_address(address: &str) -> Result<Address> {
    if !address.starts_with("0x") {
        return Err(Error::InvalidWalletAddress(
            "Address must start with 0x".to_string(),
        ));
    }

    if address.len() != 42 {
        return Err(Error::InvalidWalletAddress(
            "Address must be 42 characters (0x + 40 hex)".to_string(),
        ));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidWalletAddress(
            "Address must contain only hexadecimal characters".to_string(),
        ));
    }

    address
        .parse::<Address>()
        .map_err(|e| Error::InvalidWalletAddress(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address_valid() {
        let result = validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_address_case_insensitive() {
        let mixed = validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").unwrap();
        let lower = validate_address("0x742d35cc6634c0532925a3b844bc9e7595f0beb0").unwrap();
        assert_eq!(mixed, lower);
    }

    #[test]
    fn test_validate_address_invalid_prefix() {
        let result = validate_address("742d35Cc6634C0532925a3b844Bc9e7595f0bEb");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_address_invalid_length() {
        let result = validate_address("0x742d35Cc");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_address_invalid_chars() {
        let result = validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbZ");
        assert!(result.is_err());
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(EvmChain::Ethereum.chain_id(), 1);
        assert_eq!(EvmChain::Classic.chain_id(), 61);
        assert_eq!(EvmChain::Polygon.chain_id(), 137);
        assert_eq!(EvmChain::from_chain_id(56), Some(EvmChain::BinanceSmartChain));
        assert_eq!(EvmChain::from_chain_id(999), None);
    }

    #[test]
    fn test_chain_names() {
        assert_eq!(EvmChain::Ethereum.name(), "Ethereum");
        assert_eq!(EvmChain::BinanceSmartChain.name(), "Binance Smart Chain");
        assert_eq!(EvmChain::Sepolia.currency_symbol(), "ETH");
    }
}

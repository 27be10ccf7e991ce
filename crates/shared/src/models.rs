use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

// Wallet models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub name: Option<String>,
}

impl Wallet {
    pub fn new(address: Address) -> Self {
        Self { address, name: None }
    }
}

// Token models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub chain_id: u64,
    pub is_enabled: bool,
}

impl TokenInfo {
    pub fn new(address: Address, name: &str, symbol: &str, chain_id: u64) -> Self {
        Self {
            address,
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 0,
            chain_id,
            is_enabled: true,
        }
    }
}

/// Interface a token contract was detected to implement.
///
/// The discriminants are stable: they travel inside serialized tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ContractType {
    NotSet = 0,
    Ethereum = 1,
    Erc20 = 2,
    Erc721 = 3,
    Erc875 = 4,
    Erc875Legacy = 5,
    Erc721Legacy = 6,
    Erc721Ticket = 7,
    Erc721Undetermined = 8,
    Other = 9,
}

impl ContractType {
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        const ALL: [ContractType; 10] = [
            ContractType::NotSet,
            ContractType::Ethereum,
            ContractType::Erc20,
            ContractType::Erc721,
            ContractType::Erc875,
            ContractType::Erc875Legacy,
            ContractType::Erc721Legacy,
            ContractType::Erc721Ticket,
            ContractType::Erc721Undetermined,
            ContractType::Other,
        ];
        ALL.get(ordinal as usize).copied()
    }

    pub fn is_non_fungible(&self) -> bool {
        matches!(
            self,
            ContractType::Erc721
                | ContractType::Erc721Legacy
                | ContractType::Erc721Ticket
                | ContractType::Erc721Undetermined
                | ContractType::Erc875
                | ContractType::Erc875Legacy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_type_ordinal_roundtrip() {
        for ordinal in 0..10u8 {
            let contract_type = ContractType::from_ordinal(ordinal).unwrap();
            assert_eq!(contract_type.ordinal(), ordinal);
        }
        assert_eq!(ContractType::from_ordinal(10), None);
    }

    #[test]
    fn test_contract_type_serde_name() {
        let json = serde_json::to_string(&ContractType::Erc721Ticket).unwrap();
        assert_eq!(json, "\"ERC721_TICKET\"");
    }

    #[test]
    fn test_fungibility() {
        assert!(ContractType::Erc721Ticket.is_non_fungible());
        assert!(!ContractType::Erc20.is_non_fungible());
        assert!(!ContractType::Ethereum.is_non_fungible());
    }
}

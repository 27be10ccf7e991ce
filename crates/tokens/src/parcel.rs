use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ContractType, Result, TokenInfo};

/// Serialized ticket balance handed from one screen to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketParcel {
    pub info: TokenInfo,
    pub wallet: Address,
    pub network_name: String,
    pub update_time: DateTime<Utc>,
    pub contract_type: ContractType,
    pub balance: Vec<U256>,
}

impl TicketParcel {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

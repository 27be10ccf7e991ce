use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, TradingError};

/// A sale offer for some of the wallet's tickets, priced per ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub contract_address: Address,
    /// Price of one ticket in wei
    pub price: U256,
    /// `price × token_ids.len()`
    pub total_value: U256,
    /// Positions of the offered tickets in the wallet's balance
    pub indices: Vec<u16>,
    pub token_ids: Vec<U256>,
    pub created_at: DateTime<Utc>,
}

impl SaleOrder {
    pub fn new(
        contract_address: Address,
        price: U256,
        token_ids: Vec<U256>,
        indices: Vec<u16>,
    ) -> Result<Self> {
        if token_ids.is_empty() || token_ids.len() != indices.len() {
            return Err(TradingError::ValidationError(format!(
                "{} token ids for {} indices",
                token_ids.len(),
                indices.len()
            )));
        }

        let total_value = price
            .checked_mul(U256::from(token_ids.len()))
            .ok_or_else(|| {
                TradingError::Overflow(format!("{} wei × {} tickets", price, token_ids.len()))
            })?;

        Ok(Self {
            contract_address,
            price,
            total_value,
            indices,
            token_ids,
            created_at: Utc::now(),
        })
    }

    pub fn first_token_id(&self) -> U256 {
        self.token_ids.first().copied().unwrap_or(U256::ZERO)
    }

    pub fn quantity(&self) -> usize {
        self.token_ids.len()
    }
}

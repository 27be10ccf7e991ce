use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use shared::{ContractType, Result, TokenInfo};

use crate::abi::EncodedFunction;
use crate::transaction::Transaction;

/// Lookup of contracts that have a token script definition installed.
pub trait AssetDefinitions {
    fn has_definition(&self, chain_id: u64, address: Address) -> bool;
}

/// Behaviour shared by every kind of token a wallet holds.
///
/// Defaults describe a fungible token; non-fungible kinds override the
/// array balance methods.
pub trait Token {
    fn info(&self) -> &TokenInfo;

    /// Wallet that owns this balance
    fn wallet(&self) -> Address;

    fn contract_type(&self) -> ContractType;

    /// Short label shown next to the balance, e.g. `ERC721T`
    fn contract_type_label(&self) -> &'static str;

    fn ticket_count(&self) -> usize;

    fn string_balance(&self) -> String {
        self.ticket_count().to_string()
    }

    fn full_balance(&self) -> String;

    fn has_positive_balance(&self) -> bool {
        self.ticket_count() > 0
    }

    fn has_array_balance(&self) -> bool {
        false
    }

    fn token_id(&self, _index: usize) -> Option<U256> {
        None
    }

    fn array_balance(&self) -> Vec<U256> {
        Vec::new()
    }

    fn non_zero_array_balance(&self) -> Vec<U256> {
        Vec::new()
    }

    /// Whether `new_balance` differs from the held balance
    fn check_balance_change(&self, new_balance: &[U256]) -> bool;

    fn zeroise_balance(&mut self);

    fn transfer_function(&self, to: Address, token_ids: &[U256]) -> Result<EncodedFunction>;

    fn requires_transaction_refresh_at(&mut self, now: DateTime<Utc>) -> bool;

    fn requires_transaction_refresh(&mut self) -> bool {
        self.requires_transaction_refresh_at(Utc::now())
    }

    fn is_sent(&self, _transaction: &Transaction) -> bool {
        true
    }

    fn is_non_fungible(&self) -> bool {
        false
    }

    fn is_erc721_ticket(&self) -> bool {
        false
    }

    fn contract_type_valid(&self) -> bool {
        false
    }

    fn is_matched_in_definition(&self) -> bool {
        false
    }

    /// Whether the asset view may fold this token into a neighbouring group
    fn groups_in_asset_view(&self) -> bool {
        true
    }
}

use alloy_primitives::{Address, B256, U256};
use chrono::{DateTime, Duration, Utc};
use shared::{ContractType, Error, Result, TokenInfo};
use tracing::{debug, warn};

use crate::abi::{self, EncodedFunction};
use crate::ids::{format_hex_id_list, parse_decimal_id, parse_hex_id_list};
use crate::parcel::TicketParcel;
use crate::token::{AssetDefinitions, Token};
use crate::transaction::{ContractTransaction, Transaction};

/// Default gap between transaction refreshes for scripted tokens
pub const DEFAULT_TX_REFRESH_INTERVAL_SECS: i64 = 5 * 60;

/// Balance of ERC-721 tickets held by one wallet for one contract.
///
/// The balance is an ordered list of token ids. An id of zero marks a burned
/// or vacated slot: it is kept in the list but never counted.
#[derive(Debug, Clone)]
pub struct Erc721Ticket {
    info: TokenInfo,
    wallet: Address,
    balance: Vec<U256>,
    update_time: DateTime<Utc>,
    network_name: String,
    contract_type: ContractType,
    matched_in_definition: bool,
    has_token_script: bool,
    balance_changed: bool,
    last_tx_check: Option<DateTime<Utc>>,
    refresh_interval: Duration,
}

impl Erc721Ticket {
    pub fn new(
        info: TokenInfo,
        wallet: Address,
        balance: Vec<U256>,
        update_time: DateTime<Utc>,
        network_name: &str,
        contract_type: ContractType,
    ) -> Self {
        Self {
            info,
            wallet,
            balance,
            update_time,
            network_name: network_name.to_string(),
            contract_type,
            matched_in_definition: false,
            has_token_script: false,
            balance_changed: false,
            last_tx_check: None,
            refresh_interval: Duration::seconds(DEFAULT_TX_REFRESH_INTERVAL_SECS),
        }
    }

    /// Build from a stored comma separated hex balance.
    ///
    /// A malformed balance string yields an empty balance rather than an error,
    /// the next refresh replaces it anyway.
    pub fn from_hex_balance(
        info: TokenInfo,
        wallet: Address,
        balance: &str,
        update_time: DateTime<Utc>,
        network_name: &str,
        contract_type: ContractType,
    ) -> Self {
        let ids = parse_hex_id_list(balance).unwrap_or_else(|e| {
            warn!("Discarding unreadable balance for {}: {}", info.address, e);
            Vec::new()
        });
        Self::new(info, wallet, ids, update_time, network_name, contract_type)
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn address(&self) -> Address {
        self.info.address
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    pub fn update_time(&self) -> DateTime<Utc> {
        self.update_time
    }

    /// Raw balance including zeroed slots
    pub fn balance(&self) -> &[U256] {
        &self.balance
    }

    pub fn set_has_token_script(&mut self, has_token_script: bool) {
        self.has_token_script = has_token_script;
    }

    pub fn has_token_script(&self) -> bool {
        self.has_token_script
    }

    pub fn check_is_matched_in_definition(&mut self, definitions: &dyn AssetDefinitions) {
        self.matched_in_definition =
            definitions.has_definition(self.info.chain_id, self.info.address);
    }

    /// Replace the balance with a fresh snapshot, remembering whether it changed.
    pub fn update_balance(&mut self, balance: Vec<U256>, update_time: DateTime<Utc>) -> bool {
        let changed = self.check_balance_change(&balance);
        if changed {
            debug!(
                "Ticket balance for {} changed: {} -> {} entries",
                self.info.address,
                self.balance.len(),
                balance.len()
            );
            self.balance_changed = true;
        }
        self.balance = balance;
        self.update_time = update_time;
        changed
    }

    /// Append a marketplace asset to the balance. Ids that aren't decimal
    /// integers are ignored.
    pub fn add_asset(&mut self, token_id: &str) {
        match parse_decimal_id(token_id) {
            Ok(id) => self.balance.push(id),
            Err(e) => debug!("Skipping asset for {}: {}", self.info.address, e),
        }
    }

    /// Reduce a hex id list to its first `quantity` ids.
    pub fn prune_id_list(&self, id_list: &str, quantity: usize) -> Result<Vec<U256>> {
        let mut ids = parse_hex_id_list(id_list)?;
        ids.truncate(quantity);
        Ok(ids)
    }

    /// Positions of `ids` inside the balance.
    ///
    /// Every id must be a held, non-zero token and may appear only once.
    pub fn indices_of(&self, ids: &[U256]) -> Result<Vec<u16>> {
        if ids.is_empty() {
            return Err(Error::Validation("no token ids given".to_string()));
        }

        let mut indices = Vec::with_capacity(ids.len());
        for id in ids {
            let position = self
                .balance
                .iter()
                .position(|held| held == id)
                .filter(|_| !id.is_zero())
                .ok_or_else(|| Error::TokenNotHeld(format!("{:x}", id)))?;

            let index = u16::try_from(position).map_err(|_| {
                warn!(
                    "Ticket 0x{:x} of {} sits at position {}, past the u16 index range",
                    id, self.info.address, position
                );
                Error::IndexOutOfRange(position)
            })?;

            if indices.contains(&index) {
                return Err(Error::DuplicateTokenId(format!("{:x}", id)));
            }
            indices.push(index);
        }
        Ok(indices)
    }

    /// Positions of the ids in a hex id list, `None` when
    /// [`Erc721Ticket::indices_of`] rejects them.
    pub fn ticket_indices(&self, id_list: &str) -> Option<Vec<u16>> {
        let ids = parse_hex_id_list(id_list).ok()?;
        self.indices_of(&ids).ok()
    }

    pub fn pass_to_function(
        &self,
        expiry: U256,
        token_ids: &[U256],
        v: u8,
        r: B256,
        s: B256,
        recipient: Address,
    ) -> EncodedFunction {
        abi::pass_to(expiry, token_ids, v, r, s, recipient)
    }

    pub fn to_parcel(&self) -> TicketParcel {
        TicketParcel {
            info: self.info.clone(),
            wallet: self.wallet,
            network_name: self.network_name.clone(),
            update_time: self.update_time,
            contract_type: self.contract_type,
            balance: self.balance.clone(),
        }
    }

    pub fn from_parcel(parcel: TicketParcel) -> Self {
        Self::new(
            parcel.info,
            parcel.wallet,
            parcel.balance,
            parcel.update_time,
            &parcel.network_name,
            parcel.contract_type,
        )
    }
}

impl Token for Erc721Ticket {
    fn info(&self) -> &TokenInfo {
        &self.info
    }

    fn wallet(&self) -> Address {
        self.wallet
    }

    fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    fn contract_type_label(&self) -> &'static str {
        "ERC721T"
    }

    fn ticket_count(&self) -> usize {
        self.balance.iter().filter(|id| !id.is_zero()).count()
    }

    fn full_balance(&self) -> String {
        format_hex_id_list(&self.balance, true)
    }

    fn has_array_balance(&self) -> bool {
        true
    }

    fn token_id(&self, index: usize) -> Option<U256> {
        self.balance.get(index).copied()
    }

    fn array_balance(&self) -> Vec<U256> {
        self.non_zero_array_balance()
    }

    fn non_zero_array_balance(&self) -> Vec<U256> {
        let mut ids: Vec<U256> = Vec::with_capacity(self.balance.len());
        for id in &self.balance {
            if !id.is_zero() && !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }

    // Index-wise comparison: a reordered but otherwise equal balance counts as a change.
    fn check_balance_change(&self, new_balance: &[U256]) -> bool {
        new_balance.len() != self.balance.len()
            || new_balance
                .iter()
                .zip(&self.balance)
                .any(|(new, held)| new != held)
    }

    fn zeroise_balance(&mut self) {
        self.balance.clear();
    }

    fn transfer_function(&self, to: Address, token_ids: &[U256]) -> Result<EncodedFunction> {
        match token_ids {
            [] => Err(Error::EmptyTransfer),
            [token_id] => Ok(abi::safe_transfer_from(self.wallet, to, *token_id)),
            _ => Err(Error::BatchTransferUnsupported("ERC721Ticket".to_string())),
        }
    }

    /// Transactions are refreshed when the balance changed since the last
    /// call, and for scripted tokens with a balance once per refresh interval
    /// (the first call always counts as due).
    fn requires_transaction_refresh_at(&mut self, now: DateTime<Utc>) -> bool {
        let mut requires_update = std::mem::take(&mut self.balance_changed);

        if self.has_token_script && self.has_positive_balance() {
            let due = self
                .last_tx_check
                .map_or(true, |last| now - last > self.refresh_interval);
            if due {
                self.last_tx_check = Some(now);
                requires_update = true;
            }
        }

        requires_update
    }

    fn is_sent(&self, transaction: &Transaction) -> bool {
        !matches!(
            transaction
                .first_operation()
                .and_then(|operation| operation.contract.as_ref()),
            Some(ContractTransaction::Erc875 { kind }) if *kind > 0
        )
    }

    fn is_non_fungible(&self) -> bool {
        true
    }

    fn is_erc721_ticket(&self) -> bool {
        true
    }

    // Only constructed for contracts already known to be ERC-721 tickets
    fn contract_type_valid(&self) -> bool {
        true
    }

    fn is_matched_in_definition(&self) -> bool {
        self.matched_in_definition
    }

    fn groups_in_asset_view(&self) -> bool {
        false
    }
}

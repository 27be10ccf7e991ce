use alloy_primitives::{Address, U256};
use shared::Wallet;
use tokio::sync::{broadcast, watch};
use tokens::Erc721Ticket;

/// View-model behind the sell screen. It owns the network side of a sale:
/// signing and submitting the orders happens there.
pub trait SellDetailModel {
    fn set_wallet(&mut self, wallet: &Wallet);

    fn prepare(&mut self, ticket: &Erc721Ticket);

    fn generate_sales_orders(
        &mut self,
        contract_address: Address,
        total_value: U256,
        indices: &[u16],
        first_token_id: U256,
    );

    /// Whether a blocking operation is in progress
    fn progress(&self) -> watch::Receiver<bool>;

    /// Percentage of queued orders processed
    fn queue_progress(&self) -> watch::Receiver<u8>;

    fn push_toast(&self) -> broadcast::Receiver<String>;
}

/// Screen surface the controller drives.
pub trait SellDetailView {
    fn show_progress(&mut self, visible: bool);

    fn update_queue_progress(&mut self, percent: u8);

    fn display_toast(&mut self, message: &str);
}

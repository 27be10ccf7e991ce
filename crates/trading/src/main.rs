use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use shared::config::Config;
use shared::{ContractType, TokenInfo, Wallet};
use std::env;
use tokio::sync::{broadcast, watch};
use tokens::{validate_address, Erc721Ticket, Token};
use tracing::{debug, info, warn};
use trading::{SellDetailController, SellDetailModel, SellDetailView};

const DEFAULT_CONTRACT: &str = "0x0000000000000000000000000000000000000721";
const DEFAULT_WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";

/// Stand-in view-model that logs what would be submitted
struct LoggingModel {
    progress: watch::Sender<bool>,
    queue_progress: watch::Sender<u8>,
    toasts: broadcast::Sender<String>,
}

impl LoggingModel {
    fn new() -> Self {
        Self {
            progress: watch::channel(false).0,
            queue_progress: watch::channel(0).0,
            toasts: broadcast::channel(16).0,
        }
    }
}

impl SellDetailModel for LoggingModel {
    fn set_wallet(&mut self, wallet: &Wallet) {
        info!("Selling from wallet {}", wallet.address);
    }

    fn prepare(&mut self, ticket: &Erc721Ticket) {
        info!(
            "Preparing sale of {} ({} tickets held)",
            ticket.address(),
            ticket.ticket_count()
        );
    }

    fn generate_sales_orders(
        &mut self,
        contract_address: Address,
        total_value: U256,
        indices: &[u16],
        first_token_id: U256,
    ) {
        self.progress.send_replace(true);
        info!(
            "Generating sale orders on {} for indices {:?} (first id 0x{:x}), total {} wei",
            contract_address, indices, first_token_id, total_value
        );
        self.queue_progress.send_replace(100);
        self.progress.send_replace(false);
        if self.toasts.send(format!("{} tickets listed", indices.len())).is_err() {
            debug!("No listeners for sale toast");
        }
    }

    fn progress(&self) -> watch::Receiver<bool> {
        self.progress.subscribe()
    }

    fn queue_progress(&self) -> watch::Receiver<u8> {
        self.queue_progress.subscribe()
    }

    fn push_toast(&self) -> broadcast::Receiver<String> {
        self.toasts.subscribe()
    }
}

struct ConsoleView;

impl SellDetailView for ConsoleView {
    fn show_progress(&mut self, visible: bool) {
        info!("progress visible: {}", visible);
    }

    fn update_queue_progress(&mut self, percent: u8) {
        info!("order queue {}% processed", percent);
    }

    fn display_toast(&mut self, message: &str) {
        info!("toast: {}", message);
    }
}

fn main() -> Result<()> {
    shared::logging::init_logging_pretty();

    let config = Config::from_env()?;

    let mut args = env::args().skip(1);
    let price = args
        .next()
        .context("usage: sell-ticket <price-in-ether> [quantity]")?;
    let quantity = args
        .next()
        .map(|q| q.parse::<u32>())
        .transpose()
        .context("quantity must be a whole number")?;

    let contract = validate_address(
        &env::var("TICKET_CONTRACT").unwrap_or_else(|_| DEFAULT_CONTRACT.to_string()),
    )?;
    let wallet = validate_address(
        &env::var("WALLET_ADDRESS").unwrap_or_else(|_| DEFAULT_WALLET.to_string()),
    )?;
    let balance = env::var("TICKET_BALANCE").unwrap_or_else(|_| "1,2,3".to_string());
    let selection = env::var("TICKET_SELECTION").unwrap_or_else(|_| balance.clone());

    let refresh_secs = i64::try_from(config.tokens.tx_refresh_interval_secs)
        .context("TX_REFRESH_INTERVAL_SECS out of range")?;
    let ticket = Erc721Ticket::from_hex_balance(
        TokenInfo::new(contract, "Tickets", "TKT", config.chain.chain_id),
        wallet,
        &balance,
        Utc::now(),
        &config.chain.network_name,
        ContractType::Erc721Ticket,
    )
    .with_refresh_interval(Duration::seconds(refresh_secs));

    let mut controller = SellDetailController::new(
        LoggingModel::new(),
        ticket,
        &Wallet::new(wallet),
        &selection,
        &config.sale,
    )?;
    controller.on_resume();
    controller.on_price_changed(&price);

    if let Some(quantity) = quantity {
        while controller.quantity() > quantity {
            controller.decrement_quantity();
        }
        while controller.quantity() < quantity && controller.quantity() < controller.available() {
            controller.increment_quantity();
        }
    }

    let confirmation = controller
        .on_sell_pressed()
        .context("sale refused: check the price and quantity")?;
    for warning in &confirmation.warnings {
        warn!("{}", warning);
    }
    info!("Confirming sale for {}", confirmation.total_text);

    let order = controller.confirm_sale()?;
    controller.pump_events(&mut ConsoleView);

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sales_orders_without_toast_listeners() {
        let mut model = LoggingModel::new();
        let progress = model.progress();
        let queue = model.queue_progress();

        model.generate_sales_orders(Address::ZERO, U256::from(5), &[0, 2], U256::from(1));

        assert!(!*progress.borrow());
        assert_eq!(*queue.borrow(), 100);
    }

    #[test]
    fn test_generate_sales_orders_sends_toast() {
        let mut model = LoggingModel::new();
        let mut toasts = model.push_toast();

        model.generate_sales_orders(Address::ZERO, U256::from(5), &[0, 2], U256::from(1));

        assert_eq!(toasts.try_recv().unwrap(), "2 tickets listed");
    }
}

use alloy_primitives::U256;
use shared::config::SaleConfig;
use shared::Wallet;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::watch;
use tokens::ids::{format_hex_id_list, parse_hex_id_list};
use tokens::{Erc721Ticket, EvmChain, Token};
use tracing::{debug, info, warn};

use crate::model::{SellDetailModel, SellDetailView};
use crate::order::SaleOrder;
use crate::price::{format_total, is_valid_amount, price_in_wei, total_cost};
use crate::validation::SaleValidator;
use crate::{Result, TradingError};

/// Prompt shown before a sale is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleConfirmation {
    pub total_text: String,
    pub warnings: Vec<String>,
}

/// Presentation logic of the sell screen: collects an asking price and a
/// quantity for tickets picked on the previous screen, and hands the sale
/// to the view-model once confirmed.
pub struct SellDetailController<M: SellDetailModel> {
    model: M,
    ticket: Erc721Ticket,
    selected_ids: Vec<U256>,
    price_text: String,
    quantity: u32,
    total_text: Option<String>,
    currency_symbol: &'static str,
    price_decimals: u32,
    validator: SaleValidator,
    progress: watch::Receiver<bool>,
    queue_progress: watch::Receiver<u8>,
    toasts: broadcast::Receiver<String>,
    progress_closed: bool,
    queue_closed: bool,
    finished: bool,
}

impl<M: SellDetailModel> SellDetailController<M> {
    /// `selected_ids` is the comma separated hex id list chosen for sale.
    /// Repeated ids are dropped. The quantity starts at the full selection.
    pub fn new(
        mut model: M,
        ticket: Erc721Ticket,
        wallet: &Wallet,
        selected_ids: &str,
        config: &SaleConfig,
    ) -> Result<Self> {
        let parsed = parse_hex_id_list(selected_ids)?;
        let mut selected_ids: Vec<U256> = Vec::with_capacity(parsed.len());
        for id in parsed {
            if selected_ids.contains(&id) {
                debug!("Ignoring repeated selection of ticket 0x{:x}", id);
            } else {
                selected_ids.push(id);
            }
        }
        let quantity = u32::try_from(selected_ids.len()).map_err(|_| {
            TradingError::ValidationError(format!("{} tickets selected", selected_ids.len()))
        })?;

        model.set_wallet(wallet);
        let progress = model.progress();
        let queue_progress = model.queue_progress();
        let toasts = model.push_toast();

        let currency_symbol = EvmChain::from_chain_id(ticket.info().chain_id)
            .map(|chain| chain.currency_symbol())
            .unwrap_or("ETH");

        debug!(
            "Sell screen opened for {} with {} selected tickets",
            ticket.address(),
            quantity
        );

        Ok(Self {
            model,
            ticket,
            selected_ids,
            price_text: String::new(),
            quantity,
            total_text: None,
            currency_symbol,
            price_decimals: config.price_decimals,
            validator: SaleValidator::new(config.price_decimals),
            progress,
            queue_progress,
            toasts,
            progress_closed: false,
            queue_closed: false,
            finished: false,
        })
    }

    pub fn on_resume(&mut self) {
        self.model.prepare(&self.ticket);
    }

    pub fn on_price_changed(&mut self, text: &str) {
        self.price_text = text.to_string();
        self.refresh_total();
    }

    pub fn increment_quantity(&mut self) -> u32 {
        if self.quantity < self.available() {
            self.quantity += 1;
            self.refresh_total();
        }
        self.quantity
    }

    pub fn decrement_quantity(&mut self) -> u32 {
        if self.quantity > 0 {
            self.quantity -= 1;
            self.refresh_total();
        }
        self.quantity
    }

    /// Pre-submit checks; returns the confirmation prompt when the sale may go ahead.
    pub fn on_sell_pressed(&self) -> Option<SaleConfirmation> {
        let validation = self
            .validator
            .validate(self.quantity, self.available(), &self.price_text);

        if !validation.valid {
            debug!("Sell refused: {:?}", validation.errors);
            return None;
        }

        let total_text = match &self.total_text {
            Some(text) => text.clone(),
            None => format_total(
                total_cost(self.quantity, &self.price_text)?,
                self.currency_symbol,
            ),
        };

        Some(SaleConfirmation {
            total_text,
            warnings: validation.warnings,
        })
    }

    /// Build the sale order for the first `quantity` selected tickets and
    /// pass it to the view-model.
    pub fn confirm_sale(&mut self) -> Result<SaleOrder> {
        if self.finished {
            return Err(TradingError::AlreadySubmitted);
        }

        if !is_valid_amount(&self.price_text) {
            warn!("Rejecting sale with unreadable price {:?}", self.price_text);
            return Err(TradingError::InvalidPrice(self.price_text.clone()));
        }

        let price = price_in_wei(&self.price_text, self.price_decimals);
        if price.is_zero() {
            return Err(TradingError::InvalidPrice(self.price_text.clone()));
        }

        let offered: Vec<U256> = self
            .selected_ids
            .iter()
            .take(self.quantity as usize)
            .copied()
            .collect();

        let indices = self.ticket.indices_of(&offered).map_err(|e| match e {
            shared::Error::TokenNotHeld(_) => {
                TradingError::TicketsNotHeld(format_hex_id_list(&offered, true))
            }
            other => TradingError::Token(other),
        })?;

        let order = SaleOrder::new(self.ticket.address(), price, offered, indices)?;

        self.model.generate_sales_orders(
            order.contract_address,
            order.total_value,
            &order.indices,
            order.first_token_id(),
        );
        self.finished = true;

        info!(
            "Sale order generated for {} tickets of {}: {} wei total",
            order.quantity(),
            order.contract_address,
            order.total_value
        );

        Ok(order)
    }

    /// Forward pending view-model updates to the view. Returns how many were delivered.
    pub fn pump_events(&mut self, view: &mut dyn SellDetailView) -> usize {
        let mut delivered = 0;

        // A closed stream still holds the last value sent; deliver it once.
        match self.progress.has_changed() {
            Ok(true) => {
                let visible = *self.progress.borrow_and_update();
                view.show_progress(visible);
                delivered += 1;
            }
            Ok(false) => {}
            Err(_) if !self.progress_closed => {
                self.progress_closed = true;
                let visible = *self.progress.borrow();
                debug!("Progress stream closed at {}", visible);
                view.show_progress(visible);
                delivered += 1;
            }
            Err(_) => {}
        }

        match self.queue_progress.has_changed() {
            Ok(true) => {
                let percent = *self.queue_progress.borrow_and_update();
                view.update_queue_progress(percent);
                delivered += 1;
            }
            Ok(false) => {}
            Err(_) if !self.queue_closed => {
                self.queue_closed = true;
                let percent = *self.queue_progress.borrow();
                debug!("Queue progress stream closed at {}%", percent);
                view.update_queue_progress(percent);
                delivered += 1;
            }
            Err(_) => {}
        }

        loop {
            match self.toasts.try_recv() {
                Ok(message) => {
                    view.display_toast(&message);
                    delivered += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Dropped {} toast messages", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        delivered
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Number of tickets picked for sale
    pub fn available(&self) -> u32 {
        self.selected_ids.len() as u32
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn total_text(&self) -> Option<&str> {
        self.total_text.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn ticket(&self) -> &Erc721Ticket {
        &self.ticket
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    // Malformed input leaves the previous total on screen.
    fn refresh_total(&mut self) {
        match total_cost(self.quantity, &self.price_text) {
            Some(total) => {
                self.total_text = Some(format_total(total, self.currency_symbol));
            }
            None => debug!("Keeping total, price {:?} not numeric", self.price_text),
        }
    }
}

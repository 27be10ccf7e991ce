//! Sale flow for wallet tickets: asking price arithmetic, pre-submit checks
//! and the controller behind the sell screen.

pub mod controller;
pub mod error;
pub mod model;
pub mod order;
pub mod price;
pub mod validation;

pub use controller::{SaleConfirmation, SellDetailController};
pub use error::{Result, TradingError};
pub use model::{SellDetailModel, SellDetailView};
pub use order::SaleOrder;
pub use validation::{SaleValidator, ValidationResult};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Tickets not held by wallet: {0}")]
    TicketsNotHeld(String),

    #[error("Sale total overflows: {0}")]
    Overflow(String),

    #[error("Sale already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Token(#[from] shared::Error),
}

pub type Result<T> = std::result::Result<T, TradingError>;

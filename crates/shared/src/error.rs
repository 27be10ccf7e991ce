use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid wallet address: {0}")]
    InvalidWalletAddress(String),

    #[error("Invalid token id: {0}")]
    InvalidTokenId(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("{0} currently doesn't handle batch transfers")]
    BatchTransferUnsupported(String),

    #[error("Transfer requires at least one token id")]
    EmptyTransfer,

    #[error("Token not held: {0}")]
    TokenNotHeld(String),

    #[error("Token id listed more than once: {0}")]
    DuplicateTokenId(String),

    #[error("Balance position {0} doesn't fit a u16 index")]
    IndexOutOfRange(usize),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub mod abi;
pub mod chain;
pub mod ids;
pub mod parcel;
pub mod ticket;
pub mod token;
pub mod transaction;
pub mod units;

pub use abi::EncodedFunction;
pub use chain::{validate_address, EvmChain};
pub use parcel::TicketParcel;
pub use ticket::Erc721Ticket;
pub use token::{AssetDefinitions, Token};
pub use transaction::{ContractTransaction, Transaction, TransactionOperation};
pub use units::Unit;

pub use alloy_primitives::{Address, B256, U256};

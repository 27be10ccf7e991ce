use serde::{Deserialize, Serialize};

/// Minimal view of a wallet transaction, enough to tell ticket sends from receipts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub operations: Vec<TransactionOperation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionOperation {
    pub contract: Option<ContractTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractTransaction {
    /// Ticket contract call; a positive `kind` marks tickets coming into the wallet.
    Erc875 { kind: i32 },
    Other,
}

impl Transaction {
    pub fn first_operation(&self) -> Option<&TransactionOperation> {
        self.operations.first()
    }
}

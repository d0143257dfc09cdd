//! Bank-sync models
//!
//! Synced transactions come from a bank-aggregation provider and are only
//! candidates: they become ledger transactions after review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{BankConnectionId, SyncedTransactionId};
use super::money::Money;
use super::transaction::TransactionType;

/// A candidate transaction pulled from a bank connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncedTransaction {
    pub id: SyncedTransactionId,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Always non-negative; direction is carried by `is_debit`
    pub amount: Money,
    pub is_debit: bool,
    /// Connection the candidate was pulled through, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<BankConnectionId>,
}

impl SyncedTransaction {
    /// The ledger direction implied by the bank's debit flag
    pub fn implied_type(&self) -> TransactionType {
        if self.is_debit {
            TransactionType::Expense
        } else {
            TransactionType::Income
        }
    }

    /// Description if present, otherwise the id, for error reporting
    pub fn label(&self) -> String {
        if self.description.trim().is_empty() {
            self.id.to_string()
        } else {
            self.description.clone()
        }
    }
}

/// A linked bank-aggregation connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConnection {
    pub id: BankConnectionId,
    /// Provider tag (e.g., "plaid", "saltedge")
    pub provider: String,
    pub institution_name: String,
    /// Provider-specific credential or reference; never displayed
    #[serde(default)]
    pub reference: String,
}

impl BankConnection {
    pub fn new(provider: impl Into<String>, institution_name: impl Into<String>) -> Self {
        Self {
            id: BankConnectionId::new(),
            provider: provider.into(),
            institution_name: institution_name.into(),
            reference: String::new(),
        }
    }
}

//! Transaction model
//!
//! Ledger transactions carry a non-negative amount; the direction of money is
//! expressed by [`TransactionType`], never by the sign of the amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{PropertyId, SyncedTransactionId, TransactionId, UnitId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money received (rent, fees, deposits)
    Income,
    /// Money spent (repairs, utilities, mortgage)
    Expense,
}

impl TransactionType {
    /// Check if this is income
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The property this transaction belongs to
    pub property_id: PropertyId,

    /// The unit, if the transaction is unit-specific (None = property-wide)
    #[serde(default)]
    pub unit_id: Option<UnitId>,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Category, conventionally one of the suggested categories for the type
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Amount (always non-negative)
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Bank-synced transaction this was imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<SyncedTransactionId>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        property_id: PropertyId,
        transaction_type: TransactionType,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            property_id,
            unit_id: None,
            transaction_type,
            category: category.into(),
            description: String::new(),
            amount,
            date,
            source_id: None,
        }
    }

    /// Create an income transaction
    pub fn income(
        property_id: PropertyId,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self::new(property_id, TransactionType::Income, category, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(
        property_id: PropertyId,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self::new(property_id, TransactionType::Expense, category, amount, date)
    }

    /// Attach the transaction to a unit
    pub fn for_unit(mut self, unit_id: UnitId) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.transaction_type.is_income()
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.transaction_type.is_expense()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.transaction_type, self.category, self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount must be non-negative (direction is carried by the type): {}",
                amount
            ),
            Self::MissingCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::income(
            PropertyId::from("p1"),
            "Rent",
            Money::from_cents(100000),
            date(2025, 1, 3),
        )
        .for_unit(UnitId::from("u1"))
        .with_description("January rent");

        assert!(txn.is_income());
        assert!(!txn.is_expense());
        assert_eq!(txn.unit_id, Some(UnitId::from("u1")));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let txn = Transaction::expense(
            PropertyId::from("p1"),
            "Repairs",
            Money::from_cents(-500),
            date(2025, 1, 3),
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-500)))
        );
    }

    #[test]
    fn test_type_parse_and_display() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!(" EXPENSE ".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
        assert_eq!(TransactionType::Income.to_string(), "INCOME");
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let txn = Transaction::expense(
            PropertyId::from("p1"),
            "Repairs",
            Money::from_cents(2500),
            date(2025, 2, 1),
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "EXPENSE");
        assert_eq!(json["date"], "2025-02-01");
        assert_eq!(json["amount"], 2500);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}

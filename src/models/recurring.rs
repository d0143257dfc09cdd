//! Recurring transaction rules
//!
//! A recurring transaction is a rule, never a ledger entry: the system only
//! computes when the rule is next due.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{PropertyId, RecurringId, UnitId};
use super::money::Money;
use super::transaction::TransactionType;

/// How often a recurring rule repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annually" => Ok(Self::Yearly),
            other => Err(format!("Unrecognized frequency '{}'", other)),
        }
    }
}

/// A recurring income or expense rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub id: RecurringId,
    pub property_id: PropertyId,
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    /// Raw frequency as supplied by the store ("daily", "weekly", ...).
    /// Validated by the scheduler so a bad rule only fails its own computation.
    pub frequency: String,
    /// Number of periods between occurrences
    #[serde(default = "default_interval")]
    pub interval: i32,
    pub start_date: NaiveDate,
}

fn default_interval() -> i32 {
    1
}

impl RecurringTransaction {
    pub fn new(
        property_id: PropertyId,
        transaction_type: TransactionType,
        category: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: RecurringId::new(),
            property_id,
            unit_id: None,
            transaction_type,
            category: category.into(),
            description: String::new(),
            amount,
            frequency: frequency.to_string().to_lowercase(),
            interval: default_interval(),
            start_date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parse() {
        assert_eq!("Monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!(" weekly ".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("annually".parse::<Frequency>().unwrap(), Frequency::Yearly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_rule_stores_lowercase_frequency() {
        let rule = RecurringTransaction::new(
            PropertyId::from("p1"),
            TransactionType::Expense,
            "Mortgage",
            Money::from_cents(150000),
            Frequency::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(rule.frequency, "monthly");
        assert_eq!(rule.interval, 1);
    }

    #[test]
    fn test_interval_defaults_when_missing() {
        let rule: RecurringTransaction = serde_json::from_str(
            r#"{"id":"r1","property_id":"p1","type":"INCOME","category":"Rent",
                "amount":100000,"frequency":"monthly","start_date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(rule.interval, 1);
        assert!(rule.unit_id.is_none());
    }
}

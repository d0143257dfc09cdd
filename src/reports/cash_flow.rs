//! Cash-flow projection
//!
//! Extends the net profit to date forward by the average monthly net, where
//! the average is taken over the distinct calendar months present in the
//! history. Accumulation is exact; only each emitted balance is rounded to
//! whole currency units.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::money::round_div;
use crate::models::{Money, Transaction, YearMonth};

/// Default number of projected months
pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// One projected month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedMonth {
    pub month: YearMonth,
    pub label: String,
    pub projected_balance: Money,
}

pub struct CashFlowProjector;

impl CashFlowProjector {
    /// Number of distinct calendar months in the history
    pub fn distinct_months<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> usize {
        transactions
            .into_iter()
            .map(|t| YearMonth::of(t.date))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Project the balance for the `horizon_months` months after `today`
    ///
    /// Returns an empty projection when the history has no months; callers
    /// show a "not enough data" state.
    ///
    /// Each balance is rounded to whole units with halves away from zero, so
    /// a balance of -2.50 projects as -3.00, not -2.00.
    pub fn project(
        transactions: &[Transaction],
        net_profit_to_date: Money,
        horizon_months: u32,
        today: NaiveDate,
    ) -> Vec<ProjectedMonth> {
        let distinct = Self::distinct_months(transactions) as i128;
        if distinct == 0 {
            return Vec::new();
        }

        let net = i128::from(net_profit_to_date.cents());
        let current = YearMonth::of(today);

        (1..=horizon_months)
            .map(|i| {
                // net + i * (net / distinct), rounded once to whole units
                let units = round_div(net * (distinct + i128::from(i)), distinct * 100);
                let cents = (units * 100).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
                let month = current.plus_months(i);
                ProjectedMonth {
                    month,
                    label: month.label(),
                    projected_balance: Money::from_cents(cents),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent(on: NaiveDate) -> Transaction {
        Transaction::income(PropertyId::from("p1"), "Rent", Money::from_cents(60000), on)
    }

    #[test]
    fn test_no_history_is_empty() {
        assert!(CashFlowProjector::project(&[], Money::from_cents(60000), 6, date(2024, 5, 1)).is_empty());
    }

    #[test]
    fn test_single_month_doubles_next_month() {
        let txns = vec![rent(date(2024, 4, 3)), rent(date(2024, 4, 20))];
        let projection = CashFlowProjector::project(&txns, Money::from_cents(60000), 6, date(2024, 5, 10));

        assert_eq!(projection.len(), 6);
        assert_eq!(projection[0].projected_balance, Money::from_cents(120000));
        assert_eq!(projection[0].label, "Jun 24");
        assert_eq!(projection[5].projected_balance, Money::from_cents(420000));
        assert_eq!(projection[5].label, "Nov 24");
    }

    #[test]
    fn test_no_compounding_rounding() {
        // Three months, net 100.00: average 33.333..., steps round independently
        let txns = vec![rent(date(2024, 1, 1)), rent(date(2024, 2, 1)), rent(date(2024, 3, 1))];
        let projection = CashFlowProjector::project(&txns, Money::from_cents(10000), 3, date(2024, 3, 15));
        let balances: Vec<i64> = projection.iter().map(|p| p.projected_balance.cents()).collect();
        assert_eq!(balances, vec![13300, 16700, 20000]);
    }

    #[test]
    fn test_negative_net_projects_downwards() {
        let txns = vec![rent(date(2024, 1, 1)), rent(date(2024, 2, 1))];
        let projection = CashFlowProjector::project(&txns, Money::from_cents(-25050), 2, date(2024, 2, 15));
        let balances: Vec<i64> = projection.iter().map(|p| p.projected_balance.cents()).collect();
        // -250.50 -> -375.75 -> -501.00
        assert_eq!(balances, vec![-37600, -50100]);
    }

    #[test]
    fn test_negative_halves_round_away_from_zero() {
        let txns = vec![rent(date(2024, 2, 1))];
        let down = CashFlowProjector::project(&txns, Money::from_cents(-125), 1, date(2024, 2, 15));
        assert_eq!(down[0].projected_balance, Money::from_cents(-300));
        let up = CashFlowProjector::project(&txns, Money::from_cents(125), 1, date(2024, 2, 15));
        assert_eq!(up[0].projected_balance, Money::from_cents(300));
    }

    #[test]
    fn test_labels_wrap_year() {
        let txns = vec![rent(date(2024, 11, 1))];
        let projection = CashFlowProjector::project(&txns, Money::from_cents(100), 2, date(2024, 12, 5));
        let labels: Vec<&str> = projection.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 25", "Feb 25"]);
    }
}

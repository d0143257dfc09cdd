//! Transaction display formatting
//!
//! Register views, recurring schedules, import summaries and category
//! suggestions.

use super::report::{separator, truncate};
use crate::models::{Property, Transaction};
use crate::services::recurring::RecurringOverview;
use crate::services::{ImportOutcome, Suggestion};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, address: &str, symbol: &str, date_format: &str) -> String {
    let signed = if txn.is_expense() { -txn.amount } else { txn.amount };
    format!(
        "{:10} {:20} {:16} {:24} {:>12}",
        txn.date.format(date_format),
        truncate(address, 20),
        truncate(&txn.category, 16),
        truncate(&txn.description, 24),
        signed.format_with_symbol(symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[&Transaction],
    properties: &[Property],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:16} {:24} {:>12}\n",
        "Date", "Property", "Category", "Description", "Amount"
    ));
    output.push_str(&separator(86));
    output.push('\n');

    for txn in transactions {
        let address = properties
            .iter()
            .find(|p| p.id == txn.property_id)
            .map(|p| p.address.as_str())
            .unwrap_or("?");
        output.push_str(&format_transaction_row(txn, address, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Format recurring rules due within a window
pub fn format_recurring_overview(overview: &RecurringOverview<'_>, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    if overview.due.is_empty() {
        output.push_str("No recurring transactions due.\n");
    } else {
        for due in &overview.due {
            let label = if due.rule.description.is_empty() {
                due.rule.category.as_str()
            } else {
                due.rule.description.as_str()
            };
            output.push_str(&format!(
                "{:10} {:8} {:24} {:>12} ({})\n",
                due.next_due.format(date_format),
                due.rule.transaction_type.to_string(),
                truncate(label, 24),
                due.rule.amount.format_with_symbol(symbol),
                due.rule.frequency
            ));
        }
    }

    if !overview.invalid.is_empty() {
        output.push_str("Invalid rules:\n");
        for invalid in &overview.invalid {
            output.push_str(&format!("  {}: {}\n", invalid.id, invalid.reason));
        }
    }

    output
}

/// Format an import summary with skipped rows and warnings
pub fn format_import_outcome<T>(outcome: &ImportOutcome<T>) -> String {
    let mut output = format!("Import complete: {}\n", outcome.summary());

    if !outcome.skipped.is_empty() {
        output.push_str("Skipped:\n");
        for issue in &outcome.skipped {
            output.push_str(&format!("  {}\n", issue));
        }
    }

    if !outcome.warnings.is_empty() {
        output.push_str("Warnings:\n");
        for warning in &outcome.warnings {
            output.push_str(&format!("  Row {}: {}\n", warning.row, warning.message));
        }
    }

    output
}

/// Format a classifier result
pub fn format_suggestion(suggestion: Option<&Suggestion>) -> String {
    match suggestion {
        Some(s) if s.type_changed => format!(
            "{} ({}, type changed)\n",
            s.category, s.transaction_type
        ),
        Some(s) => format!("{} ({})\n", s.category, s.transaction_type),
        None => "No suggestion\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PropertyId, TransactionType};
    use crate::services::ImportIssue;
    use chrono::NaiveDate;

    #[test]
    fn test_register_signs_expenses() {
        let properties = vec![Property::with_id("p1", "12 Elm St")];
        let txn = Transaction::expense(
            PropertyId::from("p1"),
            "Repairs",
            Money::from_cents(30050),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .with_description("Boiler");
        let output = format_transaction_register(&[&txn], &properties, "$", "%Y-%m-%d");
        assert!(output.contains("2024-01-15"));
        assert!(output.contains("12 Elm St"));
        assert!(output.contains("-$300.50"));
    }

    #[test]
    fn test_import_outcome_lists_skipped_rows() {
        let mut outcome: ImportOutcome<()> = ImportOutcome::default();
        outcome.imported.push(());
        outcome.skipped.push(ImportIssue::new("Plumber", "missing property").at_row(2));
        let output = format_import_outcome(&outcome);
        assert!(output.starts_with("Import complete: 1 succeeded, 1 skipped"));
        assert!(output.contains("Row 2: Plumber: missing property"));
    }

    #[test]
    fn test_format_suggestion() {
        let suggestion = Suggestion {
            transaction_type: TransactionType::Income,
            category: "Rent".into(),
            type_changed: true,
        };
        assert_eq!(format_suggestion(Some(&suggestion)), "Rent (INCOME, type changed)\n");
        assert_eq!(format_suggestion(None), "No suggestion\n");
    }
}

//! Report formatting for terminal output

use std::collections::BTreeMap;

use crate::models::{Money, PropertyId};
use crate::reports::{CategoryAmount, FinancialReport, MonthlyPoint, ProjectedMonth, PropertyTotals, Summary};

const WIDTH: usize = 60;

/// Truncate to `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return " ".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total income:    {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expenses:  {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net profit:      {:>14}\n",
        summary.net_profit.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Transactions:    {:>14}\n", summary.transaction_count));
    output
}

pub fn format_monthly_series(points: &[MonthlyPoint], symbol: &str) -> String {
    if points.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:>14} {:>14} {:>14}\n",
        "Month", "Income", "Expenses", "Net"
    ));
    output.push_str(&separator(53));
    output.push('\n');

    for point in points {
        output.push_str(&format!(
            "{:8} {:>14} {:>14} {:>14}\n",
            point.label,
            point.income.format_with_symbol(symbol),
            point.expenses.format_with_symbol(symbol),
            point.net().format_with_symbol(symbol)
        ));
    }

    output
}

pub fn format_category_breakdown(title: &str, items: &[CategoryAmount], symbol: &str) -> String {
    let mut output = format!("{}\n", title);
    if items.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    let total: Money = items.iter().map(|i| i.amount).sum();
    let max = items.iter().map(|i| i.amount.cents()).max().unwrap_or(0);

    for item in items {
        let pct = if total.is_zero() {
            0.0
        } else {
            item.amount.cents() as f64 / total.cents() as f64 * 100.0
        };
        output.push_str(&format!(
            "  {:22} {:>14} {:>6} {}\n",
            truncate(&item.category, 22),
            item.amount.format_with_symbol(symbol),
            format_percentage(pct),
            format_bar(item.amount.cents(), max, 16)
        ));
    }

    output
}

pub fn format_property_breakdown(breakdown: &BTreeMap<PropertyId, PropertyTotals>, symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No properties found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:28} {:>14} {:>14} {:>14}\n",
        "Property", "Income", "Expenses", "Net"
    ));
    output.push_str(&separator(73));
    output.push('\n');

    let mut rows: Vec<&PropertyTotals> = breakdown.values().collect();
    rows.sort_by(|a, b| a.address.cmp(&b.address));
    for totals in rows {
        output.push_str(&format!(
            "{:28} {:>14} {:>14} {:>14}\n",
            truncate(&totals.address, 28),
            totals.income.format_with_symbol(symbol),
            totals.expenses.format_with_symbol(symbol),
            totals.net().format_with_symbol(symbol)
        ));
    }

    output
}

pub fn format_projection(projection: &[ProjectedMonth], symbol: &str) -> String {
    if projection.is_empty() {
        return "Not enough data to project cash flow.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:8} {:>16}\n", "Month", "Projected"));
    output.push_str(&separator(25));
    output.push('\n');
    for month in projection {
        output.push_str(&format!(
            "{:8} {:>16}\n",
            month.label,
            month.projected_balance.format_with_symbol(symbol)
        ));
    }
    output
}

/// Dashboard view of a full report
pub fn format_financial_report(report: &FinancialReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_summary(&report.summary, symbol));

    if report.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format_category_breakdown("Income by category", &report.income_by_category, symbol));
    output.push('\n');
    output.push_str(&format_category_breakdown("Expenses by category", &report.expenses_by_category, symbol));

    if let Some(by_property) = &report.by_property {
        output.push('\n');
        output.push_str(&format_property_breakdown(by_property, symbol));
    }

    output
}

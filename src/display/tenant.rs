//! Tenant, lease and reminder display formatting

use super::report::{separator, truncate};
use crate::services::reminder::ReminderReport;
use crate::services::{ExpiringLease, RentStatus, TenantStatus};

fn rent_icon(status: RentStatus) -> &'static str {
    match status {
        RentStatus::Paid => "✓",
        RentStatus::Overdue => "!",
        RentStatus::Pending => "…",
        RentStatus::Unassigned => " ",
    }
}

/// Format the tenant status board
pub fn format_tenant_board(statuses: &[TenantStatus<'_>], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No tenants found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:2}{:22} {:8} {:>12} {:>12} {:9} {:14}\n",
        "", "Tenant", "Unit", "Rent", "Paid", "Status", "Lease"
    ));
    output.push_str(&separator(84));
    output.push('\n');

    for row in statuses {
        let (unit, rent) = match row.unit {
            Some(unit) => (
                unit.unit_number.clone(),
                unit.rent_or_zero().format_with_symbol(symbol),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        output.push_str(&format!(
            "{:2}{:22} {:8} {:>12} {:>12} {:9} {:14}\n",
            rent_icon(row.rent_status),
            truncate(&row.tenant.name, 22),
            truncate(&unit, 8),
            rent,
            row.paid_this_month.format_with_symbol(symbol),
            row.rent_status.to_string(),
            row.lease_status.to_string()
        ));
    }

    output
}

/// Format leases ending within the horizon
pub fn format_expiring_leases(leases: &[ExpiringLease<'_>], date_format: &str) -> String {
    if leases.is_empty() {
        return "No leases expiring soon.\n".to_string();
    }

    let mut output = String::new();
    for lease in leases {
        let address = lease
            .property
            .map(|p| p.address.as_str())
            .unwrap_or("(unknown property)");
        let ends = lease
            .unit
            .lease_end
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_default();
        let when = match lease.days_remaining {
            0 => "today".to_string(),
            1 => "in 1 day".to_string(),
            n => format!("in {} days", n),
        };
        output.push_str(&format!(
            "{} ({} unit {}) ends {} {}\n",
            lease.tenant.name, address, lease.unit.unit_number, ends, when
        ));
    }
    output
}

/// Format upcoming and late-fee reminders
pub fn format_reminder_report(report: &ReminderReport<'_>, symbol: &str, date_format: &str) -> String {
    if report.is_empty() {
        return "No reminders due.\n".to_string();
    }

    let mut output = String::new();

    if !report.upcoming.is_empty() {
        output.push_str("Rent due soon:\n");
        for reminder in &report.upcoming {
            output.push_str(&format!(
                "  {} - due {} ({} days)\n",
                reminder.tenant.name,
                reminder.due_date.format(date_format),
                reminder.days_until
            ));
        }
    }

    if !report.late_fee.is_empty() {
        output.push_str("Late fee applies:\n");
        for reminder in &report.late_fee {
            output.push_str(&format!(
                "  {} - {} since {}\n",
                reminder.tenant.name,
                reminder.late_fee_amount.format_with_symbol(symbol),
                reminder.late_fee_date.format(date_format)
            ));
        }
    }

    if !report.skipped.is_empty() {
        output.push_str("Skipped (invalid settings):\n");
        for skipped in &report.skipped {
            output.push_str(&format!("  {}: {}\n", skipped.tenant_id, skipped.reason));
        }
    }

    output
}

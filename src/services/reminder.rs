//! Rent reminders and expiring leases
//!
//! Rent is due on the first day of each month. The upcoming reminder fires in
//! the `due_date_reminder_days` before the next due date; the late-fee reminder
//! fires once `late_fee_reminder_days` have passed since this month's due date
//! without a rent payment for the tenant's unit.

use chrono::{Duration, NaiveDate};
use tracing::warn;

use crate::models::{
    Money, Property, ReminderSettings, Tenant, TenantId, Transaction, Unit, UnitId, YearMonth,
};

/// Category that satisfies a month's rent obligation
pub const RENT_CATEGORY: &str = "Rent";

/// A tenant whose rent falls due soon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingReminder<'a> {
    pub tenant: &'a Tenant,
    pub unit_id: &'a UnitId,
    pub due_date: NaiveDate,
    pub days_until: i64,
}

/// A tenant past the late-fee date without a rent payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LateFeeReminder<'a> {
    pub tenant: &'a Tenant,
    pub unit_id: &'a UnitId,
    pub late_fee_date: NaiveDate,
    pub late_fee_amount: Money,
}

/// A tenant whose reminder settings could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedReminder {
    pub tenant_id: TenantId,
    pub reason: String,
}

/// Result of evaluating reminders for all tenants
#[derive(Debug, Clone, Default)]
pub struct ReminderReport<'a> {
    pub upcoming: Vec<UpcomingReminder<'a>>,
    pub late_fee: Vec<LateFeeReminder<'a>>,
    pub skipped: Vec<SkippedReminder>,
}

impl ReminderReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.late_fee.is_empty() && self.skipped.is_empty()
    }
}

/// A lease ending within the horizon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiringLease<'a> {
    pub tenant: &'a Tenant,
    pub unit: &'a Unit,
    pub property: Option<&'a Property>,
    pub days_remaining: i64,
}

/// `date` moved by `days`, or `None` past the calendar bounds
fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|d| date.checked_add_signed(d))
}

/// Evaluates reminder rules against a snapshot
pub struct ReminderEvaluator;

impl ReminderEvaluator {
    /// Evaluate every tenant that has an enabled reminder and an assigned unit
    ///
    /// A tenant with invalid settings lands in `skipped`; the rest are still
    /// evaluated.
    pub fn evaluate<'a>(
        tenants: &'a [Tenant],
        reminders: &[ReminderSettings],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> ReminderReport<'a> {
        let month = YearMonth::of(today);
        let current_due = month.first_day();
        let next_due = month.next().first_day();
        let mut report = ReminderReport::default();

        for tenant in tenants {
            let Some(unit_id) = tenant.unit_id.as_ref() else {
                continue;
            };
            let Some(settings) = reminders
                .iter()
                .find(|r| r.tenant_id == tenant.id && r.enabled)
            else {
                continue;
            };

            if let Err(e) = settings.validate() {
                warn!(tenant = %tenant.id, error = %e, "skipping misconfigured reminder");
                report.skipped.push(SkippedReminder {
                    tenant_id: tenant.id.clone(),
                    reason: e.to_string(),
                });
                continue;
            }

            let (Some(window_start), Some(late_fee_date)) = (
                shift_days(next_due, -settings.due_date_reminder_days),
                shift_days(current_due, settings.late_fee_reminder_days),
            ) else {
                warn!(tenant = %tenant.id, "reminder window outside the calendar range");
                report.skipped.push(SkippedReminder {
                    tenant_id: tenant.id.clone(),
                    reason: "reminder days fall outside the supported date range".to_string(),
                });
                continue;
            };

            if today >= window_start && today < next_due {
                report.upcoming.push(UpcomingReminder {
                    tenant,
                    unit_id,
                    due_date: next_due,
                    days_until: (next_due - today).num_days(),
                });
            }

            if today >= late_fee_date && !Self::rent_received(unit_id, transactions, month) {
                report.late_fee.push(LateFeeReminder {
                    tenant,
                    unit_id,
                    late_fee_date,
                    late_fee_amount: settings.late_fee_amount,
                });
            }
        }

        report
    }

    /// Whether a rent payment was recorded for the unit in the given month
    pub fn rent_received(unit_id: &UnitId, transactions: &[Transaction], month: YearMonth) -> bool {
        transactions.iter().any(|t| {
            t.is_income()
                && t.unit_id.as_ref() == Some(unit_id)
                && t.category.trim().eq_ignore_ascii_case(RENT_CATEGORY)
                && month.contains(t.date)
        })
    }

    /// Leases ending in `[today, today + horizon_days]`, soonest first
    pub fn expiring_leases<'a>(
        tenants: &'a [Tenant],
        units: &'a [Unit],
        properties: &'a [Property],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<ExpiringLease<'a>> {
        let mut leases: Vec<ExpiringLease<'a>> = tenants
            .iter()
            .filter_map(|tenant| {
                let unit_id = tenant.unit_id.as_ref()?;
                let unit = units.iter().find(|u| &u.id == unit_id)?;
                let days_remaining = (unit.lease_end? - today).num_days();
                if !(0..=horizon_days).contains(&days_remaining) {
                    return None;
                }
                Some(ExpiringLease {
                    tenant,
                    unit,
                    property: properties.iter().find(|p| p.id == unit.property_id),
                    days_remaining,
                })
            })
            .collect();

        leases.sort_by(|a, b| {
            a.days_remaining
                .cmp(&b.days_remaining)
                .then_with(|| a.tenant.name.cmp(&b.tenant.name))
        });
        leases
    }
}

//! Rent and lease status
//!
//! Derives per-unit labels from a snapshot. Every function takes `today`
//! explicitly.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::config::Settings;
use crate::models::{Money, Tenant, Transaction, Unit, UnitId, YearMonth};

/// Whether the current month's rent has been covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentStatus {
    Paid,
    Overdue,
    Pending,
    /// No unit assigned
    Unassigned,
}

impl fmt::Display for RentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Pending => "pending",
            Self::Unassigned => "none",
        };
        write!(f, "{}", label)
    }
}

/// Lease position relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaseStatus {
    NoLease,
    Expired,
    ExpiringSoon,
    Active,
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoLease => "No Lease",
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Active => "Active",
        };
        write!(f, "{}", label)
    }
}

/// One row of the tenant board
#[derive(Debug, Clone)]
pub struct TenantStatus<'a> {
    pub tenant: &'a Tenant,
    pub unit: Option<&'a Unit>,
    pub rent_status: RentStatus,
    pub lease_status: LeaseStatus,
    pub paid_this_month: Money,
}

/// Rent and lease status rules
#[derive(Debug, Clone, Copy)]
pub struct RentStatusEngine {
    /// Day of month after which unpaid rent is overdue
    pub grace_days: u32,
    /// Leases ending within this many days are expiring soon
    pub expiring_days: i64,
}

impl Default for RentStatusEngine {
    fn default() -> Self {
        Self {
            grace_days: 5,
            expiring_days: 60,
        }
    }
}

impl RentStatusEngine {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            grace_days: settings.rent_grace_days,
            expiring_days: settings.lease_expiring_days,
        }
    }

    /// Sum of income recorded against a unit in today's calendar month
    pub fn paid_this_month(unit_id: &UnitId, transactions: &[Transaction], today: NaiveDate) -> Money {
        let month = YearMonth::of(today);
        transactions
            .iter()
            .filter(|t| t.is_income())
            .filter(|t| t.unit_id.as_ref() == Some(unit_id))
            .filter(|t| month.contains(t.date))
            .map(|t| t.amount)
            .sum()
    }

    /// Rent status of a unit for today's month
    pub fn rent_status(&self, unit: Option<&Unit>, transactions: &[Transaction], today: NaiveDate) -> RentStatus {
        let Some(unit) = unit else {
            return RentStatus::Unassigned;
        };

        let paid = Self::paid_this_month(&unit.id, transactions, today);
        if paid >= unit.rent_or_zero() {
            RentStatus::Paid
        } else if today.day() > self.grace_days {
            RentStatus::Overdue
        } else {
            RentStatus::Pending
        }
    }

    /// Lease status for an optional lease end date
    pub fn lease_status(&self, lease_end: Option<NaiveDate>, today: NaiveDate) -> LeaseStatus {
        let Some(lease_end) = lease_end else {
            return LeaseStatus::NoLease;
        };

        let days_remaining = (lease_end - today).num_days();
        if days_remaining < 0 {
            LeaseStatus::Expired
        } else if days_remaining <= self.expiring_days {
            LeaseStatus::ExpiringSoon
        } else {
            LeaseStatus::Active
        }
    }

    /// Rent and lease status for every tenant
    pub fn tenant_statuses<'a>(
        &self,
        tenants: &'a [Tenant],
        units: &'a [Unit],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> Vec<TenantStatus<'a>> {
        tenants
            .iter()
            .map(|tenant| {
                let unit = tenant
                    .unit_id
                    .as_ref()
                    .and_then(|id| units.iter().find(|u| &u.id == id));
                TenantStatus {
                    tenant,
                    unit,
                    rent_status: self.rent_status(unit, transactions, today),
                    lease_status: self.lease_status(unit.and_then(|u| u.lease_end), today),
                    paid_this_month: unit
                        .map(|u| Self::paid_this_month(&u.id, transactions, today))
                        .unwrap_or_default(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::models::PropertyId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unit_with_rent(dollars: i64) -> Unit {
        Unit::new(PropertyId::from("p1"), "1A")
            .with_rent(Money::from_dollars_cents(dollars, 0))
    }

    fn rent_payment(unit: &Unit, dollars: i64, on: NaiveDate) -> Transaction {
        Transaction::income(
            unit.property_id.clone(),
            "Rent",
            Money::from_dollars_cents(dollars, 0),
            on,
        )
        .for_unit(unit.id.clone())
    }

    #[test]
    fn test_unpaid_after_grace_is_overdue() {
        let engine = RentStatusEngine::default();
        let unit = unit_with_rent(1000);
        assert_eq!(
            engine.rent_status(Some(&unit), &[], date(2024, 3, 6)),
            RentStatus::Overdue
        );
    }

    #[test]
    fn test_unpaid_within_grace_is_pending() {
        let engine = RentStatusEngine::default();
        let unit = unit_with_rent(1000);
        assert_eq!(
            engine.rent_status(Some(&unit), &[], date(2024, 3, 3)),
            RentStatus::Pending
        );
        assert_eq!(
            engine.rent_status(Some(&unit), &[], date(2024, 3, 5)),
            RentStatus::Pending
        );
    }

    #[test]
    fn test_full_payment_is_paid() {
        let engine = RentStatusEngine::default();
        let unit = unit_with_rent(1000);
        let txns = vec![rent_payment(&unit, 1000, date(2024, 3, 2))];
        assert_eq!(
            engine.rent_status(Some(&unit), &txns, date(2024, 3, 20)),
            RentStatus::Paid
        );
    }

    #[test]
    fn test_partial_and_other_month_payments_do_not_count() {
        let engine = RentStatusEngine::default();
        let unit = unit_with_rent(1000);
        let other_unit = unit_with_rent(1000);
        let txns = vec![
            rent_payment(&unit, 400, date(2024, 3, 2)),
            rent_payment(&unit, 1000, date(2024, 2, 28)),
            rent_payment(&unit, 1000, date(2023, 3, 2)),
            rent_payment(&other_unit, 1000, date(2024, 3, 2)),
            Transaction::expense(unit.property_id.clone(), "Repairs", Money::from_cents(100000), date(2024, 3, 2))
                .for_unit(unit.id.clone()),
        ];
        assert_eq!(
            RentStatusEngine::paid_this_month(&unit.id, &txns, date(2024, 3, 10)),
            Money::from_dollars_cents(400, 0)
        );
        assert_eq!(
            engine.rent_status(Some(&unit), &txns, date(2024, 3, 10)),
            RentStatus::Overdue
        );
    }

    #[test]
    fn test_missing_rent_counts_as_zero() {
        let engine = RentStatusEngine::default();
        let unit = Unit::new(PropertyId::from("p1"), "2B");
        assert_eq!(
            engine.rent_status(Some(&unit), &[], date(2024, 3, 20)),
            RentStatus::Paid
        );
    }

    #[test]
    fn test_no_unit_is_unassigned() {
        let engine = RentStatusEngine::default();
        let status = engine.rent_status(None, &[], date(2024, 3, 20));
        assert_eq!(status, RentStatus::Unassigned);
        assert_eq!(status.to_string(), "none");
    }

    #[test]
    fn test_lease_status() {
        let engine = RentStatusEngine::default();
        let today = date(2024, 5, 10);
        assert_eq!(engine.lease_status(None, today), LeaseStatus::NoLease);
        assert_eq!(
            engine.lease_status(Some(today + Duration::days(30)), today),
            LeaseStatus::ExpiringSoon
        );
        assert_eq!(
            engine.lease_status(Some(today - Duration::days(1)), today),
            LeaseStatus::Expired
        );
        assert_eq!(engine.lease_status(Some(today), today), LeaseStatus::ExpiringSoon);
        assert_eq!(
            engine.lease_status(Some(today + Duration::days(60)), today),
            LeaseStatus::ExpiringSoon
        );
        assert_eq!(
            engine.lease_status(Some(today + Duration::days(61)), today),
            LeaseStatus::Active
        );
        assert_eq!(LeaseStatus::ExpiringSoon.to_string(), "Expiring Soon");
    }

    #[test]
    fn test_custom_grace_days() {
        let engine = RentStatusEngine {
            grace_days: 10,
            ..RentStatusEngine::default()
        };
        let unit = unit_with_rent(1000);
        assert_eq!(
            engine.rent_status(Some(&unit), &[], date(2024, 3, 8)),
            RentStatus::Pending
        );
    }

    #[test]
    fn test_tenant_statuses() {
        let engine = RentStatusEngine::default();
        let today = date(2024, 3, 12);
        let paid_unit = unit_with_rent(900).with_lease_end(date(2025, 1, 1));
        let late_unit = unit_with_rent(1200).with_lease_end(date(2024, 4, 1));
        let units = vec![paid_unit.clone(), late_unit.clone()];
        let tenants = vec![
            Tenant::new("Ana").assigned_to(paid_unit.id.clone()),
            Tenant::new("Ben").assigned_to(late_unit.id.clone()),
            Tenant::new("Cy"),
        ];
        let txns = vec![rent_payment(&paid_unit, 900, date(2024, 3, 1))];

        let board = engine.tenant_statuses(&tenants, &units, &txns, today);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].rent_status, RentStatus::Paid);
        assert_eq!(board[0].lease_status, LeaseStatus::Active);
        assert_eq!(board[0].paid_this_month, Money::from_dollars_cents(900, 0));
        assert_eq!(board[1].rent_status, RentStatus::Overdue);
        assert_eq!(board[1].lease_status, LeaseStatus::ExpiringSoon);
        assert_eq!(board[2].rent_status, RentStatus::Unassigned);
        assert_eq!(board[2].lease_status, LeaseStatus::NoLease);
        assert!(board[2].unit.is_none());
    }
}

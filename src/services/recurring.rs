//! Recurring rule scheduling
//!
//! Computes when a recurring rule is next due. Rules are never materialized
//! into ledger transactions here.
//!
//! Month and year periods are anchored to the rule's start date: occurrence
//! `k` is `start_date + k * interval` calendar months, clamped to the last day
//! of the target month. A rule starting on Jan 31 therefore falls on Feb 29
//! (or 28), Mar 31, Apr 30, and never drifts to an earlier day-of-month.

use chrono::{Duration, Months, NaiveDate};
use tracing::warn;

use crate::error::{RentbookError, RentbookResult};
use crate::models::{Frequency, RecurringId, RecurringTransaction};

/// A rule together with its next occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueRule<'a> {
    pub rule: &'a RecurringTransaction,
    pub next_due: NaiveDate,
    pub days_until: i64,
}

/// A rule that could not be scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRule {
    pub id: RecurringId,
    pub reason: String,
}

/// Rules due within a window, plus any misconfigured rules
#[derive(Debug, Clone, Default)]
pub struct RecurringOverview<'a> {
    pub due: Vec<DueRule<'a>>,
    pub invalid: Vec<InvalidRule>,
}

/// Scheduler for recurring rules
pub struct RecurringScheduler;

impl RecurringScheduler {
    /// Validate a rule's frequency and interval
    pub fn frequency_of(rule: &RecurringTransaction) -> RentbookResult<Frequency> {
        let frequency: Frequency = rule.frequency.parse().map_err(RentbookError::Config)?;
        if rule.interval <= 0 {
            return Err(RentbookError::Config(format!(
                "Recurring interval must be positive, got {}",
                rule.interval
            )));
        }
        Ok(frequency)
    }

    /// The first occurrence on or after `today`
    ///
    /// A rule starting after `today` is next due on its start date.
    pub fn next_due_date(rule: &RecurringTransaction, today: NaiveDate) -> RentbookResult<NaiveDate> {
        let frequency = Self::frequency_of(rule)?;
        let start = rule.start_date;
        if start > today {
            return Ok(start);
        }

        // interval > 0 checked above
        let interval = rule.interval as u32;
        match frequency {
            Frequency::Daily => Self::advance_days(start, today, i64::from(interval)),
            Frequency::Weekly => Self::advance_days(start, today, 7 * i64::from(interval)),
            Frequency::Monthly => Self::advance_months(start, today, interval),
            Frequency::Yearly => Self::advance_months(start, today, 12 * interval),
        }
    }

    /// Rules whose next due date is within `within_days` of `today`
    ///
    /// A window reaching past the calendar covers every rule.
    ///
    /// Misconfigured rules are reported in `invalid` and do not affect the
    /// others.
    pub fn upcoming(
        rules: &[RecurringTransaction],
        today: NaiveDate,
        within_days: i64,
    ) -> RecurringOverview<'_> {
        let horizon = Duration::try_days(within_days.max(0))
            .and_then(|d| today.checked_add_signed(d))
            .unwrap_or(NaiveDate::MAX);
        let mut overview = RecurringOverview::default();

        for rule in rules {
            match Self::next_due_date(rule, today) {
                Ok(next_due) if next_due <= horizon => overview.due.push(DueRule {
                    rule,
                    next_due,
                    days_until: (next_due - today).num_days(),
                }),
                Ok(_) => {}
                Err(e) => {
                    warn!(rule = %rule.id, error = %e, "skipping recurring rule");
                    overview.invalid.push(InvalidRule {
                        id: rule.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        overview
            .due
            .sort_by(|a, b| a.next_due.cmp(&b.next_due).then_with(|| a.rule.category.cmp(&b.rule.category)));
        overview
    }

    fn advance_days(start: NaiveDate, today: NaiveDate, period_days: i64) -> RentbookResult<NaiveDate> {
        let elapsed = (today - start).num_days();
        let periods = (elapsed + period_days - 1) / period_days;
        start
            .checked_add_signed(Duration::days(periods * period_days))
            .ok_or_else(|| out_of_range(start))
    }

    fn advance_months(start: NaiveDate, today: NaiveDate, step: u32) -> RentbookResult<NaiveDate> {
        let mut k: u32 = 0;
        loop {
            let cursor = k
                .checked_mul(step)
                .and_then(|months| start.checked_add_months(Months::new(months)))
                .ok_or_else(|| out_of_range(start))?;
            if cursor >= today {
                return Ok(cursor);
            }
            k += 1;
        }
    }
}

fn out_of_range(start: NaiveDate) -> RentbookError {
    RentbookError::Config(format!("Recurring rule starting {} runs past the calendar", start))
}

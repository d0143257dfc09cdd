//! Rent reminder settings per tenant

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TenantId;
use super::money::Money;

/// Reminder rules for a single tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub tenant_id: TenantId,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Days before the rent due date to start the upcoming reminder
    pub due_date_reminder_days: i64,
    /// Days after the rent due date before a late fee applies
    pub late_fee_reminder_days: i64,
    /// Late fee charged once the late-fee date has passed
    #[serde(default)]
    pub late_fee_amount: Money,
}

fn default_enabled() -> bool {
    true
}

impl ReminderSettings {
    pub fn new(tenant_id: TenantId, due_date_reminder_days: i64, late_fee_reminder_days: i64) -> Self {
        Self {
            tenant_id,
            enabled: true,
            due_date_reminder_days,
            late_fee_reminder_days,
            late_fee_amount: Money::zero(),
        }
    }

    pub fn with_late_fee(mut self, amount: Money) -> Self {
        self.late_fee_amount = amount;
        self
    }

    /// Day counts must be positive and the fee non-negative
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.due_date_reminder_days <= 0 {
            return Err(ReminderValidationError::NonPositiveDays {
                field: "due_date_reminder_days",
                value: self.due_date_reminder_days,
            });
        }
        if self.late_fee_reminder_days <= 0 {
            return Err(ReminderValidationError::NonPositiveDays {
                field: "late_fee_reminder_days",
                value: self.late_fee_reminder_days,
            });
        }
        if self.late_fee_amount.is_negative() {
            return Err(ReminderValidationError::NegativeLateFee(self.late_fee_amount));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    NonPositiveDays { field: &'static str, value: i64 },
    NegativeLateFee(Money),
}

impl fmt::Display for ReminderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDays { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            Self::NegativeLateFee(amount) => write!(f, "Late fee cannot be negative: {}", amount),
        }
    }
}

impl std::error::Error for ReminderValidationError {}

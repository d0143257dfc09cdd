//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod import;
pub mod property;
pub mod report;
pub mod tenant;
pub mod transaction;

pub use import::{handle_import_command, ImportCommands};
pub use property::{handle_property_command, handle_unit_command, PropertyCommands, UnitCommands};
pub use report::{handle_report_command, ReportCommands};
pub use tenant::{
    handle_leases_command, handle_reminders_command, handle_tenants_command, RemindersArgs,
    TenantsArgs,
};
pub use transaction::{
    handle_classify_command, handle_recurring_command, handle_transaction_command, RecurringArgs,
    TransactionCommands,
};

use chrono::NaiveDate;

use crate::config::{RentbookPaths, Settings};
use crate::error::{RentbookError, RentbookResult};
use crate::models::Money;
use crate::services::CategoryClassifier;

/// Everything a handler needs besides the store
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: RentbookPaths,
    pub settings: Settings,
    /// Reference date for every status computation
    pub today: NaiveDate,
}

impl CliContext {
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }

    /// Built-in rules plus the user's custom rules
    pub fn classifier(&self) -> CategoryClassifier {
        CategoryClassifier::with_custom_rules(&self.settings.custom_category_rules)
    }
}

/// Parse a YYYY-MM-DD argument
pub fn parse_date(value: &str) -> RentbookResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        RentbookError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD format",
            value
        ))
    })
}

/// Parse an amount argument such as "1200", "1,200.50" or "$95"
pub fn parse_money(value: &str) -> RentbookResult<Money> {
    Money::parse(value).map_err(|e| {
        RentbookError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1200.00'. Error: {}",
            value, e
        ))
    })
}

//! User settings for rentbook
//!
//! Manages display preferences, rent/lease thresholds and custom
//! categorization rules.

use serde::{Deserialize, Serialize};

use super::paths::RentbookPaths;
use crate::error::RentbookError;
use crate::reports::cash_flow::DEFAULT_HORIZON_MONTHS;
use crate::services::category::CategoryRule;

/// User settings for rentbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Day of month after which unpaid rent is overdue
    #[serde(default = "default_rent_grace_days")]
    pub rent_grace_days: u32,

    /// Leases ending within this many days are "Expiring Soon"
    #[serde(default = "default_lease_expiring_days")]
    pub lease_expiring_days: i64,

    /// Horizon for the expiring-leases list
    #[serde(default = "default_expiring_lease_horizon_days")]
    pub expiring_lease_horizon_days: i64,

    /// Number of months in the cash-flow projection
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,

    /// Extra categorization rules, evaluated before the built-in table
    #[serde(default)]
    pub custom_category_rules: Vec<CategoryRule>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_rent_grace_days() -> u32 {
    5
}

fn default_lease_expiring_days() -> i64 {
    60
}

fn default_expiring_lease_horizon_days() -> i64 {
    90
}

fn default_projection_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            rent_grace_days: default_rent_grace_days(),
            lease_expiring_days: default_lease_expiring_days(),
            expiring_lease_horizon_days: default_expiring_lease_horizon_days(),
            projection_months: default_projection_months(),
            custom_category_rules: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RentbookPaths) -> Result<Self, RentbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RentbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RentbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RentbookPaths) -> Result<(), RentbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RentbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            RentbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

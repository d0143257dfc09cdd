//! Display formatting for terminal output
//!
//! Plain-text tables for reports, tenant boards, reminders and imports.
//! Currency symbols and date formats come from the caller's settings.

pub mod report;
pub mod tenant;
pub mod transaction;

pub use report::{
    format_category_breakdown, format_financial_report, format_monthly_series,
    format_projection, format_property_breakdown, format_summary,
};
pub use tenant::{format_expiring_leases, format_reminder_report, format_tenant_board};
pub use transaction::{
    format_import_outcome, format_recurring_overview, format_suggestion,
    format_transaction_register,
};

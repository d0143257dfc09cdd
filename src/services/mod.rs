//! Service layer for rentbook
//!
//! Pure derivations over in-memory snapshots: categorization, recurring
//! schedules, rent and lease status, reminders and import reconciliation.
//! Nothing here performs I/O or reads the clock.

pub mod category;
pub mod import;
pub mod recurring;
pub mod reminder;
pub mod rent_status;

pub use category::{CategoryClassifier, CategoryRule, CategorySuggester, Suggestion};
pub use import::{
    ImportIssue, ImportOutcome, ImportWarning, ReviewFields, TenantDraft, TransactionDraft,
    TransactionImportReconciler,
};
pub use recurring::RecurringScheduler;
pub use reminder::{ExpiringLease, ReminderEvaluator, ReminderReport};
pub use rent_status::{LeaseStatus, RentStatus, RentStatusEngine, TenantStatus};

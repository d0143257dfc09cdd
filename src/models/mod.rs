//! Core data models for rentbook
//!
//! This module contains the data structures that represent the landlord
//! domain: properties, units, tenants, transactions, recurring rules,
//! bank-synced candidates and reminder settings.

pub mod bank;
pub mod ids;
pub mod money;
pub mod period;
pub mod property;
pub mod recurring;
pub mod reminder;
pub mod tenant;
pub mod transaction;

pub use bank::{BankConnection, SyncedTransaction};
pub use ids::{
    BankConnectionId, PropertyId, RecurringId, SyncedTransactionId, TenantId, TransactionId,
    UnitId,
};
pub use money::Money;
pub use period::YearMonth;
pub use property::{Property, Unit};
pub use recurring::{Frequency, RecurringTransaction};
pub use reminder::ReminderSettings;
pub use tenant::Tenant;
pub use transaction::{Transaction, TransactionType};

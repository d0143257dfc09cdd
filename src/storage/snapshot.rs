//! On-disk snapshot of every collection

use serde::{Deserialize, Serialize};

use crate::models::{
    BankConnection, Property, PropertyId, RecurringTransaction, ReminderSettings,
    SyncedTransaction, Tenant, Transaction, Unit,
};

/// Serializable ledger data structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring: Vec<RecurringTransaction>,
    /// Bank-synced candidates awaiting review
    #[serde(default)]
    pub synced: Vec<SyncedTransaction>,
    #[serde(default)]
    pub bank_connections: Vec<BankConnection>,
    #[serde(default)]
    pub reminders: Vec<ReminderSettings>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.units.is_empty()
            && self.tenants.is_empty()
            && self.transactions.is_empty()
            && self.recurring.is_empty()
            && self.synced.is_empty()
            && self.bank_connections.is_empty()
            && self.reminders.is_empty()
    }

    /// Units belonging to a property
    pub fn units_of<'a, 'p>(&'a self, property: &'p PropertyId) -> impl Iterator<Item = &'a Unit> + 'p
    where
        'a: 'p,
    {
        self.units.iter().filter(move |u| &u.property_id == property)
    }
}

//! Ledger store
//!
//! The single owner of application state. Every mutation goes through the
//! store, bumps its generation and thereby invalidates memoized reports.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::file_io::{read_json, write_json_atomic};
use super::snapshot::Snapshot;
use crate::error::{RentbookError, RentbookResult};
use crate::models::{
    BankConnection, BankConnectionId, Property, PropertyId, RecurringId, RecurringTransaction, ReminderSettings,
    SyncedTransaction, Tenant, TenantId, Transaction, TransactionId, Unit, UnitId,
};
use crate::reports::{FinancialReport, ReportFilter};
use crate::services::TransactionDraft;

/// Result of deleting a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedProperty {
    pub property: Property,
    pub transactions_removed: usize,
}

/// Owner of the ledger snapshot
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    snapshot: Snapshot,
    generation: u64,
    report_cache: HashMap<(u64, ReportFilter), FinancialReport>,
    cache_hits: u64,
}

impl LedgerStore {
    /// An empty store that will save to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_snapshot(path, Snapshot::default())
    }

    pub fn with_snapshot(path: impl Into<PathBuf>, snapshot: Snapshot) -> Self {
        Self {
            path: path.into(),
            snapshot,
            generation: 0,
            report_cache: HashMap::new(),
            cache_hits: 0,
        }
    }

    /// Load the snapshot from disk; a missing file yields an empty store
    pub fn load(path: impl Into<PathBuf>) -> RentbookResult<Self> {
        let path = path.into();
        let snapshot: Snapshot = read_json(&path)?;
        info!(
            path = %path.display(),
            properties = snapshot.properties.len(),
            transactions = snapshot.transactions.len(),
            "loaded ledger"
        );
        Ok(Self::with_snapshot(path, snapshot))
    }

    /// Save the snapshot to disk
    pub fn save(&self) -> RentbookResult<()> {
        write_json_atomic(&self.path, &self.snapshot)?;
        info!(path = %self.path.display(), generation = self.generation, "saved ledger");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Incremented on every mutation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of `report` calls answered from the cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    fn touch(&mut self) {
        self.generation += 1;
        self.report_cache.clear();
    }

    // --- Reports ----------------------------------------------------------

    /// Financial report for a filter, recomputed only after a mutation
    pub fn report(&mut self, filter: &ReportFilter) -> &FinancialReport {
        let generation = self.generation;
        match self.report_cache.entry((generation, filter.clone())) {
            Entry::Occupied(entry) => {
                self.cache_hits += 1;
                debug!(generation, "report cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(generation, "report cache miss");
                entry.insert(FinancialReport::generate(
                    &self.snapshot.transactions,
                    &self.snapshot.properties,
                    filter,
                ))
            }
        }
    }

    // --- Properties -------------------------------------------------------

    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.snapshot.properties.iter().find(|p| &p.id == id)
    }

    /// Find a property by id, or by address (case-insensitive)
    pub fn resolve_property(&self, key: &str) -> RentbookResult<&Property> {
        let key = key.trim();
        self.snapshot
            .properties
            .iter()
            .find(|p| p.id.as_str() == key)
            .or_else(|| {
                self.snapshot
                    .properties
                    .iter()
                    .find(|p| p.address.trim().eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| RentbookError::property_not_found(key))
    }

    pub fn add_property(&mut self, property: Property) -> RentbookResult<PropertyId> {
        property.validate().map_err(RentbookError::Validation)?;
        let id = property.id.clone();
        self.snapshot.properties.push(property);
        self.touch();
        Ok(id)
    }

    pub fn update_property(&mut self, property: Property) -> RentbookResult<()> {
        property.validate().map_err(RentbookError::Validation)?;
        let slot = self
            .snapshot
            .properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| RentbookError::property_not_found(property.id.as_str()))?;
        *slot = property;
        self.touch();
        Ok(())
    }

    /// Delete a property and every transaction recorded against it
    ///
    /// Units and tenants are left in place.
    pub fn delete_property(&mut self, id: &PropertyId) -> RentbookResult<DeletedProperty> {
        let index = self
            .snapshot
            .properties
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| RentbookError::property_not_found(id.as_str()))?;
        let property = self.snapshot.properties.remove(index);

        let before = self.snapshot.transactions.len();
        self.snapshot.transactions.retain(|t| &t.property_id != id);
        let transactions_removed = before - self.snapshot.transactions.len();

        info!(property = %id, transactions_removed, "deleted property");
        self.touch();
        Ok(DeletedProperty {
            property,
            transactions_removed,
        })
    }

    // --- Units ------------------------------------------------------------

    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.snapshot.units.iter().find(|u| &u.id == id)
    }

    /// Find a unit of a property by id or unit number (case-insensitive)
    pub fn resolve_unit(&self, property: &PropertyId, key: &str) -> RentbookResult<&Unit> {
        let key = key.trim();
        self.snapshot
            .units
            .iter()
            .filter(|u| &u.property_id == property)
            .find(|u| u.id.as_str() == key || u.unit_number.trim().eq_ignore_ascii_case(key))
            .ok_or_else(|| RentbookError::unit_not_found(key))
    }

    pub fn add_unit(&mut self, unit: Unit) -> RentbookResult<UnitId> {
        unit.validate().map_err(RentbookError::Validation)?;
        if self.property(&unit.property_id).is_none() {
            return Err(RentbookError::property_not_found(unit.property_id.as_str()));
        }
        let id = unit.id.clone();
        self.snapshot.units.push(unit);
        self.touch();
        Ok(id)
    }

    pub fn update_unit(&mut self, unit: Unit) -> RentbookResult<()> {
        unit.validate().map_err(RentbookError::Validation)?;
        let slot = self
            .snapshot
            .units
            .iter_mut()
            .find(|u| u.id == unit.id)
            .ok_or_else(|| RentbookError::unit_not_found(unit.id.as_str()))?;
        *slot = unit;
        self.touch();
        Ok(())
    }

    pub fn delete_unit(&mut self, id: &UnitId) -> RentbookResult<Unit> {
        let index = self
            .snapshot
            .units
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| RentbookError::unit_not_found(id.as_str()))?;
        let unit = self.snapshot.units.remove(index);
        self.touch();
        Ok(unit)
    }

    // --- Tenants ----------------------------------------------------------

    pub fn tenant(&self, id: &TenantId) -> Option<&Tenant> {
        self.snapshot.tenants.iter().find(|t| &t.id == id)
    }

    /// Find a tenant by id or name (case-insensitive)
    pub fn resolve_tenant(&self, key: &str) -> RentbookResult<&Tenant> {
        let key = key.trim();
        self.snapshot
            .tenants
            .iter()
            .find(|t| t.id.as_str() == key || t.name.trim().eq_ignore_ascii_case(key))
            .ok_or_else(|| RentbookError::tenant_not_found(key))
    }

    pub fn add_tenant(&mut self, tenant: Tenant) -> RentbookResult<TenantId> {
        tenant.validate().map_err(RentbookError::Validation)?;
        if let Some(unit_id) = &tenant.unit_id {
            if self.unit(unit_id).is_none() {
                return Err(RentbookError::unit_not_found(unit_id.as_str()));
            }
        }
        let id = tenant.id.clone();
        self.snapshot.tenants.push(tenant);
        self.touch();
        Ok(id)
    }

    pub fn update_tenant(&mut self, tenant: Tenant) -> RentbookResult<()> {
        tenant.validate().map_err(RentbookError::Validation)?;
        let slot = self
            .snapshot
            .tenants
            .iter_mut()
            .find(|t| t.id == tenant.id)
            .ok_or_else(|| RentbookError::tenant_not_found(tenant.id.as_str()))?;
        *slot = tenant;
        self.touch();
        Ok(())
    }

    /// Delete a tenant and their reminder settings
    pub fn delete_tenant(&mut self, id: &TenantId) -> RentbookResult<Tenant> {
        let index = self
            .snapshot
            .tenants
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| RentbookError::tenant_not_found(id.as_str()))?;
        let tenant = self.snapshot.tenants.remove(index);
        self.snapshot.reminders.retain(|r| &r.tenant_id != id);
        self.touch();
        Ok(tenant)
    }

    // --- Transactions -----------------------------------------------------

    fn check_references(&self, property_id: &PropertyId, unit_id: Option<&UnitId>) -> RentbookResult<()> {
        if self.property(property_id).is_none() {
            return Err(RentbookError::property_not_found(property_id.as_str()));
        }
        if let Some(unit_id) = unit_id {
            let unit = self
                .unit(unit_id)
                .ok_or_else(|| RentbookError::unit_not_found(unit_id.as_str()))?;
            if &unit.property_id != property_id {
                return Err(RentbookError::Validation(format!(
                    "Unit {} does not belong to property {}",
                    unit_id, property_id
                )));
            }
        }
        Ok(())
    }

    fn validate_transaction(&self, txn: &Transaction) -> RentbookResult<()> {
        txn.validate()
            .map_err(|e| RentbookError::Validation(e.to_string()))?;
        self.check_references(&txn.property_id, txn.unit_id.as_ref())
    }

    pub fn add_transaction(&mut self, txn: Transaction) -> RentbookResult<TransactionId> {
        self.validate_transaction(&txn)?;
        let id = txn.id.clone();
        self.snapshot.transactions.push(txn);
        self.touch();
        Ok(id)
    }

    pub fn update_transaction(&mut self, txn: Transaction) -> RentbookResult<()> {
        self.validate_transaction(&txn)?;
        let slot = self
            .snapshot
            .transactions
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| RentbookError::transaction_not_found(txn.id.as_str()))?;
        *slot = txn;
        self.touch();
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> RentbookResult<Transaction> {
        let index = self
            .snapshot
            .transactions
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| RentbookError::transaction_not_found(id.as_str()))?;
        let txn = self.snapshot.transactions.remove(index);
        self.touch();
        Ok(txn)
    }

    /// Insert reviewed drafts and drop their synced candidates
    ///
    /// All drafts are checked before any is inserted; on error the ledger is
    /// left untouched.
    pub fn import_drafts(&mut self, drafts: Vec<TransactionDraft>) -> RentbookResult<Vec<TransactionId>> {
        for draft in &drafts {
            self.check_references(&draft.property_id, draft.unit_id.as_ref())?;
        }

        let txns = drafts
            .into_iter()
            .map(|draft| {
                let txn = draft.into_transaction();
                txn.validate()
                    .map_err(|e| RentbookError::Validation(e.to_string()))?;
                Ok(txn)
            })
            .collect::<RentbookResult<Vec<_>>>()?;
        if txns.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<TransactionId> = txns.iter().map(|t| t.id.clone()).collect();
        self.snapshot
            .synced
            .retain(|s| !txns.iter().any(|t| t.source_id.as_ref() == Some(&s.id)));
        self.snapshot.transactions.extend(txns);

        info!(count = ids.len(), "imported reviewed transactions");
        self.touch();
        Ok(ids)
    }

    // --- Recurring rules --------------------------------------------------

    pub fn add_recurring(&mut self, rule: RecurringTransaction) -> RentbookResult<RecurringId> {
        self.check_references(&rule.property_id, rule.unit_id.as_ref())?;
        let id = rule.id.clone();
        self.snapshot.recurring.push(rule);
        self.touch();
        Ok(id)
    }

    pub fn delete_recurring(&mut self, id: &RecurringId) -> RentbookResult<RecurringTransaction> {
        let index = self
            .snapshot
            .recurring
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RentbookError::recurring_not_found(id.as_str()))?;
        let rule = self.snapshot.recurring.remove(index);
        self.touch();
        Ok(rule)
    }

    // --- Reminders --------------------------------------------------------

    /// Create or replace a tenant's reminder settings
    pub fn set_reminder(&mut self, settings: ReminderSettings) -> RentbookResult<()> {
        settings
            .validate()
            .map_err(|e| RentbookError::Config(e.to_string()))?;
        if self.tenant(&settings.tenant_id).is_none() {
            return Err(RentbookError::tenant_not_found(settings.tenant_id.as_str()));
        }

        match self
            .snapshot
            .reminders
            .iter_mut()
            .find(|r| r.tenant_id == settings.tenant_id)
        {
            Some(slot) => *slot = settings,
            None => self.snapshot.reminders.push(settings),
        }
        self.touch();
        Ok(())
    }

    // --- Bank sync --------------------------------------------------------

    /// The connection for an institution, registering it on first use
    ///
    /// Institutions match case-insensitively.
    pub fn connect_bank(&mut self, provider: &str, institution: &str) -> RentbookResult<BankConnectionId> {
        let institution = institution.trim();
        if institution.is_empty() {
            return Err(RentbookError::Validation(
                "Institution name cannot be empty".into(),
            ));
        }
        if let Some(existing) = self
            .snapshot
            .bank_connections
            .iter()
            .find(|c| c.institution_name.eq_ignore_ascii_case(institution))
        {
            return Ok(existing.id.clone());
        }

        let connection = BankConnection::new(provider.trim(), institution);
        let id = connection.id.clone();
        debug!(connection = %id, institution, "registered bank connection");
        self.snapshot.bank_connections.push(connection);
        self.touch();
        Ok(id)
    }

    /// Queue synced candidates for review
    ///
    /// Ids already queued or already imported into the ledger are skipped.
    pub fn add_synced(&mut self, synced: Vec<SyncedTransaction>) -> usize {
        let mut added = 0;
        for candidate in synced {
            let queued = self.snapshot.synced.iter().any(|s| s.id == candidate.id);
            let imported = self
                .snapshot
                .transactions
                .iter()
                .any(|t| t.source_id.as_ref() == Some(&candidate.id));
            if !queued && !imported {
                self.snapshot.synced.push(candidate);
                added += 1;
            }
        }
        if added > 0 {
            self.touch();
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SyncedTransactionId, TransactionType};
    use crate::reports::PropertyScope;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_property() -> (LedgerStore, PropertyId, UnitId) {
        let mut store = LedgerStore::new("unused.json");
        let property_id = store.add_property(Property::new("12 Elm St")).unwrap();
        let unit_id = store
            .add_unit(Unit::new(property_id.clone(), "1A").with_rent(Money::from_cents(100000)))
            .unwrap();
        (store, property_id, unit_id)
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("ledger.json");

        let mut store = LedgerStore::new(&path);
        let property_id = store.add_property(Property::new("12 Elm St")).unwrap();
        store
            .add_transaction(Transaction::income(property_id, "Rent", Money::from_cents(100000), date(2024, 1, 2)))
            .unwrap();
        store.save().unwrap();

        let loaded = LedgerStore::load(&path).unwrap();
        assert_eq!(loaded.snapshot(), store.snapshot());
        assert_eq!(loaded.generation(), 0);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::load(temp_dir.path().join("ledger.json")).unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_transaction_references_are_checked() {
        let (mut store, property_id, unit_id) = store_with_property();
        let other = store.add_property(Property::new("9 Oak Ave")).unwrap();

        let orphan = Transaction::expense(PropertyId::from("nope"), "Repairs", Money::from_cents(100), date(2024, 1, 2));
        assert!(store.add_transaction(orphan).unwrap_err().is_not_found());

        let wrong_unit = Transaction::expense(other, "Repairs", Money::from_cents(100), date(2024, 1, 2))
            .for_unit(unit_id.clone());
        assert!(store.add_transaction(wrong_unit).unwrap_err().is_validation());

        let negative = Transaction::expense(property_id.clone(), "Repairs", Money::from_cents(-100), date(2024, 1, 2));
        assert!(store.add_transaction(negative).unwrap_err().is_validation());

        let ok = Transaction::income(property_id, "Rent", Money::from_cents(100), date(2024, 1, 2)).for_unit(unit_id);
        assert!(store.add_transaction(ok).is_ok());
    }

    #[test]
    fn test_delete_property_cascades_to_transactions() {
        let (mut store, property_id, unit_id) = store_with_property();
        let other = store.add_property(Property::new("9 Oak Ave")).unwrap();
        for cents in [100, 200] {
            store
                .add_transaction(Transaction::income(property_id.clone(), "Rent", Money::from_cents(cents), date(2024, 1, 2)))
                .unwrap();
        }
        store
            .add_transaction(Transaction::expense(other.clone(), "Repairs", Money::from_cents(50), date(2024, 1, 2)))
            .unwrap();

        let deleted = store.delete_property(&property_id).unwrap();
        assert_eq!(deleted.transactions_removed, 2);
        assert_eq!(store.snapshot().transactions.len(), 1);
        assert_eq!(store.snapshot().transactions[0].property_id, other);
        // Units are orphaned, not removed
        assert!(store.unit(&unit_id).is_some());
        assert!(store.delete_property(&property_id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_report_is_memoized_until_mutation() {
        let (mut store, property_id, _) = store_with_property();
        store
            .add_transaction(Transaction::income(property_id.clone(), "Rent", Money::from_cents(100000), date(2024, 1, 2)))
            .unwrap();

        let filter = ReportFilter::default();
        let first = store.report(&filter).summary;
        let second = store.report(&filter).summary;
        assert_eq!(first, second);
        assert_eq!(store.cache_hits(), 1);

        // A different filter is a separate entry
        let scoped = ReportFilter::new().for_property(PropertyScope::Property(property_id.clone()));
        store.report(&scoped);
        assert_eq!(store.cache_hits(), 1);

        let generation = store.generation();
        store
            .add_transaction(Transaction::expense(property_id, "Repairs", Money::from_cents(25000), date(2024, 1, 9)))
            .unwrap();
        assert!(store.generation() > generation);

        let third = store.report(&filter).summary;
        assert_eq!(store.cache_hits(), 1);
        assert_eq!(third.net_profit, Money::from_cents(75000));
    }

    #[test]
    fn test_resolve_by_id_or_name() {
        let (mut store, property_id, unit_id) = store_with_property();
        assert_eq!(store.resolve_property("12 elm st").unwrap().id, property_id);
        assert_eq!(store.resolve_property(property_id.as_str()).unwrap().id, property_id);
        assert!(store.resolve_property("77 Pine").unwrap_err().is_not_found());

        assert_eq!(store.resolve_unit(&property_id, "1a").unwrap().id, unit_id);

        // The resolved unit borrows the store, not the property key
        let unit = {
            let key = PropertyId::from(property_id.as_str());
            store.resolve_unit(&key, unit_id.as_str()).unwrap()
        };
        assert_eq!(unit.unit_number, "1A");
        assert!(store.resolve_unit(&PropertyId::from("other"), "1A").unwrap_err().is_not_found());

        let tenant_id = store.add_tenant(Tenant::new("Ana Diaz").assigned_to(unit_id)).unwrap();
        assert_eq!(store.resolve_tenant("ana diaz").unwrap().id, tenant_id);
    }

    #[test]
    fn test_tenant_unit_must_exist() {
        let mut store = LedgerStore::new("unused.json");
        let err = store
            .add_tenant(Tenant::new("Ana").assigned_to(UnitId::from("ghost")))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.add_tenant(Tenant::new("  ")).unwrap_err().is_validation());
    }

    #[test]
    fn test_set_reminder_validates_and_replaces() {
        let (mut store, _, unit_id) = store_with_property();
        let tenant_id = store.add_tenant(Tenant::new("Ana").assigned_to(unit_id)).unwrap();

        let err = store
            .set_reminder(ReminderSettings::new(tenant_id.clone(), 0, 5))
            .unwrap_err();
        assert!(err.is_config());

        store.set_reminder(ReminderSettings::new(tenant_id.clone(), 3, 5)).unwrap();
        store.set_reminder(ReminderSettings::new(tenant_id.clone(), 7, 5)).unwrap();
        assert_eq!(store.snapshot().reminders.len(), 1);
        assert_eq!(store.snapshot().reminders[0].due_date_reminder_days, 7);

        store.delete_tenant(&tenant_id).unwrap();
        assert!(store.snapshot().reminders.is_empty());
    }

    #[test]
    fn test_import_drafts_clears_synced_candidates() {
        let (mut store, property_id, _) = store_with_property();
        let candidate = SyncedTransaction {
            id: SyncedTransactionId::from("s1"),
            date: date(2024, 3, 1),
            description: "Zelle".into(),
            amount: Money::from_cents(100000),
            is_debit: false,
            connection_id: None,
        };
        assert_eq!(store.add_synced(vec![candidate.clone(), candidate.clone()]), 1);

        let draft = TransactionDraft {
            source_id: candidate.id.clone(),
            property_id,
            unit_id: None,
            transaction_type: TransactionType::Income,
            category: "Rent".into(),
            description: candidate.description.clone(),
            amount: candidate.amount,
            date: candidate.date,
        };
        let ids = store.import_drafts(vec![draft]).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(store.snapshot().synced.is_empty());
        assert_eq!(store.snapshot().transactions.len(), 1);

        // The same candidate arriving again is not queued a second time
        assert_eq!(store.add_synced(vec![candidate]), 0);
        assert!(store.snapshot().synced.is_empty());
    }

    #[test]
    fn test_failed_import_leaves_ledger_and_cache_intact() {
        let (mut store, property_id, _) = store_with_property();
        let filter = ReportFilter::default();
        let before = store.report(&filter).summary;
        let generation = store.generation();

        let draft = |source: &str, category: &str| TransactionDraft {
            source_id: SyncedTransactionId::from(source),
            property_id: property_id.clone(),
            unit_id: None,
            transaction_type: TransactionType::Expense,
            category: category.into(),
            description: String::new(),
            amount: Money::from_cents(2500),
            date: date(2024, 3, 1),
        };
        let err = store
            .import_drafts(vec![draft("s1", "Supplies"), draft("s2", "  ")])
            .unwrap_err();
        assert!(err.is_validation());

        assert!(store.snapshot().transactions.is_empty());
        assert_eq!(store.generation(), generation);
        assert_eq!(store.report(&filter).summary, before);
    }

    #[test]
    fn test_connect_bank_reuses_institution() {
        let mut store = LedgerStore::new("unused.json");
        let first = store.connect_bank("manual", "First Harbor Bank").unwrap();
        let again = store.connect_bank("manual", "first harbor bank ").unwrap();
        assert_eq!(first, again);
        assert_eq!(store.snapshot().bank_connections.len(), 1);
        assert!(store.connect_bank("manual", "  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_recurring_rules() {
        let (mut store, property_id, _) = store_with_property();
        let rule = RecurringTransaction::new(
            property_id,
            TransactionType::Expense,
            "Mortgage",
            Money::from_cents(150000),
            crate::models::Frequency::Monthly,
            date(2024, 1, 1),
        );
        let id = store.add_recurring(rule).unwrap();
        assert_eq!(store.snapshot().recurring.len(), 1);
        store.delete_recurring(&id).unwrap();
        assert!(store.delete_recurring(&id).unwrap_err().is_not_found());
    }
}

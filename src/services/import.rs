//! Import reconciliation
//!
//! Turns reviewed bank-synced transactions into ledger drafts and CSV rows into
//! tenant drafts. Batches are processed row by row: a bad row is recorded as an
//! [`ImportIssue`] and skipped, and every other row still imports.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{info, warn};

use crate::error::{RentbookError, RentbookResult};
use crate::models::{
    Money, Property, PropertyId, SyncedTransaction, SyncedTransactionId, Tenant, Transaction,
    TransactionType, Unit, UnitId,
};
use crate::services::category::CategoryClassifier;

/// A row that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    /// 1-based row within the batch (0 outside a batch)
    pub row: usize,
    /// Description, name or id identifying the offending row
    pub identifier: String,
    pub reason: String,
}

impl ImportIssue {
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            row: 0,
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row > 0 {
            write!(f, "Row {}: {}: {}", self.row, self.identifier, self.reason)
        } else {
            write!(f, "{}: {}", self.identifier, self.reason)
        }
    }
}

/// A row that imported but needs a second look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    pub row: usize,
    pub message: String,
}

/// Result of a batch import
#[derive(Debug, Clone)]
pub struct ImportOutcome<T> {
    pub imported: Vec<T>,
    pub skipped: Vec<ImportIssue>,
    pub warnings: Vec<ImportWarning>,
}

impl<T> Default for ImportOutcome<T> {
    fn default() -> Self {
        Self {
            imported: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> ImportOutcome<T> {
    pub fn succeeded(&self) -> usize {
        self.imported.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// "N succeeded, M skipped"
    pub fn summary(&self) -> String {
        format!(
            "{} succeeded, {} skipped",
            self.succeeded(),
            self.skipped_count()
        )
    }

    fn skip(&mut self, issue: ImportIssue) {
        warn!(row = issue.row, identifier = %issue.identifier, reason = %issue.reason, "skipping import row");
        self.skipped.push(issue);
    }

    fn warn(&mut self, row: usize, message: String) {
        warn!(row, %message, "import warning");
        self.warnings.push(ImportWarning { row, message });
    }
}

// ---------------------------------------------------------------------------
// Bank-synced transactions
// ---------------------------------------------------------------------------

/// Reviewer-supplied fields for a synced transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFields {
    #[serde(default)]
    pub property_id: Option<PropertyId>,
    /// None means property-wide
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Overrides the bank's description when set
    #[serde(default)]
    pub description: Option<String>,
}

impl ReviewFields {
    /// Initial review form for a synced transaction
    ///
    /// The type follows the debit flag and the category comes from the
    /// classifier. The property is left for the reviewer.
    pub fn prefill(synced: &SyncedTransaction, classifier: &CategoryClassifier) -> Self {
        let implied = synced.implied_type();
        let category = classifier
            .classify(&synced.description, Some(implied))
            .filter(|s| s.transaction_type == implied)
            .map(|s| s.category);

        Self {
            property_id: None,
            unit_id: None,
            category,
            transaction_type: Some(implied),
            description: None,
        }
    }

    /// Keep reviewer choices, filling gaps from `defaults`
    pub fn or_prefill(self, defaults: ReviewFields) -> Self {
        Self {
            property_id: self.property_id.or(defaults.property_id),
            unit_id: self.unit_id.or(defaults.unit_id),
            category: self
                .category
                .filter(|c| !c.trim().is_empty())
                .or(defaults.category),
            transaction_type: self.transaction_type.or(defaults.transaction_type),
            description: self.description.or(defaults.description),
        }
    }
}

/// A synced transaction together with its review, as read from a batch file
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewedSyncedTransaction {
    #[serde(flatten)]
    pub synced: SyncedTransaction,
    #[serde(default)]
    pub review: ReviewFields,
}

/// A validated ledger transaction awaiting insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub source_id: SyncedTransactionId,
    pub property_id: PropertyId,
    pub unit_id: Option<UnitId>,
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub amount: Money,
    pub date: chrono::NaiveDate,
}

impl TransactionDraft {
    pub fn into_transaction(self) -> Transaction {
        let mut txn = Transaction::new(
            self.property_id,
            self.transaction_type,
            self.category,
            self.amount,
            self.date,
        )
        .with_description(self.description);
        txn.unit_id = self.unit_id;
        txn.source_id = Some(self.source_id);
        txn
    }
}

/// Validate a reviewed synced transaction into a draft
///
/// Property, category and type are required. Every missing field is named in
/// the issue, which identifies the transaction by description or id.
pub fn reconcile_synced_transaction(
    synced: &SyncedTransaction,
    review: &ReviewFields,
) -> Result<TransactionDraft, ImportIssue> {
    let category = review
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let mut missing = Vec::new();
    if review.property_id.is_none() {
        missing.push("property");
    }
    if category.is_none() {
        missing.push("category");
    }
    if review.transaction_type.is_none() {
        missing.push("type");
    }

    let (Some(property_id), Some(category), Some(transaction_type)) =
        (review.property_id.clone(), category, review.transaction_type)
    else {
        return Err(ImportIssue::new(
            synced.label(),
            format!("missing {}", missing.join(", ")),
        ));
    };

    if synced.amount.is_negative() {
        return Err(ImportIssue::new(
            synced.label(),
            format!("amount must be non-negative, got {}", synced.amount),
        ));
    }

    Ok(TransactionDraft {
        source_id: synced.id.clone(),
        property_id,
        unit_id: review.unit_id.clone(),
        transaction_type,
        category: category.to_string(),
        description: review
            .description
            .clone()
            .unwrap_or_else(|| synced.description.clone()),
        amount: synced.amount,
        date: synced.date,
    })
}

/// Batch reconciler with referential checks against known properties and units
pub struct TransactionImportReconciler<'a> {
    properties: &'a [Property],
    units: &'a [Unit],
    ledger: &'a [Transaction],
}

impl<'a> TransactionImportReconciler<'a> {
    pub fn new(properties: &'a [Property], units: &'a [Unit]) -> Self {
        Self {
            properties,
            units,
            ledger: &[],
        }
    }

    /// Reject synced items whose id already appears on a ledger transaction
    pub fn with_ledger(mut self, ledger: &'a [Transaction]) -> Self {
        self.ledger = ledger;
        self
    }

    fn already_imported(&self, id: &SyncedTransactionId) -> bool {
        self.ledger.iter().any(|t| t.source_id.as_ref() == Some(id))
    }

    /// Reconcile a single item, including referential checks
    pub fn reconcile(
        &self,
        synced: &SyncedTransaction,
        review: &ReviewFields,
    ) -> Result<TransactionDraft, ImportIssue> {
        if self.already_imported(&synced.id) {
            return Err(ImportIssue::new(synced.label(), "already imported"));
        }
        let draft = reconcile_synced_transaction(synced, review)?;

        if !self.properties.iter().any(|p| p.id == draft.property_id) {
            return Err(ImportIssue::new(
                synced.label(),
                format!("unknown property '{}'", draft.property_id),
            ));
        }

        if let Some(unit_id) = &draft.unit_id {
            let belongs = self
                .units
                .iter()
                .any(|u| &u.id == unit_id && u.property_id == draft.property_id);
            if !belongs {
                return Err(ImportIssue::new(
                    synced.label(),
                    format!(
                        "unit '{}' does not belong to property '{}'",
                        unit_id, draft.property_id
                    ),
                ));
            }
        }

        Ok(draft)
    }

    /// Reconcile a batch; invalid items are skipped and reported
    pub fn reconcile_batch(
        &self,
        items: &[(SyncedTransaction, ReviewFields)],
    ) -> ImportOutcome<TransactionDraft> {
        let mut outcome = ImportOutcome::default();
        let mut seen = HashSet::new();

        for (index, (synced, review)) in items.iter().enumerate() {
            if !seen.insert(&synced.id) {
                outcome.skip(ImportIssue::new(synced.label(), "duplicate in batch").at_row(index + 1));
                continue;
            }
            match self.reconcile(synced, review) {
                Ok(draft) => outcome.imported.push(draft),
                Err(issue) => outcome.skip(issue.at_row(index + 1)),
            }
        }

        info!(summary = %outcome.summary(), "reconciled synced transactions");
        outcome
    }
}

// ---------------------------------------------------------------------------
// CSV tenants
// ---------------------------------------------------------------------------

/// One row of a tenant CSV
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTenantRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub unit_number: String,
}

/// Column positions for tenant CSV fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TenantColumns {
    name: Option<usize>,
    email: Option<usize>,
    phone: Option<usize>,
    address: Option<usize>,
    unit: Option<usize>,
}

impl TenantColumns {
    /// name, email, phone, property address, unit number
    const POSITIONAL: Self = Self {
        name: Some(0),
        email: Some(1),
        phone: Some(2),
        address: Some(3),
        unit: Some(4),
    };

    fn from_header(header: &StringRecord) -> Self {
        let find = |candidates: &[&str]| {
            header.iter().position(|h| {
                let h = h.to_lowercase();
                candidates.iter().any(|c| h.contains(c))
            })
        };

        Self {
            name: find(&["name"]),
            email: find(&["email", "e-mail"]),
            phone: find(&["phone", "mobile", "tel"]),
            address: find(&["address", "property"]),
            unit: find(&["unit", "apt", "suite"]),
        }
    }

    fn row(&self, record: &StringRecord) -> CsvTenantRow {
        let get = |column: Option<usize>| {
            column
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };

        CsvTenantRow {
            name: get(self.name),
            email: get(self.email),
            phone: get(self.phone),
            property_address: get(self.address),
            unit_number: get(self.unit),
        }
    }
}

fn is_header(record: &StringRecord) -> bool {
    let line = record.iter().collect::<Vec<_>>().join(",").to_lowercase();
    line.contains("name") || line.contains("email")
}

/// Parse tenant CSV text into rows
///
/// A first line mentioning "name" or "email" is a header and its column names
/// are used; otherwise columns are positional. Short rows default missing
/// fields to empty strings.
pub fn parse_tenant_csv(text: &str) -> RentbookResult<Vec<CsvTenantRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let Some(first) = records.next().transpose()? else {
        return Ok(Vec::new());
    };

    let (columns, mut rows) = if is_header(&first) {
        let columns = TenantColumns::from_header(&first);
        if columns.name.is_none() {
            return Err(RentbookError::Import(
                "CSV header has no name column".into(),
            ));
        }
        (columns, Vec::new())
    } else {
        let columns = TenantColumns::POSITIONAL;
        let rows = vec![columns.row(&first)];
        (columns, rows)
    };

    for record in records {
        rows.push(columns.row(&record?));
    }

    Ok(rows)
}

/// A validated tenant awaiting insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit_id: Option<UnitId>,
}

impl TenantDraft {
    pub fn into_tenant(self) -> Tenant {
        let mut tenant = Tenant::new(self.name);
        tenant.email = self.email;
        tenant.phone = self.phone;
        tenant.unit_id = self.unit_id;
        tenant
    }
}

/// A reconciled tenant row with any matching concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledTenant {
    pub draft: TenantDraft,
    pub warnings: Vec<String>,
}

/// Properties whose address matches `address`
///
/// Case-insensitive substring containment in either direction. An empty
/// address matches nothing.
pub fn match_properties<'a>(address: &str, properties: &'a [Property]) -> Vec<&'a Property> {
    let needle = address.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    properties
        .iter()
        .filter(|p| {
            let known = p.address.trim().to_lowercase();
            !known.is_empty() && (known.contains(&needle) || needle.contains(&known))
        })
        .collect()
}

/// Reconcile one CSV row against known properties and units
///
/// The first matching property is used; when several match, a warning lists
/// them so the choice is visible.
pub fn reconcile_csv_tenant_row(
    row: &CsvTenantRow,
    properties: &[Property],
    units: &[Unit],
) -> Result<ReconciledTenant, ImportIssue> {
    let name = row.name.trim();
    if name.is_empty() {
        let identifier = if row.email.trim().is_empty() {
            "(unnamed)".to_string()
        } else {
            row.email.trim().to_string()
        };
        return Err(ImportIssue::new(identifier, "name is required"));
    }

    let mut warnings = Vec::new();
    let matches = match_properties(&row.property_address, properties);
    let property = matches.first().copied();

    if matches.len() > 1 {
        let addresses: Vec<&str> = matches.iter().map(|p| p.address.as_str()).collect();
        warnings.push(format!(
            "address '{}' matches {} properties ({}); using '{}'",
            row.property_address.trim(),
            matches.len(),
            addresses.join(", "),
            addresses[0]
        ));
    } else if property.is_none() && !row.property_address.trim().is_empty() {
        warnings.push(format!(
            "no property matches '{}'; tenant left unassigned",
            row.property_address.trim()
        ));
    }

    let unit_number = row.unit_number.trim();
    let unit_id = match property {
        Some(property) if !unit_number.is_empty() => {
            let unit = units.iter().find(|u| {
                u.property_id == property.id && u.unit_number.trim().eq_ignore_ascii_case(unit_number)
            });
            if unit.is_none() {
                warnings.push(format!(
                    "unit '{}' not found at '{}'; tenant left unassigned",
                    unit_number, property.address
                ));
            }
            unit.map(|u| u.id.clone())
        }
        _ => None,
    };

    Ok(ReconciledTenant {
        draft: TenantDraft {
            name: name.to_string(),
            email: row.email.trim().to_string(),
            phone: row.phone.trim().to_string(),
            unit_id,
        },
        warnings,
    })
}

/// Reconcile every CSV row; rows without a name are skipped and counted
pub fn import_tenant_rows(
    rows: &[CsvTenantRow],
    properties: &[Property],
    units: &[Unit],
) -> ImportOutcome<TenantDraft> {
    let mut outcome = ImportOutcome::default();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        match reconcile_csv_tenant_row(row, properties, units) {
            Ok(reconciled) => {
                for message in reconciled.warnings {
                    outcome.warn(row_number, message);
                }
                outcome.imported.push(reconciled.draft);
            }
            Err(issue) => outcome.skip(issue.at_row(row_number)),
        }
    }

    info!(summary = %outcome.summary(), "reconciled tenant rows");
    outcome
}

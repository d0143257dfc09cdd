//! CLI command handlers for tenant CSV and bank batch imports
//!
//! Both imports reconcile every row first and then insert only the rows that
//! passed; skipped rows are reported with their reason.

use std::path::Path;

use clap::Subcommand;

use super::CliContext;
use crate::display::format_import_outcome;
use crate::error::{RentbookError, RentbookResult};
use crate::services::import::{
    import_tenant_rows, parse_tenant_csv, ReviewedSyncedTransaction,
};
use crate::services::{ReviewFields, TransactionImportReconciler};
use crate::storage::{read_json_required, LedgerStore};

/// Import subcommands
#[derive(Subcommand)]
pub enum ImportCommands {
    /// Import tenants from a CSV file (name, email, phone, property address, unit)
    Tenants {
        /// Path to the CSV file
        file: String,
    },
    /// Import reviewed bank transactions from a JSON batch file
    Bank {
        /// Path to the JSON file
        file: String,
        /// Institution the batch was exported from
        #[arg(short, long)]
        institution: Option<String>,
        /// Aggregation provider tag for a new connection
        #[arg(long, default_value = "manual", requires = "institution")]
        provider: String,
    },
}

fn read_file(file: &str) -> RentbookResult<String> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(RentbookError::Import(format!("File not found: {}", file)));
    }
    std::fs::read_to_string(path)
        .map_err(|e| RentbookError::Import(format!("Failed to read file: {}", e)))
}

/// Handle an import command
pub fn handle_import_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    cmd: ImportCommands,
) -> RentbookResult<()> {
    match cmd {
        ImportCommands::Tenants { file } => {
            let content = read_file(&file)?;
            let rows = parse_tenant_csv(&content)?;

            if rows.is_empty() {
                println!("No tenant rows found in file.");
                return Ok(());
            }

            let snapshot = store.snapshot();
            let outcome = import_tenant_rows(&rows, &snapshot.properties, &snapshot.units);

            for draft in outcome.imported.iter().cloned() {
                store.add_tenant(draft.into_tenant())?;
            }
            if outcome.succeeded() > 0 {
                store.save()?;
            }

            print!("{}", format_import_outcome(&outcome));
        }

        ImportCommands::Bank {
            file,
            institution,
            provider,
        } => {
            let batch: Vec<ReviewedSyncedTransaction> = read_json_required(&file)?;

            if batch.is_empty() {
                println!("No transactions found in file.");
                return Ok(());
            }

            let connection = match institution.as_deref() {
                Some(name) => Some(store.connect_bank(&provider, name)?),
                None => None,
            };

            let classifier = ctx.classifier();
            let items: Vec<_> = batch
                .into_iter()
                .map(|mut item| {
                    if item.synced.connection_id.is_none() {
                        item.synced.connection_id = connection.clone();
                    }
                    let defaults = ReviewFields::prefill(&item.synced, &classifier);
                    (item.synced, item.review.or_prefill(defaults))
                })
                .collect();

            let snapshot = store.snapshot();
            let outcome = TransactionImportReconciler::new(&snapshot.properties, &snapshot.units)
                .with_ledger(&snapshot.transactions)
                .reconcile_batch(&items);

            store.add_synced(items.into_iter().map(|(synced, _)| synced).collect());

            store.import_drafts(outcome.imported.clone())?;
            store.save()?;

            if let Some(name) = institution {
                println!("Linked to {}", name.trim());
            }
            print!("{}", format_import_outcome(&outcome));
            let pending = store.snapshot().synced.len();
            if pending > 0 {
                println!("{} synced transactions awaiting review", pending);
            }
        }
    }

    Ok(())
}

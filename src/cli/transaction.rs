//! Transaction, recurring rule and categorization CLI commands

use clap::{Args, Subcommand};

use super::{parse_date, parse_money, CliContext};
use crate::display::{format_recurring_overview, format_suggestion, format_transaction_register};
use crate::error::{RentbookError, RentbookResult};
use crate::models::{
    Frequency, RecurringId, RecurringTransaction, Transaction, TransactionId, TransactionType,
};
use crate::reports::{PropertyScope, ReportFilter};
use crate::services::category::{suggested_categories, type_of_category};
use crate::services::{CategorySuggester, RecurringScheduler};
use crate::storage::LedgerStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Property id or address
        property: String,
        /// Amount (e.g., "1200.00")
        amount: String,
        /// income or expense (inferred from the category or description when omitted)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// Category (suggested from the description when omitted)
        #[arg(short, long)]
        category: Option<String>,
        /// Unit id or number; omit for property-wide
        #[arg(short, long)]
        unit: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List transactions, newest first
    List {
        /// Property id or address
        #[arg(short, long)]
        property: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Maximum number of transactions to show
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },
}

/// `recurring` arguments; without a subcommand upcoming rules are shown
#[derive(Args)]
pub struct RecurringArgs {
    /// Show rules due within this many days
    #[arg(short, long, default_value = "30")]
    pub within: i64,
    #[command(subcommand)]
    pub command: Option<RecurringCommands>,
}

/// Recurring rule subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring rule
    Add {
        /// Property id or address
        property: String,
        /// Amount per occurrence
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type")]
        transaction_type: String,
        #[arg(short, long)]
        category: String,
        /// daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// First occurrence (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,
        /// Periods between occurrences
        #[arg(short, long, default_value = "1")]
        interval: i32,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete a recurring rule
    Delete {
        /// Rule id
        id: String,
    },
}

fn parse_type(value: &str) -> RentbookResult<TransactionType> {
    value.parse().map_err(|_| {
        RentbookError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            value
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    cmd: TransactionCommands,
) -> RentbookResult<()> {
    match cmd {
        TransactionCommands::Add {
            property,
            amount,
            transaction_type,
            category,
            unit,
            date,
            description,
        } => {
            let property = store.resolve_property(&property)?;
            let property_id = property.id.clone();
            let address = property.address.clone();
            let unit_id = match unit {
                Some(key) => Some(store.resolve_unit(&property_id, &key)?.id.clone()),
                None => None,
            };

            let classifier = ctx.classifier();
            let mut suggester = CategorySuggester::new(&classifier);
            if let Some(t) = transaction_type.as_deref() {
                suggester.set_type_manually(parse_type(t)?);
            }
            if let Some(category) = category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
                suggester.set_category_manually(category);
            }
            suggester.on_description_changed(&description);

            let transaction_type = suggester
                .transaction_type()
                .or_else(|| suggester.category().and_then(type_of_category))
                .ok_or_else(|| {
                    RentbookError::Validation(
                        "Transaction type is required (--type income|expense)".into(),
                    )
                })?;
            let category = suggester.category().map(str::to_string).ok_or_else(|| {
                RentbookError::Validation(
                    "Category is required; none could be suggested from the description".into(),
                )
            })?;

            let date = match date {
                Some(d) => parse_date(&d)?,
                None => ctx.today,
            };

            let mut txn = Transaction::new(
                property_id,
                transaction_type,
                category,
                parse_money(&amount)?,
                date,
            )
            .with_description(description.trim());
            txn.unit_id = unit_id;

            let summary = format!(
                "{} {} {} at {}",
                txn.transaction_type,
                txn.category,
                txn.amount.format_with_symbol(ctx.symbol()),
                address
            );
            let id = store.add_transaction(txn)?;
            store.save()?;
            println!("Recorded {}", summary);
            println!("  ID: {}", id);
        }

        TransactionCommands::List {
            property,
            start,
            end,
            limit,
        } => {
            let scope = match property {
                Some(key) => PropertyScope::Property(store.resolve_property(&key)?.id.clone()),
                None => PropertyScope::All,
            };
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;
            let filter = ReportFilter::new().between(start, end).for_property(scope);

            let snapshot = store.snapshot();
            let mut transactions: Vec<&Transaction> = filter.apply(&snapshot.transactions).collect();
            transactions.sort_by(|a, b| b.date.cmp(&a.date));
            transactions.truncate(limit);

            print!(
                "{}",
                format_transaction_register(
                    &transactions,
                    &snapshot.properties,
                    ctx.symbol(),
                    ctx.date_format()
                )
            );
        }

        TransactionCommands::Delete { id } => {
            let deleted = store.delete_transaction(&TransactionId::from(id.trim()))?;
            store.save()?;
            println!(
                "Deleted {} {} of {}",
                deleted.transaction_type,
                deleted.category,
                deleted.amount.format_with_symbol(ctx.symbol())
            );
        }
    }

    Ok(())
}

/// Handle the recurring command
pub fn handle_recurring_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    args: RecurringArgs,
) -> RentbookResult<()> {
    match args.command {
        None => {
            let overview = RecurringScheduler::upcoming(&store.snapshot().recurring, ctx.today, args.within);
            print!(
                "{}",
                format_recurring_overview(&overview, ctx.symbol(), ctx.date_format())
            );
        }

        Some(RecurringCommands::Add {
            property,
            amount,
            transaction_type,
            category,
            frequency,
            start,
            interval,
            description,
        }) => {
            let property_id = store.resolve_property(&property)?.id.clone();
            let frequency: Frequency = frequency
                .parse()
                .map_err(RentbookError::Validation)?;
            if interval <= 0 {
                return Err(RentbookError::Validation(format!(
                    "Interval must be positive, got {}",
                    interval
                )));
            }
            let start = match start {
                Some(d) => parse_date(&d)?,
                None => ctx.today,
            };

            let mut rule = RecurringTransaction::new(
                property_id,
                parse_type(&transaction_type)?,
                category.trim(),
                parse_money(&amount)?,
                frequency,
                start,
            )
            .with_description(description.trim());
            rule.interval = interval;

            let next_due = RecurringScheduler::next_due_date(&rule, ctx.today)?;
            let id = store.add_recurring(rule)?;
            store.save()?;
            println!("Added recurring rule, next due {}", next_due.format(ctx.date_format()));
            println!("  ID: {}", id);
        }

        Some(RecurringCommands::Delete { id }) => {
            let deleted = store.delete_recurring(&RecurringId::from(id.trim()))?;
            store.save()?;
            println!("Deleted recurring rule: {} ({})", deleted.category, deleted.frequency);
        }
    }

    Ok(())
}

/// Handle the classify command
pub fn handle_classify_command(
    ctx: &CliContext,
    description: &str,
    transaction_type: Option<&str>,
) -> RentbookResult<()> {
    let current = transaction_type.map(parse_type).transpose()?;
    let suggestion = ctx.classifier().classify(description, current);
    print!("{}", format_suggestion(suggestion.as_ref()));

    if let (None, Some(current)) = (&suggestion, current) {
        println!("Categories for {}: {}", current, suggested_categories(current).join(", "));
    }
    Ok(())
}

//! Report CLI commands

use clap::{Args, Subcommand};

use super::{parse_date, CliContext};
use crate::display::{
    format_category_breakdown, format_financial_report, format_monthly_series,
    format_projection, format_property_breakdown, format_summary,
};
use crate::error::RentbookResult;
use crate::reports::{CashFlowProjector, PropertyScope, ReportFilter};
use crate::storage::LedgerStore;

/// Filter arguments shared by every report
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
    /// Property id or address, or "all"
    #[arg(short, long, default_value = "all")]
    pub property: String,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Dashboard: totals, categories and properties
    Summary(FilterArgs),
    /// Income and expenses per month
    Monthly(FilterArgs),
    /// Income and expenses per category
    Categories(FilterArgs),
    /// Income and expenses per property
    Properties(FilterArgs),
    /// Projected balance for the coming months
    Forecast {
        #[command(flatten)]
        filter: FilterArgs,
        /// Number of months to project (defaults to settings)
        #[arg(short, long)]
        months: Option<u32>,
    },
}

fn build_filter(store: &LedgerStore, args: &FilterArgs) -> RentbookResult<ReportFilter> {
    let start = args.start.as_deref().map(parse_date).transpose()?;
    let end = args.end.as_deref().map(parse_date).transpose()?;

    let property = match PropertyScope::parse(&args.property) {
        PropertyScope::All => PropertyScope::All,
        PropertyScope::Property(_) => {
            PropertyScope::Property(store.resolve_property(&args.property)?.id.clone())
        }
    };

    Ok(ReportFilter::new().between(start, end).for_property(property))
}

/// Handle a report command
pub fn handle_report_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    cmd: ReportCommands,
) -> RentbookResult<()> {
    let symbol = ctx.symbol();

    match cmd {
        ReportCommands::Summary(args) => {
            let filter = build_filter(store, &args)?;
            let report = store.report(&filter);
            print!("{}", format_financial_report(report, symbol));
        }

        ReportCommands::Monthly(args) => {
            let filter = build_filter(store, &args)?;
            let report = store.report(&filter);
            print!("{}", format_monthly_series(&report.monthly, symbol));
        }

        ReportCommands::Categories(args) => {
            let filter = build_filter(store, &args)?;
            let report = store.report(&filter);
            print!(
                "{}",
                format_category_breakdown("Income by category", &report.income_by_category, symbol)
            );
            println!();
            print!(
                "{}",
                format_category_breakdown("Expenses by category", &report.expenses_by_category, symbol)
            );
        }

        ReportCommands::Properties(args) => {
            let filter = build_filter(store, &args)?;
            let report = store.report(&filter);
            match &report.by_property {
                Some(breakdown) => print!("{}", format_property_breakdown(breakdown, symbol)),
                None => print!("{}", format_summary(&report.summary, symbol)),
            }
        }

        ReportCommands::Forecast { filter, months } => {
            let filter = build_filter(store, &filter)?;
            let months = months.unwrap_or(ctx.settings.projection_months);
            let net_profit = store.report(&filter).summary.net_profit;

            let history: Vec<_> = filter
                .apply(&store.snapshot().transactions)
                .cloned()
                .collect();
            let projection = CashFlowProjector::project(&history, net_profit, months, ctx.today);

            println!("Net profit to date: {}", net_profit.format_with_symbol(symbol));
            println!();
            print!("{}", format_projection(&projection, symbol));
        }
    }

    Ok(())
}

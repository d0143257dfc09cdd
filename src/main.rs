use anyhow::Result;
use clap::{Parser, Subcommand};

use rentbook::cli::{
    handle_classify_command, handle_import_command, handle_leases_command,
    handle_property_command, handle_recurring_command, handle_reminders_command,
    handle_report_command, handle_tenants_command, handle_transaction_command,
    handle_unit_command, parse_date, CliContext,
};
use rentbook::config::{RentbookPaths, Settings};

#[derive(Parser)]
#[command(
    name = "rentbook",
    author = "Kaylee Beyene",
    version,
    about = "Landlord bookkeeping from the terminal",
    long_about = "Rentbook tracks rental properties, units, tenants and their \
                  income and expenses, and reports profit, cash-flow projections, \
                  rent status, expiring leases and rent reminders."
)]
struct Cli {
    /// Reference date for status and reminders (YYYY-MM-DD), defaults to today
    #[arg(long, global = true, env = "RENTBOOK_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Property management commands
    #[command(subcommand)]
    Property(rentbook::cli::PropertyCommands),

    /// Unit management commands
    #[command(subcommand)]
    Unit(rentbook::cli::UnitCommands),

    /// Tenant board and tenant management
    Tenants(rentbook::cli::TenantsArgs),

    /// Leases ending soon
    Leases {
        /// Horizon in days (defaults to settings)
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Rent reminders and reminder settings
    Reminders(rentbook::cli::RemindersArgs),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(rentbook::cli::TransactionCommands),

    /// Recurring income and expense rules
    Recurring(rentbook::cli::RecurringArgs),

    /// Suggest a category for a description
    Classify {
        description: String,
        /// Current transaction type (income or expense)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
    },

    /// Financial reports
    #[command(subcommand)]
    Report(rentbook::cli::ReportCommands),

    /// Import tenants or bank transactions
    #[command(subcommand)]
    Import(rentbook::cli::ImportCommands),
}

fn main() -> Result<()> {
    rentbook::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RentbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let today = match cli.today.as_deref() {
        Some(value) => parse_date(value)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut store = rentbook::storage::open(&paths)?;
    let ctx = CliContext {
        paths: paths.clone(),
        settings,
        today,
    };

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing rentbook at: {}", paths.base_dir().display());
            ctx.settings.save(&paths)?;
            store.save()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'rentbook property add <address>' to add your first property.");
        }
        Some(Commands::Config) => {
            println!("Rentbook Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Ledger file:     {}", paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", ctx.settings.currency_symbol);
            println!("  Date format:          {}", ctx.settings.date_format);
            println!("  Rent grace days:      {}", ctx.settings.rent_grace_days);
            println!("  Lease expiring days:  {}", ctx.settings.lease_expiring_days);
            println!(
                "  Lease horizon days:   {}",
                ctx.settings.expiring_lease_horizon_days
            );
            println!("  Projection months:    {}", ctx.settings.projection_months);
            println!("  Custom category rules: {}", ctx.settings.custom_category_rules.len());
        }
        Some(Commands::Property(cmd)) => handle_property_command(&mut store, &ctx, cmd)?,
        Some(Commands::Unit(cmd)) => handle_unit_command(&mut store, &ctx, cmd)?,
        Some(Commands::Tenants(args)) => handle_tenants_command(&mut store, &ctx, args)?,
        Some(Commands::Leases { days }) => handle_leases_command(&store, &ctx, days)?,
        Some(Commands::Reminders(args)) => handle_reminders_command(&mut store, &ctx, args)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&mut store, &ctx, cmd)?,
        Some(Commands::Recurring(args)) => handle_recurring_command(&mut store, &ctx, args)?,
        Some(Commands::Classify {
            description,
            transaction_type,
        }) => handle_classify_command(&ctx, &description, transaction_type.as_deref())?,
        Some(Commands::Report(cmd)) => handle_report_command(&mut store, &ctx, cmd)?,
        Some(Commands::Import(cmd)) => handle_import_command(&mut store, &ctx, cmd)?,
        None => {
            println!("Rentbook - landlord bookkeeping from the terminal");
            println!();
            println!("Run 'rentbook --help' for usage information.");
        }
    }

    Ok(())
}

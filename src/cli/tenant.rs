//! Tenant, lease and reminder CLI commands

use clap::{Args, Subcommand};

use super::{parse_money, CliContext};
use crate::display::{format_expiring_leases, format_reminder_report, format_tenant_board};
use crate::error::{RentbookError, RentbookResult};
use crate::models::{ReminderSettings, Tenant};
use crate::services::{ReminderEvaluator, RentStatusEngine};
use crate::storage::LedgerStore;

/// `tenants` arguments; without a subcommand the status board is shown
#[derive(Args)]
pub struct TenantsArgs {
    #[command(subcommand)]
    pub command: Option<TenantCommands>,
}

/// Tenant subcommands
#[derive(Subcommand)]
pub enum TenantCommands {
    /// Add a tenant, optionally assigned to a unit
    Add {
        /// Tenant name
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Property id or address (required with --unit)
        #[arg(short, long)]
        property: Option<String>,
        /// Unit id or number within the property
        #[arg(short, long, requires = "property")]
        unit: Option<String>,
    },
    /// Move a tenant to a unit
    Assign {
        /// Tenant id or name
        tenant: String,
        /// Property id or address
        property: String,
        /// Unit id or number
        unit: String,
    },
    /// Remove a tenant and their reminder settings
    Delete {
        /// Tenant id or name
        tenant: String,
    },
}

/// `reminders` arguments; without a subcommand today's reminders are shown
#[derive(Args)]
pub struct RemindersArgs {
    #[command(subcommand)]
    pub command: Option<ReminderCommands>,
}

/// Reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Create or replace a tenant's reminder settings
    Set {
        /// Tenant id or name
        tenant: String,
        /// Days before the due date to remind
        #[arg(long, default_value = "3")]
        due_days: i64,
        /// Days after the due date before the late fee applies
        #[arg(long, default_value = "5")]
        late_days: i64,
        /// Late fee amount
        #[arg(long, default_value = "0")]
        fee: String,
        /// Disable reminders for this tenant
        #[arg(long)]
        disable: bool,
    },
}

/// Handle the tenants command
pub fn handle_tenants_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    args: TenantsArgs,
) -> RentbookResult<()> {
    match args.command {
        None => {
            let engine = RentStatusEngine::from_settings(&ctx.settings);
            let snapshot = store.snapshot();
            let statuses = engine.tenant_statuses(
                &snapshot.tenants,
                &snapshot.units,
                &snapshot.transactions,
                ctx.today,
            );
            print!("{}", format_tenant_board(&statuses, ctx.symbol()));
        }

        Some(TenantCommands::Add {
            name,
            email,
            phone,
            property,
            unit,
        }) => {
            let mut tenant = Tenant::new(name.trim());
            tenant.email = email.trim().to_string();
            tenant.phone = phone.trim().to_string();

            let mut placement = None;
            if let (Some(property), Some(unit)) = (property, unit) {
                let property = store.resolve_property(&property)?;
                let unit = store.resolve_unit(&property.id, &unit)?;
                placement = Some(format!("{} unit {}", property.address, unit.unit_number));
                tenant = tenant.assigned_to(unit.id.clone());
            }

            let id = store.add_tenant(tenant)?;
            store.save()?;
            match placement {
                Some(placement) => println!("Added tenant: {} ({})", name.trim(), placement),
                None => println!("Added tenant: {}", name.trim()),
            }
            println!("  ID: {}", id);
        }

        Some(TenantCommands::Assign {
            tenant,
            property,
            unit,
        }) => {
            let mut updated = store.resolve_tenant(&tenant)?.clone();
            let property = store.resolve_property(&property)?;
            let unit = store.resolve_unit(&property.id, &unit)?;
            let placement = format!("{} unit {}", property.address, unit.unit_number);
            updated.unit_id = Some(unit.id.clone());

            let name = updated.name.clone();
            store.update_tenant(updated)?;
            store.save()?;
            println!("Assigned {} to {}", name, placement);
        }

        Some(TenantCommands::Delete { tenant }) => {
            let id = store.resolve_tenant(&tenant)?.id.clone();
            let deleted = store.delete_tenant(&id)?;
            store.save()?;
            println!("Deleted tenant: {}", deleted.name);
        }
    }

    Ok(())
}

/// Handle the leases command
pub fn handle_leases_command(
    store: &LedgerStore,
    ctx: &CliContext,
    days: Option<i64>,
) -> RentbookResult<()> {
    let horizon = days.unwrap_or(ctx.settings.expiring_lease_horizon_days);
    if horizon < 0 {
        return Err(RentbookError::Validation(format!(
            "Lease horizon must be non-negative, got {}",
            horizon
        )));
    }

    let snapshot = store.snapshot();
    let leases = ReminderEvaluator::expiring_leases(
        &snapshot.tenants,
        &snapshot.units,
        &snapshot.properties,
        ctx.today,
        horizon,
    );
    print!("{}", format_expiring_leases(&leases, ctx.date_format()));
    Ok(())
}

/// Handle the reminders command
pub fn handle_reminders_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    args: RemindersArgs,
) -> RentbookResult<()> {
    match args.command {
        None => {
            let snapshot = store.snapshot();
            let report = ReminderEvaluator::evaluate(
                &snapshot.tenants,
                &snapshot.reminders,
                &snapshot.transactions,
                ctx.today,
            );
            print!(
                "{}",
                format_reminder_report(&report, ctx.symbol(), ctx.date_format())
            );
        }

        Some(ReminderCommands::Set {
            tenant,
            due_days,
            late_days,
            fee,
            disable,
        }) => {
            let tenant = store.resolve_tenant(&tenant)?;
            let name = tenant.name.clone();

            let mut settings = ReminderSettings::new(tenant.id.clone(), due_days, late_days)
                .with_late_fee(parse_money(&fee)?);
            settings.enabled = !disable;

            store.set_reminder(settings)?;
            store.save()?;
            println!("Reminder settings saved for {}", name);
        }
    }

    Ok(())
}

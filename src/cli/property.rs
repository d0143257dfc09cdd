//! Property and unit CLI commands

use clap::Subcommand;

use super::{parse_date, parse_money, CliContext};
use crate::error::RentbookResult;
use crate::models::Property;
use crate::models::Unit;
use crate::storage::LedgerStore;

/// Property subcommands
#[derive(Subcommand)]
pub enum PropertyCommands {
    /// Add a property
    Add {
        /// Street address
        address: String,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Type tag (e.g., "single-family")
        #[arg(short = 't', long = "type")]
        property_type: Option<String>,
    },
    /// List properties with their unit counts
    List,
    /// Delete a property and its transactions
    Delete {
        /// Property id or address
        property: String,
    },
}

/// Unit subcommands
#[derive(Subcommand)]
pub enum UnitCommands {
    /// Add a unit to a property
    Add {
        /// Property id or address
        property: String,
        /// Unit number or name
        unit_number: String,
        /// Monthly rent (e.g., "1200.00")
        #[arg(short, long)]
        rent: Option<String>,
        /// Lease end date (YYYY-MM-DD)
        #[arg(short, long)]
        lease_end: Option<String>,
    },
    /// List units
    List {
        /// Only units of this property
        #[arg(short, long)]
        property: Option<String>,
    },
    /// Set or clear a unit's rent and lease end
    Edit {
        /// Property id or address
        property: String,
        /// Unit id or number
        unit: String,
        #[arg(short, long)]
        rent: Option<String>,
        #[arg(short, long)]
        lease_end: Option<String>,
        /// Remove the lease end date
        #[arg(long, conflicts_with = "lease_end")]
        clear_lease: bool,
    },
    /// Delete a unit
    Delete {
        /// Property id or address
        property: String,
        /// Unit id or number
        unit: String,
    },
}

/// Handle a property command
pub fn handle_property_command(
    store: &mut LedgerStore,
    _ctx: &CliContext,
    cmd: PropertyCommands,
) -> RentbookResult<()> {
    match cmd {
        PropertyCommands::Add {
            address,
            notes,
            property_type,
        } => {
            let mut property = Property::new(address.trim());
            property.notes = notes;
            property.property_type = property_type;

            let id = store.add_property(property)?;
            store.save()?;
            println!("Added property: {}", address.trim());
            println!("  ID: {}", id);
        }

        PropertyCommands::List => {
            let properties = &store.snapshot().properties;
            if properties.is_empty() {
                println!("No properties found.");
                return Ok(());
            }

            println!("{:38} {:32} {:>5}", "ID", "Address", "Units");
            println!("{}", "-".repeat(77));
            for property in properties {
                let units = store.snapshot().units_of(&property.id).count();
                println!("{:38} {:32} {:>5}", property.id.as_str(), property.address, units);
            }
        }

        PropertyCommands::Delete { property } => {
            let id = store.resolve_property(&property)?.id.clone();
            let deleted = store.delete_property(&id)?;
            store.save()?;
            println!(
                "Deleted property: {} ({} transactions removed)",
                deleted.property.address, deleted.transactions_removed
            );
        }
    }

    Ok(())
}

/// Handle a unit command
pub fn handle_unit_command(
    store: &mut LedgerStore,
    ctx: &CliContext,
    cmd: UnitCommands,
) -> RentbookResult<()> {
    match cmd {
        UnitCommands::Add {
            property,
            unit_number,
            rent,
            lease_end,
        } => {
            let property = store.resolve_property(&property)?;
            let address = property.address.clone();

            let mut unit = Unit::new(property.id.clone(), unit_number.trim());
            if let Some(rent) = rent {
                unit = unit.with_rent(parse_money(&rent)?);
            }
            if let Some(lease_end) = lease_end {
                unit = unit.with_lease_end(parse_date(&lease_end)?);
            }

            let id = store.add_unit(unit)?;
            store.save()?;
            println!("Added unit {} at {}", unit_number.trim(), address);
            println!("  ID: {}", id);
        }

        UnitCommands::List { property } => {
            let property_id = match property {
                Some(key) => Some(store.resolve_property(&key)?.id.clone()),
                None => None,
            };

            let snapshot = store.snapshot();
            let units: Vec<&Unit> = snapshot
                .units
                .iter()
                .filter(|u| property_id.as_ref().map_or(true, |id| &u.property_id == id))
                .collect();

            if units.is_empty() {
                println!("No units found.");
                return Ok(());
            }

            println!("{:24} {:8} {:>12} {:12}", "Property", "Unit", "Rent", "Lease End");
            println!("{}", "-".repeat(59));
            for unit in units {
                let address = store
                    .property(&unit.property_id)
                    .map(|p| p.address.as_str())
                    .unwrap_or("?");
                let rent = unit
                    .rent
                    .map(|r| r.format_with_symbol(ctx.symbol()))
                    .unwrap_or_else(|| "-".to_string());
                let lease_end = unit
                    .lease_end
                    .map(|d| d.format(ctx.date_format()).to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{:24} {:8} {:>12} {:12}", address, unit.unit_number, rent, lease_end);
            }
        }

        UnitCommands::Edit {
            property,
            unit,
            rent,
            lease_end,
            clear_lease,
        } => {
            let property_id = store.resolve_property(&property)?.id.clone();
            let mut updated = store.resolve_unit(&property_id, &unit)?.clone();
            if let Some(rent) = rent {
                updated.rent = Some(parse_money(&rent)?);
            }
            if let Some(lease_end) = lease_end {
                updated.lease_end = Some(parse_date(&lease_end)?);
            }
            if clear_lease {
                updated.lease_end = None;
            }

            let unit_number = updated.unit_number.clone();
            store.update_unit(updated)?;
            store.save()?;
            println!("Updated unit {}", unit_number);
        }

        UnitCommands::Delete { property, unit } => {
            let property_id = store.resolve_property(&property)?.id.clone();
            let unit_id = store.resolve_unit(&property_id, &unit)?.id.clone();
            let deleted = store.delete_unit(&unit_id)?;
            store.save()?;
            println!("Deleted unit {}", deleted.unit_number);
        }
    }

    Ok(())
}

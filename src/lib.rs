//! Rentbook - landlord bookkeeping from the terminal
//!
//! This library provides the core functionality for the rentbook CLI. It
//! tracks properties, units, tenants and their income and expenses, and
//! derives reports, cash-flow projections, rent status and reminders from a
//! single JSON ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (properties, units, tenants, transactions)
//! - `storage`: JSON snapshot storage with a generation-keyed report cache
//! - `services`: Categorization, recurring schedules, rent status, reminders, imports
//! - `reports`: Financial aggregation and cash-flow projection
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use rentbook::config::{RentbookPaths, Settings};
//!
//! let paths = RentbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = rentbook::storage::open(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{RentbookError, RentbookResult};

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install the stderr log subscriber
///
/// Honors `RUST_LOG` and defaults to warnings only.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rentbook=warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

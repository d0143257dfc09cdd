//! Storage layer for rentbook
//!
//! A single JSON snapshot written atomically, owned by [`LedgerStore`].

pub mod file_io;
pub mod ledger;
pub mod snapshot;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use ledger::{DeletedProperty, LedgerStore};
pub use snapshot::Snapshot;

use crate::config::RentbookPaths;
use crate::error::RentbookResult;

/// Open the ledger at its configured location, creating directories as needed
pub fn open(paths: &RentbookPaths) -> RentbookResult<LedgerStore> {
    paths.ensure_directories()?;
    LedgerStore::load(paths.snapshot_file())
}

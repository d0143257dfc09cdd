//! JSON persistence helpers
//!
//! The ledger is one pretty-printed JSON document. Saves go through a sibling
//! `.tmp` file and a rename, so an interrupted save leaves the previous
//! ledger in place.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{RentbookError, RentbookResult};

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> RentbookError {
    RentbookError::Storage(format!("{} {}: {}", action, path.display(), err))
}

/// Parse a JSON document, or `None` when the file does not exist
pub fn load_json<T: DeserializeOwned>(path: &Path) -> RentbookResult<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("Failed to read", path, e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| storage_error("Failed to parse", path, e))
}

/// Like [`load_json`], with a missing file read as `T::default()`
pub fn read_json<T>(path: impl AsRef<Path>) -> RentbookResult<T>
where
    T: DeserializeOwned + Default,
{
    Ok(load_json(path.as_ref())?.unwrap_or_default())
}

/// Like [`load_json`], with a missing file as an error
pub fn read_json_required<T: DeserializeOwned>(path: impl AsRef<Path>) -> RentbookResult<T> {
    let path = path.as_ref();
    load_json(path)?
        .ok_or_else(|| RentbookError::Storage(format!("File not found: {}", path.display())))
}

/// Replace `path` with the JSON form of `data`
pub fn write_json_atomic<T: Serialize>(path: impl AsRef<Path>, data: &T) -> RentbookResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(data).map_err(|e| RentbookError::Json(e.to_string()))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| storage_error("Failed to create", dir, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let written = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("Failed to write", path, e));
    }

    debug!(path = %path.display(), bytes = json.len(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Property, Tenant};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none_or_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        assert!(load_json::<Vec<Property>>(&path).unwrap().is_none());
        let data: Vec<Property> = read_json(&path).unwrap();
        assert!(data.is_empty());
        assert!(matches!(
            read_json_required::<Vec<Tenant>>(&path).unwrap_err(),
            RentbookError::Storage(_)
        ));
    }

    #[test]
    fn test_overwrite_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("properties.json");

        write_json_atomic(&path, &vec![Property::with_id("p1", "12 Elm St")]).unwrap();
        let replacement = vec![Property::with_id("p2", "9 Oak Ave")];
        write_json_atomic(&path, &replacement).unwrap();

        let loaded: Vec<Property> = read_json_required(&path).unwrap();
        assert_eq!(loaded, replacement);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_write_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be replaced by the rename
        let path = temp_dir.path().join("ledger.json");
        fs::create_dir(&path).unwrap();

        let err = write_json_atomic(&path, &vec![Tenant::new("Ana")]).unwrap_err();
        assert!(err.to_string().contains("ledger.json"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("batch.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json_required::<Vec<Tenant>>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("batch.json"));
    }
}

//! Custom error types for rentbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Row-level import failures are collected as
//! [`crate::services::import::ImportIssue`] values instead.

use thiserror::Error;

/// The main error type for rentbook operations
#[derive(Error, Debug)]
pub enum RentbookError {
    /// Configuration-related errors, including invalid recurring rules and
    /// reminder settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors that prevent a batch from being read at all
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RentbookError {
    /// Create a "not found" error for properties
    pub fn property_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Property",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for units
    pub fn unit_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Unit",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for tenants
    pub fn tenant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Tenant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for recurring rules
    pub fn recurring_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recurring transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RentbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for RentbookError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for rentbook operations
pub type RentbookResult<T> = Result<T, RentbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentbookError::Config("unknown frequency 'fortnightly'".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown frequency 'fortnightly'"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_not_found_error() {
        let err = RentbookError::property_not_found("12 Elm St");
        assert_eq!(err.to_string(), "Property not found: 12 Elm St");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RentbookError = io_err.into();
        assert!(matches!(err, RentbookError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RentbookError = json_err.into();
        assert!(matches!(err, RentbookError::Json(_)));
    }
}

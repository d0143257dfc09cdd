//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are opaque strings owned by the persistence collaborator. The
//! newtype wrappers prevent accidentally mixing up IDs from different entity
//! types at compile time; locally created entities get a UUID v4 string.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(PropertyId);
define_id!(UnitId);
define_id!(TenantId);
define_id!(TransactionId);
define_id!(RecurringId);
define_id!(SyncedTransactionId);
define_id!(BankConnectionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = PropertyId::new();
        let b = PropertyId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_external_ids_are_opaque() {
        let id = UnitId::from("unit-4B");
        assert_eq!(id.as_str(), "unit-4B");
        assert_eq!(id.to_string(), "unit-4B");
    }

    #[test]
    fn test_id_serialization() {
        let id = TenantId::from("t-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"t-1\"");

        let deserialized: TenantId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

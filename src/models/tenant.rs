//! Tenant model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TenantId, UnitId};

/// A tenant, optionally assigned to a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Assigned unit; None means unassigned
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Tenant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TenantId::new(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            unit_id: None,
            notes: None,
        }
    }

    pub fn assigned_to(mut self, unit_id: UnitId) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.unit_id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Tenant name cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment() {
        let tenant = Tenant::new("Ada");
        assert!(!tenant.is_assigned());
        let tenant = tenant.assigned_to(UnitId::from("u1"));
        assert!(tenant.is_assigned());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(Tenant::new("").validate().is_err());
        assert!(Tenant::new("Ada").validate().is_ok());
    }
}

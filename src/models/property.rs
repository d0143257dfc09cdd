//! Property and unit models
//!
//! A property owns zero or more units; each unit carries its own rent and
//! lease terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PropertyId, UnitId};
use super::money::Money;

/// A rental property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: PropertyId,

    /// Street address, used for display and CSV address matching
    pub address: String,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional type tag (e.g., "single-family", "multi-unit")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl Property {
    /// Create a new property
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            id: PropertyId::new(),
            address: address.into(),
            notes: None,
            property_type: None,
        }
    }

    /// Create a property with a known identifier
    pub fn with_id(id: impl Into<PropertyId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(address)
        }
    }

    /// Validate the property
    pub fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("Property address cannot be empty".into());
        }
        Ok(())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// A rentable unit within a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier
    pub id: UnitId,

    /// The owning property
    pub property_id: PropertyId,

    /// Unit number or name (e.g., "4B")
    pub unit_number: String,

    /// Monthly rent, if set
    #[serde(default)]
    pub rent: Option<Money>,

    /// Lease end date, if a lease is on file
    #[serde(default)]
    pub lease_end: Option<NaiveDate>,
}

impl Unit {
    /// Create a new unit
    pub fn new(property_id: PropertyId, unit_number: impl Into<String>) -> Self {
        Self {
            id: UnitId::new(),
            property_id,
            unit_number: unit_number.into(),
            rent: None,
            lease_end: None,
        }
    }

    /// Set the monthly rent
    pub fn with_rent(mut self, rent: Money) -> Self {
        self.rent = Some(rent);
        self
    }

    /// Set the lease end date
    pub fn with_lease_end(mut self, lease_end: NaiveDate) -> Self {
        self.lease_end = Some(lease_end);
        self
    }

    /// Monthly rent, treating a missing rent as zero
    pub fn rent_or_zero(&self) -> Money {
        self.rent.unwrap_or_default()
    }

    /// Validate the unit
    pub fn validate(&self) -> Result<(), String> {
        if self.unit_number.trim().is_empty() {
            return Err("Unit number cannot be empty".into());
        }
        if self.rent.is_some_and(|r| r.is_negative()) {
            return Err(format!("Rent for unit {} cannot be negative", self.unit_number));
        }
        Ok(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit {}", self.unit_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit_defaults() {
        let property = Property::new("12 Elm St");
        let unit = Unit::new(property.id.clone(), "4B");
        assert_eq!(unit.property_id, property.id);
        assert_eq!(unit.rent_or_zero(), Money::zero());
        assert!(unit.lease_end.is_none());
    }

    #[test]
    fn test_validation() {
        assert!(Property::new("  ").validate().is_err());
        let unit = Unit::new(PropertyId::from("p1"), "1").with_rent(Money::from_cents(-1));
        assert!(unit.validate().is_err());
    }

    #[test]
    fn test_property_serializes_type_tag() {
        let mut property = Property::with_id("p1", "12 Elm St");
        property.property_type = Some("duplex".into());
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["type"], "duplex");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_unit_deserializes_without_optional_fields() {
        let unit: Unit =
            serde_json::from_str(r#"{"id":"u1","property_id":"p1","unit_number":"2"}"#).unwrap();
        assert!(unit.rent.is_none());
        assert!(unit.lease_end.is_none());
    }
}

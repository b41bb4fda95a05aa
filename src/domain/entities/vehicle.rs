//! # Vehicle Entity
//!
//! The stored vehicle record and the transformations applied to it during
//! its lifecycle.
//!
//! A [`Vehicle`] moves through three shapes:
//!
//! - **unsaved**: no id, built by the caller;
//! - **stored**: id and timestamps assigned by the record store
//!   ([`Vehicle::mark_persisted`]);
//! - **enriched**: a read-only copy with a display price and a resolved
//!   location ([`Vehicle::enriched`]). Enriched copies are returned to the
//!   caller and never handed back to the store by read operations.
//!
//! # Examples
//!
//! ```
//! use vehicle_aggregation::domain::entities::{Details, Vehicle};
//! use vehicle_aggregation::domain::value_objects::{Condition, Location};
//!
//! let vehicle = Vehicle::new(Condition::New, Details::default(), Location::new(40.7, -73.9));
//! assert!(vehicle.id().is_none());
//! assert!(vehicle.price().is_none());
//! ```

use crate::domain::value_objects::{Condition, Location, VehicleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Manufacturer of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Manufacturer code.
    pub code: u32,
    /// Manufacturer name.
    pub name: String,
}

impl Manufacturer {
    /// Creates a new manufacturer.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Descriptive attributes of a vehicle.
///
/// Passed through the service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Details {
    /// Body style, e.g. "sedan".
    pub body: String,
    /// Model name.
    pub model: String,
    /// Manufacturer.
    pub manufacturer: Manufacturer,
    /// Number of doors.
    pub number_of_doors: Option<u8>,
    /// Fuel type, e.g. "Gasoline".
    pub fuel_type: Option<String>,
    /// Engine description.
    pub engine: Option<String>,
    /// Mileage.
    pub mileage: Option<u32>,
    /// Model year.
    pub model_year: Option<u16>,
    /// Production year.
    pub production_year: Option<u16>,
    /// External color.
    pub external_color: Option<String>,
}

/// A vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<VehicleId>,
    #[serde(default)]
    condition: Condition,
    #[serde(default)]
    details: Details,
    location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Creates a new, not yet persisted vehicle.
    #[must_use]
    pub fn new(condition: Condition, details: Details, location: Location) -> Self {
        Self {
            id: None,
            condition,
            details,
            location,
            price: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Sets the identifier, turning this value into an update payload.
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Returns the identifier, if assigned.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<VehicleId> {
        self.id
    }

    /// Returns the condition.
    #[inline]
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the descriptive details.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Returns the location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the price, if set.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    /// Returns when the record was first stored.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns when the record was last stored.
    #[inline]
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Returns true if the record has not been persisted yet.
    #[inline]
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Stamps the record as stored at `now`.
    ///
    /// An existing id is kept; `fresh_id` is only used when none is set.
    /// `created_at` is set once, `modified_at` on every call.
    #[must_use]
    pub fn mark_persisted(mut self, fresh_id: VehicleId, now: DateTime<Utc>) -> Self {
        self.id = Some(self.id.unwrap_or(fresh_id));
        self.created_at = Some(self.created_at.unwrap_or(now));
        self.modified_at = Some(now);
        self
    }

    /// Applies an update payload onto this stored record.
    ///
    /// Only condition, details, location and price are taken from `incoming`.
    #[must_use]
    pub fn merge_update(mut self, incoming: &Vehicle) -> Self {
        self.condition = incoming.condition;
        self.details = incoming.details.clone();
        self.location = incoming.location.clone();
        self.price = incoming.price.clone();
        self
    }

    /// Builds the read-time view of this record.
    #[must_use]
    pub fn enriched(&self, price: String, location: Location) -> Self {
        Self {
            price: Some(price),
            location,
            ..self.clone()
        }
    }
}

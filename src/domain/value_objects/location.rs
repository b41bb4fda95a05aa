//! # Location
//!
//! Raw coordinates of a vehicle and the address resolved for them.
//!
//! A stored [`Location`] normally carries only coordinates. Address fields
//! are filled in on read by the location provider and are not persisted by
//! read operations.
//!
//! # Examples
//!
//! ```
//! use vehicle_aggregation::domain::value_objects::{Address, Location};
//!
//! let raw = Location::new(40.730610, -73.935242);
//! assert!(!raw.is_resolved());
//!
//! let resolved = raw.with_address(Address::new("777 Brockton Avenue", "Abington", "MA", "2351"));
//! assert!(resolved.is_resolved());
//! assert_eq!(resolved.lat(), raw.lat());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable address returned by the location provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

impl Address {
    /// Creates a new address.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.address, self.city, self.state, self.zip)
    }
}

/// Location of a vehicle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    lat: f64,
    lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
}

impl Location {
    /// Creates an unresolved location from coordinates.
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }

    /// Latitude in decimal degrees.
    #[inline]
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[inline]
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Street address, if resolved.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// City, if resolved.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// State, if resolved.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Postal code, if resolved.
    #[must_use]
    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    /// Returns true if an address has been attached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.address.is_some()
    }

    /// Returns a copy carrying the same coordinates and the given address.
    #[must_use]
    pub fn with_address(&self, address: Address) -> Self {
        Self {
            lat: self.lat,
            lon: self.lon,
            address: Some(address.address),
            city: Some(address.city),
            state: Some(address.state),
            zip: Some(address.zip),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address::new("777 Brockton Avenue", "Abington", "MA", "2351")
    }

    #[test]
    fn with_address_keeps_coordinates() {
        let raw = Location::new(40.73, -73.93);
        let resolved = raw.with_address(sample_address());

        assert_eq!(resolved.lat(), 40.73);
        assert_eq!(resolved.lon(), -73.93);
        assert_eq!(resolved.city(), Some("Abington"));
        assert_eq!(resolved.zip(), Some("2351"));
        assert!(!raw.is_resolved());
    }

    #[test]
    fn unresolved_location_serializes_coordinates_only() {
        let json = serde_json::to_value(Location::new(1.5, 2.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lon": 2.5 }));
    }

    #[test]
    fn deserializes_without_address_fields() {
        let loc: Location = serde_json::from_str(r#"{"lat": 10.0, "lon": 20.0}"#).unwrap();
        assert!(!loc.is_resolved());
        assert_eq!(loc.address(), None);
    }

    #[test]
    fn address_display() {
        assert_eq!(
            sample_address().to_string(),
            "777 Brockton Avenue, Abington, MA 2351"
        );
    }
}

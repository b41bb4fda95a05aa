//! # Vehicle Condition
//!
//! Whether a vehicle is offered as new or used.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition of a vehicle.
///
/// # Examples
///
/// ```
/// use vehicle_aggregation::domain::value_objects::Condition;
///
/// assert_eq!(Condition::default(), Condition::Used);
/// assert_eq!(Condition::New.to_string(), "NEW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Previously owned vehicle.
    #[default]
    Used,
    /// Brand new vehicle.
    New,
}

impl Condition {
    /// Returns true if the vehicle is new.
    #[inline]
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Used => write!(f, "USED"),
            Self::New => write!(f, "NEW"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_upper_case() {
        assert_eq!(serde_json::to_string(&Condition::New).unwrap(), "\"NEW\"");
        let used: Condition = serde_json::from_str("\"USED\"").unwrap();
        assert_eq!(used, Condition::Used);
        assert!(!used.is_new());
    }
}

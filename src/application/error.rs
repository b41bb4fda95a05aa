//! # Application Errors
//!
//! Error types surfaced by the vehicle service.
//!
//! Only identity errors and store failures reach the caller. Provider
//! failures are absorbed by enrichment and never appear here.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── VehicleNotFound(VehicleId)   - Referenced vehicle does not exist
//! ├── Repository(RepositoryError)  - Record store failure
//! └── Configuration(String)        - Service could not be wired
//! ```
//!
//! # Examples
//!
//! ```
//! use vehicle_aggregation::application::error::ApplicationError;
//! use vehicle_aggregation::domain::value_objects::VehicleId;
//!
//! let err = ApplicationError::vehicle_not_found(VehicleId::new(5));
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "vehicle not found: 5");
//! ```

use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No vehicle with the given id exists.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// Record store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The service could not be built from its settings.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates a vehicle not found error.
    #[must_use]
    pub fn vehicle_not_found(id: VehicleId) -> Self {
        Self::VehicleNotFound(id)
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::VehicleNotFound(_) => true,
            Self::Repository(e) => e.is_not_found(),
            Self::Configuration(_) => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_not_found() {
        let err = ApplicationError::vehicle_not_found(VehicleId::new(9));
        assert!(err.is_not_found());
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn repository_error_converts() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(matches!(err, ApplicationError::Repository(_)));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("repository error"));
    }

    #[test]
    fn repository_not_found_counts_as_not_found() {
        let err: ApplicationError = RepositoryError::not_found("Vehicle", "3").into();
        assert!(err.is_not_found());
    }

    #[test]
    fn configuration_error() {
        let err = ApplicationError::configuration("bad url");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("bad url"));
    }
}

//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The aggregation service only talks to storage through
//! [`VehicleRepository`]. Implementations provide atomic single-record
//! operations; no transactions span multiple records.
//!
//! # Examples
//!
//! ```ignore
//! use vehicle_aggregation::infrastructure::persistence::traits::VehicleRepository;
//!
//! async fn count_vehicles(repo: &impl VehicleRepository) {
//!     let all = repo.find_all().await?;
//!     println!("Found {} vehicles", all.len());
//! }
//! ```

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for vehicle records.
///
/// Every read returns owned copies; mutating a returned value never
/// affects stored state.
#[async_trait]
pub trait VehicleRepository: Send + Sync + fmt::Debug {
    /// Gets all vehicles.
    ///
    /// Order is implementation defined.
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Gets a vehicle by ID.
    ///
    /// Returns `None` if the vehicle does not exist.
    async fn get(&self, id: &VehicleId) -> RepositoryResult<Option<Vehicle>>;

    /// Saves a vehicle and returns the stored record.
    ///
    /// A vehicle without an id is inserted under a freshly assigned,
    /// never reused id. A vehicle with an id replaces the stored record.
    /// Timestamps are maintained by the repository.
    ///
    /// Returns `RepositoryError::NotFound` if the vehicle carries an id that
    /// is not stored.
    async fn save(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle>;

    /// Deletes a vehicle by ID.
    ///
    /// Returns `Ok(true)` if the vehicle was deleted, `Ok(false)` if it didn't exist.
    async fn delete(&self, id: &VehicleId) -> RepositoryResult<bool>;

    /// Counts all vehicles.
    async fn count(&self) -> RepositoryResult<u64>;
}

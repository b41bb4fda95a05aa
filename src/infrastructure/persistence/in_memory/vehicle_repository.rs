//! # In-Memory Vehicle Repository
//!
//! In-memory implementation of [`VehicleRepository`].
//!
//! Records are kept in a `BTreeMap` so `find_all` returns them in
//! ascending id order. Ids come from a monotonically increasing counter
//! and are never reused, even after deletes.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, VehicleRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Storage {
    records: BTreeMap<VehicleId, Vehicle>,
    last_id: u64,
}

/// In-memory implementation of [`VehicleRepository`].
///
/// Uses a thread-safe map for storage. Suitable for tests, demos and
/// the seeded CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryVehicleRepository {
    /// Creates a new empty in-memory vehicle repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository populated from a JSON array of vehicles.
    ///
    /// Ids present in the file are ignored; every record is inserted as
    /// new, in file order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the file cannot be read and
    /// `RepositoryError::Serialization` if it is not a valid vehicle list.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            RepositoryError::connection(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let seeds: Vec<Vehicle> = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::serialization(format!("Invalid seed file {}: {}", path.display(), e))
        })?;

        let repo = Self::new();
        for seed in seeds {
            let fresh = Vehicle::new(seed.condition(), seed.details().clone(), seed.location().clone());
            let fresh = match seed.price() {
                Some(price) => fresh.with_price(price),
                None => fresh,
            };
            repo.save(&fresh).await?;
        }
        tracing::debug!(path = %path.display(), count = repo.count().await?, "seeded vehicle repository");
        Ok(repo)
    }

    /// Clears all vehicles from the repository.
    ///
    /// The id counter is not reset.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.records.clear();
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.records.values().cloned().collect())
    }

    async fn get(&self, id: &VehicleId) -> RepositoryResult<Option<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.records.get(id).cloned())
    }

    async fn save(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle> {
        let mut storage = self.storage.write().await;

        let fresh_id = match vehicle.id() {
            Some(id) if storage.records.contains_key(&id) => id,
            Some(id) => return Err(RepositoryError::not_found("Vehicle", id.to_string())),
            None => {
                storage.last_id += 1;
                VehicleId::new(storage.last_id)
            }
        };

        let stored = vehicle.clone().mark_persisted(fresh_id, Utc::now());
        storage.records.insert(fresh_id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &VehicleId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.records.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.records.len() as u64)
    }
}

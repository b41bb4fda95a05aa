//! # Vehicle Service
//!
//! Orchestrates vehicle CRUD and read-time enrichment.
//!
//! This module provides the [`VehicleService`] which loads records from a
//! [`VehicleRepository`] and fans out to the pricing and location
//! providers for every vehicle it returns.
//!
//! Reads never write back: enriched values are built from the owned copies
//! the repository hands out. Writes go through [`VehicleService::save`] only.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::enrichment::{EnrichmentConfig, VehicleEnricher};
use crate::config::Settings;
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::traits::VehicleRepository;
use crate::infrastructure::providers::traits::{LocationProvider, PriceProvider};
use crate::infrastructure::providers::{HttpMapsClient, HttpPriceClient};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Service for reading, creating, updating and deleting vehicles.
#[derive(Debug, Clone)]
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
    enricher: VehicleEnricher,
}

impl VehicleService {
    /// Creates a new VehicleService.
    #[must_use]
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        price_provider: Arc<dyn PriceProvider>,
        location_provider: Arc<dyn LocationProvider>,
        config: EnrichmentConfig,
    ) -> Self {
        Self {
            repository,
            enricher: VehicleEnricher::new(price_provider, location_provider, config),
        }
    }

    /// Creates a new service with default enrichment configuration.
    #[must_use]
    pub fn with_defaults(
        repository: Arc<dyn VehicleRepository>,
        price_provider: Arc<dyn PriceProvider>,
        location_provider: Arc<dyn LocationProvider>,
    ) -> Self {
        Self::new(
            repository,
            price_provider,
            location_provider,
            EnrichmentConfig::default(),
        )
    }

    /// Creates a service using the HTTP providers described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a provider client cannot
    /// be built.
    pub fn from_settings(
        settings: &Settings,
        repository: Arc<dyn VehicleRepository>,
    ) -> ApplicationResult<Self> {
        let pricing = HttpPriceClient::new(&settings.pricing.base_url, settings.pricing.timeout_ms)
            .map_err(|e| ApplicationError::configuration(format!("pricing client: {}", e)))?;
        let maps = HttpMapsClient::new(&settings.maps.base_url, settings.maps.timeout_ms)
            .map_err(|e| ApplicationError::configuration(format!("maps client: {}", e)))?;

        Ok(Self::new(
            repository,
            Arc::new(pricing),
            Arc::new(maps),
            settings.enrichment.clone(),
        ))
    }

    /// Returns every stored vehicle, enriched, in store order.
    ///
    /// Provider failures degrade individual vehicles and never fail the call.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> ApplicationResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        tracing::debug!(count = vehicles.len(), "enriching vehicles");

        let enriched = stream::iter(vehicles.iter().map(|v| self.enricher.enrich(v)))
            .buffered(self.enricher.config().concurrency())
            .collect::<Vec<_>>()
            .await;

        Ok(enriched)
    }

    /// Returns a single enriched vehicle.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::VehicleNotFound` if no vehicle has this id,
    /// or `ApplicationError::Repository` if the store cannot be read.
    #[tracing::instrument(skip(self), fields(vehicle_id = %id))]
    pub async fn find_by_id(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        let vehicle = self.load(id).await?;
        Ok(self.enricher.enrich(&vehicle).await)
    }

    /// Creates or updates a vehicle and returns the stored record.
    ///
    /// Without an id the vehicle is inserted as given. With an id, only
    /// condition, details, location and price are copied onto the stored
    /// record; everything else is kept.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::VehicleNotFound` when updating an id that
    /// does not exist, or `ApplicationError::Repository` on store failure.
    #[tracing::instrument(skip(self, vehicle), fields(vehicle_id = ?vehicle.id()))]
    pub async fn save(&self, vehicle: &Vehicle) -> ApplicationResult<Vehicle> {
        let Some(id) = vehicle.id() else {
            let created = self.repository.save(vehicle).await?;
            tracing::info!(vehicle_id = ?created.id(), "vehicle created");
            return Ok(created);
        };

        let existing = self.load(id).await?;
        let updated = self
            .repository
            .save(&existing.merge_update(vehicle))
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ApplicationError::vehicle_not_found(id)
                } else {
                    e.into()
                }
            })?;
        tracing::info!(vehicle_id = %id, "vehicle updated");
        Ok(updated)
    }

    /// Deletes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::VehicleNotFound` if no vehicle has this id,
    /// or `ApplicationError::Repository` on store failure.
    #[tracing::instrument(skip(self), fields(vehicle_id = %id))]
    pub async fn delete(&self, id: VehicleId) -> ApplicationResult<()> {
        self.load(id).await?;
        if !self.repository.delete(&id).await? {
            return Err(ApplicationError::vehicle_not_found(id));
        }
        tracing::info!(vehicle_id = %id, "vehicle deleted");
        Ok(())
    }

    async fn load(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        self.repository
            .get(&id)
            .await?
            .ok_or_else(|| ApplicationError::vehicle_not_found(id))
    }
}

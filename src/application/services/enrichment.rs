//! # Vehicle Enrichment
//!
//! Builds the read-time view of a stored vehicle by consulting the
//! pricing and location providers.
//!
//! Both lookups run concurrently and each is bounded by
//! [`EnrichmentConfig::provider_timeout_ms`]. A failed lookup only
//! affects its own attribute:
//!
//! - price failures yield [`PRICE_FALLBACK`];
//! - location failures keep the raw coordinates.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::{Location, PRICE_FALLBACK, VehicleId};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::traits::{LocationProvider, PriceProvider};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Configuration for read-time enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Upper bound for a single provider call in milliseconds.
    pub provider_timeout_ms: u64,
    /// Maximum number of vehicles enriched at once by `list`.
    pub max_concurrency: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: 7000,
            max_concurrency: 8,
        }
    }
}

impl EnrichmentConfig {
    /// Creates a new configuration with the specified provider timeout.
    #[must_use]
    pub fn with_timeout(provider_timeout_ms: u64) -> Self {
        Self {
            provider_timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the maximum number of vehicles enriched concurrently.
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Returns the effective concurrency, never less than one.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

/// Produces enriched copies of stored vehicles.
#[derive(Debug, Clone)]
pub struct VehicleEnricher {
    price_provider: Arc<dyn PriceProvider>,
    location_provider: Arc<dyn LocationProvider>,
    config: EnrichmentConfig,
}

impl VehicleEnricher {
    /// Creates a new enricher.
    #[must_use]
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        location_provider: Arc<dyn LocationProvider>,
        config: EnrichmentConfig,
    ) -> Self {
        Self {
            price_provider,
            location_provider,
            config,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }

    /// Returns an enriched copy of `vehicle`. Never fails.
    pub async fn enrich(&self, vehicle: &Vehicle) -> Vehicle {
        let (price, location) = tokio::join!(
            self.price_for(vehicle.id()),
            self.location_for(vehicle.location())
        );
        vehicle.enriched(price, location)
    }

    /// Returns the display price for a vehicle, or the fallback.
    pub async fn price_for(&self, vehicle_id: Option<VehicleId>) -> String {
        let Some(vehicle_id) = vehicle_id else {
            tracing::warn!("cannot price a vehicle without id");
            return PRICE_FALLBACK.to_string();
        };

        match self.bounded(self.price_provider.get_price(&vehicle_id)).await {
            Ok(quote) => quote.to_string(),
            Err(e) => {
                tracing::error!(
                    vehicle_id = %vehicle_id,
                    kind = e.kind(),
                    error = %e,
                    "unexpected error retrieving price"
                );
                PRICE_FALLBACK.to_string()
            }
        }
    }

    /// Returns the location with its address resolved, or unchanged.
    pub async fn location_for(&self, location: &Location) -> Location {
        match self.bounded(self.location_provider.get_address(location)).await {
            Ok(address) => location.with_address(address),
            Err(e) => {
                tracing::warn!(
                    lat = location.lat(),
                    lon = location.lon(),
                    kind = e.kind(),
                    error = %e,
                    "address lookup failed, keeping raw coordinates"
                );
                location.clone()
            }
        }
    }

    async fn bounded<T>(&self, call: impl Future<Output = ProviderResult<T>>) -> ProviderResult<T> {
        let limit = Duration::from_millis(self.config.provider_timeout_ms);
        match timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::timeout_with_duration(
                "provider call exceeded deadline",
                self.config.provider_timeout_ms,
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Details;
    use crate::domain::value_objects::{Address, Condition, PriceQuote};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[derive(Debug)]
    struct StubPrice {
        result: Result<PriceQuote, ProviderError>,
        delay_ms: u64,
    }

    #[async_trait]
    impl PriceProvider for StubPrice {
        async fn get_price(&self, _vehicle_id: &VehicleId) -> ProviderResult<PriceQuote> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.result.clone()
        }
    }

    #[derive(Debug)]
    struct StubMaps {
        result: Result<Address, ProviderError>,
    }

    #[async_trait]
    impl LocationProvider for StubMaps {
        async fn get_address(&self, _location: &Location) -> ProviderResult<Address> {
            self.result.clone()
        }
    }

    fn stored_vehicle() -> Vehicle {
        Vehicle::new(Condition::Used, Details::default(), Location::new(40.0, -73.0))
            .mark_persisted(VehicleId::new(1), Utc::now())
    }

    fn enricher(price: StubPrice, maps: StubMaps, config: EnrichmentConfig) -> VehicleEnricher {
        VehicleEnricher::new(Arc::new(price), Arc::new(maps), config)
    }

    fn ok_price() -> StubPrice {
        StubPrice {
            result: Ok(PriceQuote::new("USD", Decimal::from(12000))),
            delay_ms: 0,
        }
    }

    fn ok_maps() -> StubMaps {
        StubMaps {
            result: Ok(Address::new("1 Main St", "Springfield", "IL", "62701")),
        }
    }

    #[tokio::test]
    async fn enrich_sets_price_and_address() {
        let enricher = enricher(ok_price(), ok_maps(), EnrichmentConfig::default());
        let view = enricher.enrich(&stored_vehicle()).await;

        assert_eq!(view.price(), Some("USD 12000"));
        assert_eq!(view.location().city(), Some("Springfield"));
        assert_eq!(view.location().lat(), 40.0);
    }

    #[tokio::test]
    async fn price_failure_uses_fallback_and_keeps_address() {
        let price = StubPrice {
            result: Err(ProviderError::connection("refused")),
            delay_ms: 0,
        };
        let enricher = enricher(price, ok_maps(), EnrichmentConfig::default());
        let view = enricher.enrich(&stored_vehicle()).await;

        assert_eq!(view.price(), Some(PRICE_FALLBACK));
        assert!(view.location().is_resolved());
    }

    #[tokio::test]
    async fn location_failure_keeps_raw_location_and_price() {
        let maps = StubMaps {
            result: Err(ProviderError::protocol("bad body")),
        };
        let enricher = enricher(ok_price(), maps, EnrichmentConfig::default());
        let stored = stored_vehicle();
        let view = enricher.enrich(&stored).await;

        assert_eq!(view.price(), Some("USD 12000"));
        assert_eq!(view.location(), stored.location());
    }

    #[tokio::test]
    async fn slow_price_provider_times_out() {
        let price = StubPrice {
            result: Ok(PriceQuote::new("USD", Decimal::from(1))),
            delay_ms: 500,
        };
        let enricher = enricher(price, ok_maps(), EnrichmentConfig::with_timeout(20));

        let price = enricher.price_for(Some(VehicleId::new(1))).await;
        assert_eq!(price, PRICE_FALLBACK);
    }

    #[tokio::test]
    async fn missing_id_uses_fallback() {
        let enricher = enricher(ok_price(), ok_maps(), EnrichmentConfig::default());
        assert_eq!(enricher.price_for(None).await, PRICE_FALLBACK);
    }

    #[test]
    fn config_default() {
        let config = EnrichmentConfig::default();
        assert_eq!(config.provider_timeout_ms, 7000);
        assert_eq!(config.max_concurrency, 8);
    }

    #[test]
    fn config_builder() {
        let config = EnrichmentConfig::with_timeout(250).with_max_concurrency(0);
        assert_eq!(config.provider_timeout_ms, 250);
        assert_eq!(config.concurrency(), 1);
    }
}

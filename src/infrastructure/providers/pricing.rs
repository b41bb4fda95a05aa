//! # Pricing Client
//!
//! [`PriceProvider`] backed by the pricing service's REST API.
//!
//! `GET {base_url}/prices/{vehicleId}` returns
//! `{"currency": "USD", "price": 12000.00}`.

use crate::domain::value_objects::{PriceQuote, VehicleId};
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{HttpClient, join_url};
use crate::infrastructure::providers::traits::PriceProvider;
use async_trait::async_trait;

/// HTTP client for the pricing service.
#[derive(Debug, Clone)]
pub struct HttpPriceClient {
    http: HttpClient,
    base_url: String,
}

impl HttpPriceClient {
    /// Creates a pricing client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ProviderResult<Self> {
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.into(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PriceProvider for HttpPriceClient {
    async fn get_price(&self, vehicle_id: &VehicleId) -> ProviderResult<PriceQuote> {
        let url = join_url(&self.base_url, &format!("prices/{}", vehicle_id));
        tracing::trace!(%url, "requesting vehicle price");
        self.http.get(&url).await
    }
}

//! # Maps Client
//!
//! [`LocationProvider`] backed by the maps service's REST API.
//!
//! `GET {base_url}/maps?lat={lat}&lon={lon}` returns
//! `{"address": ..., "city": ..., "state": ..., "zip": ...}`.

use crate::domain::value_objects::{Address, Location};
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{HttpClient, join_url};
use crate::infrastructure::providers::traits::LocationProvider;
use async_trait::async_trait;

/// HTTP client for the maps service.
#[derive(Debug, Clone)]
pub struct HttpMapsClient {
    http: HttpClient,
    base_url: String,
}

impl HttpMapsClient {
    /// Creates a maps client for the service at `base_url`.
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
impl LocationProvider for HttpMapsClient {
    async fn get_address(&self, location: &Location) -> ProviderResult<Address> {
        let url = join_url(&self.base_url, "maps");
        let params = [("lat", location.lat()), ("lon", location.lon())];
        tracing::trace!(%url, lat = location.lat(), lon = location.lon(), "resolving address");
        self.http.get_with_params(&url, &params).await
    }
}

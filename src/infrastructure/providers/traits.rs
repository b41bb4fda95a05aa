//! # Provider Traits
//!
//! Port definitions for the remote data providers consulted on read.
//!
//! # Examples
//!
//! ```ignore
//! use vehicle_aggregation::infrastructure::providers::traits::PriceProvider;
//!
//! struct FixedPrice;
//!
//! #[async_trait::async_trait]
//! impl PriceProvider for FixedPrice {
//!     // ... implement get_price
//! }
//! ```

use crate::domain::value_objects::{Address, Location, PriceQuote, VehicleId};
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Looks up the current price of a vehicle.
#[async_trait]
pub trait PriceProvider: Send + Sync + fmt::Debug {
    /// Returns the price quote for the given vehicle.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](crate::infrastructure::providers::error::ProviderError)
    /// on transport failures, malformed responses or unknown vehicles.
    async fn get_price(&self, vehicle_id: &VehicleId) -> ProviderResult<PriceQuote>;
}

/// Resolves coordinates to a street address.
#[async_trait]
pub trait LocationProvider: Send + Sync + fmt::Debug {
    /// Returns the address for the given location's coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](crate::infrastructure::providers::error::ProviderError)
    /// on transport failures or malformed responses.
    async fn get_address(&self, location: &Location) -> ProviderResult<Address>;
}

//! # Remote Providers
//!
//! Ports and HTTP adapters for the services consulted when reading vehicles.
//!
//! ## Ports
//!
//! - [`PriceProvider`]: Vehicle id to price quote
//! - [`LocationProvider`]: Coordinates to street address
//!
//! ## Adapters
//!
//! - [`HttpPriceClient`]: Pricing service client
//! - [`HttpMapsClient`]: Maps service client

pub mod error;
pub mod http_client;
pub mod maps;
pub mod pricing;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use maps::HttpMapsClient;
pub use pricing::HttpPriceClient;
pub use traits::{LocationProvider, PriceProvider};

//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`VehicleId`]: Numeric vehicle identifier assigned by the record store
//!
//! ## Descriptive Types
//!
//! - [`Condition`]: New or used
//! - [`Location`], [`Address`]: Coordinates and the address resolved for them
//! - [`PriceQuote`]: Currency and amount from the pricing provider

pub mod condition;
pub mod ids;
pub mod location;
pub mod price;

pub use condition::Condition;
pub use ids::VehicleId;
pub use location::{Address, Location};
pub use price::{PRICE_FALLBACK, PriceQuote};

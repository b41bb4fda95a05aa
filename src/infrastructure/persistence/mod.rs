//! # Persistence Layer
//!
//! Repository port and implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`VehicleRepository`]: Persistence for vehicle records
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementation, optionally seeded from JSON

pub mod in_memory;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, VehicleRepository};

//! # Vehicle Aggregation
//!
//! Vehicle information service that enriches stored vehicle records with
//! data from two remote providers:
//!
//! - a **pricing** service, giving a `"<currency> <amount>"` display price;
//! - a **maps** service, resolving coordinates to a street address.
//!
//! Enrichment is best effort. A provider failure degrades the affected
//! attribute (price becomes `"(consult prices)"`, location keeps its raw
//! coordinates) and never fails the read. Missing vehicles and record store
//! failures are reported to the caller.
//!
//! ## Layers
//!
//! - [`domain`]: [`Vehicle`](domain::entities::Vehicle) and its value types
//! - [`application`]: [`VehicleService`](application::services::VehicleService)
//!   and enrichment
//! - [`infrastructure`]: record store and provider ports with in-memory and
//!   HTTP adapters
//! - [`config`], [`telemetry`]: runtime settings and logging
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vehicle_aggregation::application::services::VehicleService;
//! use vehicle_aggregation::config::Settings;
//! use vehicle_aggregation::infrastructure::persistence::in_memory::InMemoryVehicleRepository;
//!
//! let settings = Settings::load(None)?;
//! let service = VehicleService::from_settings(&settings, Arc::new(InMemoryVehicleRepository::new()))?;
//! for vehicle in service.list().await? {
//!     println!("{:?} {:?}", vehicle.id(), vehicle.price());
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::error::{ApplicationError, ApplicationResult};
pub use application::services::VehicleService;
pub use domain::entities::Vehicle;
pub use domain::value_objects::VehicleId;

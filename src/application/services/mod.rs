//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`VehicleService`]: Vehicle CRUD with read-time enrichment
//! - [`VehicleEnricher`]: Concurrent price and address lookup for one vehicle

pub mod enrichment;
pub mod vehicle_service;

pub use enrichment::{EnrichmentConfig, VehicleEnricher};
pub use vehicle_service::VehicleService;

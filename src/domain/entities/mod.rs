//! # Domain Entities
//!
//! - [`Vehicle`]: Stored vehicle record and its read-time enriched view

pub mod vehicle;

pub use vehicle::{Details, Manufacturer, Vehicle};

//! # Infrastructure Layer
//!
//! Adapters for the record store and the remote providers.

pub mod persistence;
pub mod providers;

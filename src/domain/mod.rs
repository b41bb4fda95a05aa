//! # Domain Layer
//!
//! Vehicle records and the value types they are built from.

pub mod entities;
pub mod value_objects;

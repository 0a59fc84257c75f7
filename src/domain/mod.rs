//! # Domain Layer
//!
//! Entities and value objects, independent of any storage format.

pub mod entities;
pub mod value_objects;

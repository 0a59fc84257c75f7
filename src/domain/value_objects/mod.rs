//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Identity Types
//!
//! - [`PersonaId`]: store-assigned numeric identifier

pub mod ids;

pub use ids::PersonaId;

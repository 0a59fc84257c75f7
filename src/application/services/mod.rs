//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`PersonaService`]: validated persona use cases

pub mod persona_service;

pub use persona_service::PersonaService;

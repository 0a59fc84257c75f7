//! # Domain Entities
//!
//! - [`Persona`]: a person record with store-assigned identity

pub mod persona;

pub use persona::Persona;

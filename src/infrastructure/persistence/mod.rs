//! # Persistence Layer
//!
//! Storage ports, the persona adapter, and store implementations.
//!
//! ## Ports
//!
//! - [`StoragePort`]: generic save / find / delete / exists contract
//! - [`PersonaRepository`]: domain-facing persona repository
//!
//! ## Implementations
//!
//! - [`PersonaRepositoryAdapter`]: converts between [`Persona`](crate::domain::entities::Persona)
//!   and [`PersonaEntity`] over any [`StoragePort`]
//! - `in_memory`: in-memory store for tests and local runs
//! - `postgres`: PostgreSQL store using sqlx

pub mod adapter;
pub mod entity;
pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use adapter::PersonaRepositoryAdapter;
pub use entity::PersonaEntity;
pub use traits::{PersonaRepository, RepositoryError, RepositoryResult, StoragePort};

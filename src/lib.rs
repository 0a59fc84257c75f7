//! # Persona Registry
//!
//! Repository adapter for `Persona` records over a generic storage port.
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`]: the [`Persona`](domain::entities::Persona) entity and its
//!   identifier, free of any storage concern.
//! - [`infrastructure`]: storage ports, the persona adapter, in-memory and
//!   PostgreSQL stores, configuration and logging.
//! - [`application`]: the [`PersonaService`](application::services::PersonaService)
//!   use-case layer and its error type.
//!
//! # Examples
//!
//! ```
//! use persona_registry::domain::entities::Persona;
//! use persona_registry::infrastructure::persistence::in_memory::InMemoryPersonaStore;
//! use persona_registry::infrastructure::persistence::{PersonaRepository, PersonaRepositoryAdapter};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let adapter = PersonaRepositoryAdapter::new(InMemoryPersonaStore::new());
//! let created = adapter
//!     .create_persona(Persona::new(None, "Dominic", "Toretto", None, "M"))
//!     .await
//!     .unwrap();
//!
//! assert!(created.id().is_some());
//! # });
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

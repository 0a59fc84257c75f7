//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! Two ports live here:
//!
//! - [`StoragePort`]: the low-level store contract, generic over the stored
//!   entity and its identifier. Backends (in-memory, PostgreSQL) implement it.
//! - [`PersonaRepository`]: the domain-facing port speaking [`Persona`].
//!   [`PersonaRepositoryAdapter`](super::PersonaRepositoryAdapter) implements
//!   it on top of any [`StoragePort`].
//!
//! # Examples
//!
//! ```
//! use persona_registry::domain::entities::Persona;
//! use persona_registry::domain::value_objects::PersonaId;
//! use persona_registry::infrastructure::persistence::in_memory::InMemoryPersonaStore;
//! use persona_registry::infrastructure::persistence::traits::{
//!     PersonaRepository, RepositoryResult,
//! };
//! use persona_registry::infrastructure::persistence::PersonaRepositoryAdapter;
//!
//! async fn rename(
//!     repo: &impl PersonaRepository,
//!     id: PersonaId,
//!     persona: Persona,
//! ) -> RepositoryResult<Option<String>> {
//!     let updated = repo.update_persona(id, persona).await?;
//!     Ok(updated.map(|p| p.full_name()))
//! }
//!
//! tokio::runtime::Runtime::new().unwrap().block_on(async {
//!     let repo = PersonaRepositoryAdapter::new(InMemoryPersonaStore::new());
//!     let saved = repo
//!         .create_persona(Persona::new(None, "Dominic", "Toretto", None, "M"))
//!         .await
//!         .unwrap();
//!     let id = saved.id().unwrap();
//!
//!     let renamed = Persona::new(None, "Dom", "Toretto", None, "M");
//!     assert_eq!(rename(&repo, id, renamed.clone()).await.unwrap().as_deref(), Some("Dom Toretto"));
//!     assert_eq!(rename(&repo, PersonaId::new(404), renamed).await.unwrap(), None);
//! });
//! ```


use crate::domain::entities::Persona;
use crate::domain::value_objects::PersonaId;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for repository operations.
///
/// Absence is never an error here; lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Returns true if the backend could not be reached.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Minimal store contract the persona adapter depends on.
///
/// Generic over the stored entity `E` and its identifier `Id`, so the
/// conversion logic never sees a concrete backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePort<E, Id>: Send + Sync
where
    E: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Saves an entity.
    ///
    /// Inserts when the entity carries no identifier, replaces otherwise.
    /// Returns the entity as stored, identifier included.
    async fn save(&self, entity: E) -> RepositoryResult<E>;

    /// Finds an entity by ID.
    ///
    /// Returns `None` if nothing is stored under `id`.
    async fn find_by_id(&self, id: &Id) -> RepositoryResult<Option<E>>;

    /// Deletes the entity stored under `id`.
    ///
    /// Deleting a missing identifier is not an error.
    async fn delete_by_id(&self, id: &Id) -> RepositoryResult<()>;

    /// Returns true if an entity is stored under `id`.
    async fn exists_by_id(&self, id: &Id) -> RepositoryResult<bool>;
}

/// Repository for [`Persona`] records.
///
/// Absence is reported through `Option` and `false`, never as an error;
/// errors are reserved for backend failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonaRepository: Send + Sync {
    /// Persists a new persona and returns it as stored.
    async fn create_persona(&self, persona: Persona) -> RepositoryResult<Persona>;

    /// Gets a persona by ID.
    ///
    /// Returns `None` if the persona does not exist.
    async fn get_persona(&self, id: PersonaId) -> RepositoryResult<Option<Persona>>;

    /// Overwrites the persona stored under `id` with the fields of `persona`.
    ///
    /// The stored identifier is kept. Returns `None`, without writing
    /// anything, if no persona exists under `id`.
    async fn update_persona(
        &self,
        id: PersonaId,
        persona: Persona,
    ) -> RepositoryResult<Option<Persona>>;

    /// Deletes a persona by ID.
    ///
    /// Returns `Ok(true)` if the persona was deleted, `Ok(false)` if the
    /// identifier is absent or nothing is stored under it.
    async fn delete_persona(&self, id: Option<PersonaId>) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod repository_error {
        use super::*;

        #[test]
        fn duplicate_error() {
            let err = RepositoryError::duplicate("Persona", "3");
            assert!(err.is_duplicate());
            assert!(!err.is_connection());
            assert!(err.to_string().contains("Duplicate"));
            assert!(err.to_string().contains("Persona"));
        }

        #[test]
        fn connection_error() {
            let err = RepositoryError::connection("Connection refused");
            assert!(err.is_connection());
            assert!(err.to_string().contains("refused"));
        }

        #[test]
        fn query_error() {
            let err = RepositoryError::query("relation \"personas\" does not exist");
            assert!(!err.is_connection());
            assert!(err.to_string().starts_with("Query error"));
        }

        #[test]
        fn internal_error() {
            let err = RepositoryError::internal("poisoned");
            assert!(err.to_string().contains("Internal"));
        }
    }
}

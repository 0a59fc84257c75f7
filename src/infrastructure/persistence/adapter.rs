//! # Persona Repository Adapter
//!
//! Implements [`PersonaRepository`] over any [`StoragePort`] that stores
//! [`PersonaEntity`] rows keyed by [`PersonaId`].
//!
//! Every operation converts the domain persona into its storage entity,
//! calls the port, and converts the result back.
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
//!     .create_persona(Persona::new(None, "Brian", "O'Conner", None, "M"))
//!     .await
//!     .unwrap();
//!
//! assert!(adapter.delete_persona(created.id()).await.unwrap());
//! assert!(!adapter.delete_persona(created.id()).await.unwrap());
//! # });
//! ```

use crate::domain::entities::Persona;
use crate::domain::value_objects::PersonaId;
use crate::infrastructure::persistence::entity::PersonaEntity;
use crate::infrastructure::persistence::traits::{
    PersonaRepository, RepositoryResult, StoragePort,
};
use async_trait::async_trait;

/// Persona repository backed by a generic storage port.
#[derive(Debug, Clone)]
pub struct PersonaRepositoryAdapter<S> {
    store: S,
}

impl<S> PersonaRepositoryAdapter<S>
where
    S: StoragePort<PersonaEntity, PersonaId>,
{
    /// Creates an adapter over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S> PersonaRepository for PersonaRepositoryAdapter<S>
where
    S: StoragePort<PersonaEntity, PersonaId>,
{
    async fn create_persona(&self, persona: Persona) -> RepositoryResult<Persona> {
        let saved = self.store.save(PersonaEntity::from_domain(&persona)).await?;
        tracing::debug!(id = ?saved.id, "persona created");
        Ok(saved.to_domain_model())
    }

    async fn get_persona(&self, id: PersonaId) -> RepositoryResult<Option<Persona>> {
        let found = self.store.find_by_id(&id).await?;
        tracing::debug!(%id, found = found.is_some(), "persona lookup");
        Ok(found.map(|entity| entity.to_domain_model()))
    }

    async fn update_persona(
        &self,
        id: PersonaId,
        persona: Persona,
    ) -> RepositoryResult<Option<Persona>> {
        let Some(mut stored) = self.store.find_by_id(&id).await? else {
            tracing::debug!(%id, "persona update skipped, not found");
            return Ok(None);
        };

        stored.overwrite_from(&persona);
        let saved = self.store.save(stored).await?;
        tracing::debug!(%id, "persona updated");
        Ok(Some(saved.to_domain_model()))
    }

    async fn delete_persona(&self, id: Option<PersonaId>) -> RepositoryResult<bool> {
        let Some(id) = id else {
            return Ok(false);
        };

        if !self.store.exists_by_id(&id).await? {
            tracing::debug!(%id, "persona delete skipped, not found");
            return Ok(false);
        }

        self.store.delete_by_id(&id).await?;
        tracing::debug!(%id, "persona deleted");
        Ok(true)
    }
}

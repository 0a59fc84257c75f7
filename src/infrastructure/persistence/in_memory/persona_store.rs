//! # In-Memory Persona Store
//!
//! In-memory implementation of [`StoragePort`] for [`PersonaEntity`].
//!
//! This implementation keeps rows in a `HashMap` and assigns identifiers
//! from a sequence guarded by the same lock, making it suitable for unit
//! tests and local runs without a database. Generated saves fail with
//! `RepositoryError::Internal` once the sequence passes `i64::MAX`.

use crate::domain::value_objects::PersonaId;
use crate::infrastructure::persistence::entity::PersonaEntity;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, StoragePort,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Rows plus the identifier sequence, guarded together.
#[derive(Debug)]
struct Tables {
    rows: HashMap<PersonaId, PersonaEntity>,
    /// Next identifier to hand out; `None` once `i64::MAX` has been used.
    next_id: Option<i64>,
}

impl Tables {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: Some(1),
        }
    }

    fn next_generated(&mut self) -> RepositoryResult<i64> {
        let id = self
            .next_id
            .ok_or_else(|| RepositoryError::internal("persona id sequence exhausted"))?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Moves the sequence past an explicitly chosen identifier.
    fn advance_past(&mut self, id: i64) {
        if let Some(next) = self.next_id
            && id >= next
        {
            self.next_id = id.checked_add(1);
        }
    }
}

/// In-memory implementation of [`StoragePort`] for personas.
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryPersonaStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPersonaStore {
    /// Creates a new empty in-memory persona store.
    ///
    /// Identifiers are assigned from 1 upwards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new())),
        }
    }

    /// Returns the number of stored personas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables
            .try_read()
            .map(|guard| guard.rows.len())
            .unwrap_or(0)
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all personas from the store.
    ///
    /// The identifier sequence is not reset.
    pub async fn clear(&self) {
        let mut tables = self.tables.write().await;
        tables.rows.clear();
    }
}

impl Default for InMemoryPersonaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoragePort<PersonaEntity, PersonaId> for InMemoryPersonaStore {
    async fn save(&self, mut entity: PersonaEntity) -> RepositoryResult<PersonaEntity> {
        let mut tables = self.tables.write().await;
        let id = match entity.id {
            Some(id) => {
                tables.advance_past(id);
                id
            }
            None => tables.next_generated()?,
        };
        entity.id = Some(id);

        tables.rows.insert(PersonaId::new(id), entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &PersonaId) -> RepositoryResult<Option<PersonaEntity>> {
        let tables = self.tables.read().await;
        Ok(tables.rows.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &PersonaId) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        tables.rows.remove(id);
        Ok(())
    }

    async fn exists_by_id(&self, id: &PersonaId) -> RepositoryResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.rows.contains_key(id))
    }
}

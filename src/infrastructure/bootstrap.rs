//! # Bootstrap
//!
//! Wires a [`PersonaRepository`] from [`StorageSettings`].

use crate::application::error::InfrastructureError;
use crate::infrastructure::config::{StorageBackend, StorageSettings};
use crate::infrastructure::persistence::in_memory::InMemoryPersonaStore;
use crate::infrastructure::persistence::postgres::PostgresPersonaStore;
use crate::infrastructure::persistence::{PersonaRepository, PersonaRepositoryAdapter};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Builds the persona repository selected by `settings`.
///
/// The PostgreSQL backend connects eagerly and creates the `personas` table
/// if needed.
///
/// # Errors
///
/// - `InfrastructureError::Configuration` if the postgres backend has no
///   database URL
/// - `InfrastructureError::Database` if the pool cannot connect
/// - `InfrastructureError::Repository` if the schema cannot be created
pub async fn build_persona_repository(
    settings: &StorageSettings,
) -> Result<Arc<dyn PersonaRepository>, InfrastructureError> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::info!(backend = %settings.backend, "persona storage ready");
            Ok(Arc::new(PersonaRepositoryAdapter::new(
                InMemoryPersonaStore::new(),
            )))
        }
        StorageBackend::Postgres => {
            let url = settings.database_url.as_deref().ok_or_else(|| {
                InfrastructureError::configuration("postgres backend requires a database_url")
            })?;

            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(url)
                .await
                .map_err(|e| InfrastructureError::database(e.to_string()))?;

            let store = PostgresPersonaStore::new(pool);
            store.ensure_schema().await?;

            tracing::info!(
                backend = %settings.backend,
                max_connections = settings.max_connections,
                "persona storage ready"
            );
            Ok(Arc::new(PersonaRepositoryAdapter::new(store)))
        }
    }
}

//! # PostgreSQL Persona Store
//!
//! PostgreSQL implementation of [`StoragePort`] for [`PersonaEntity`] using sqlx.
//!
//! Rows live in the `personas` table; identifiers come from its `BIGSERIAL`
//! primary key.

use crate::domain::value_objects::PersonaId;
use crate::infrastructure::persistence::entity::PersonaEntity;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, StoragePort,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// DDL for the `personas` table.
pub const CREATE_PERSONAS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS personas (
        id          BIGSERIAL PRIMARY KEY,
        first_name  TEXT NOT NULL,
        last_name   TEXT NOT NULL,
        birth_date  DATE NULL,
        sex         TEXT NOT NULL
    )
"#;

const INSERT_PERSONA: &str = r#"
    INSERT INTO personas (first_name, last_name, birth_date, sex)
    VALUES ($1, $2, $3, $4)
    RETURNING id, first_name, last_name, birth_date, sex
"#;

const UPSERT_PERSONA: &str = r#"
    INSERT INTO personas (first_name, last_name, birth_date, sex, id)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (id) DO UPDATE SET
        first_name = EXCLUDED.first_name,
        last_name = EXCLUDED.last_name,
        birth_date = EXCLUDED.birth_date,
        sex = EXCLUDED.sex
    RETURNING id, first_name, last_name, birth_date, sex
"#;

/// Moves the `BIGSERIAL` sequence past an explicitly written id so later
/// generated inserts cannot collide with it. Never rewinds the sequence.
const ADVANCE_ID_SEQUENCE: &str = r#"
    SELECT setval(pg_get_serial_sequence('personas', 'id'), $1)
    WHERE $1 > COALESCE(
        pg_sequence_last_value(pg_get_serial_sequence('personas', 'id')::regclass),
        0
    )
"#;

/// PostgreSQL implementation of [`StoragePort`] for personas.
///
/// # Examples
///
/// ```no_run
/// # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
/// use sqlx::PgPool;
/// use persona_registry::infrastructure::persistence::postgres::PostgresPersonaStore;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let store = PostgresPersonaStore::new(pool);
/// store.ensure_schema().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PostgresPersonaStore {
    pool: PgPool,
}

impl PostgresPersonaStore {
    /// Creates a new PostgreSQL persona store.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the `personas` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Query` if the DDL statement fails.
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_PERSONAS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl StoragePort<PersonaEntity, PersonaId> for PostgresPersonaStore {
    async fn save(&self, entity: PersonaEntity) -> RepositoryResult<PersonaEntity> {
        let sql = match entity.id {
            None => INSERT_PERSONA,
            Some(_) => UPSERT_PERSONA,
        };

        let query = sqlx::query_as::<_, PersonaEntity>(sql)
            .bind(&entity.first_name)
            .bind(&entity.last_name)
            .bind(entity.birth_date)
            .bind(&entity.sex);

        let Some(id) = entity.id else {
            return query
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_write_error(e, None));
        };

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let saved = query
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, Some(id)))?;
        sqlx::query(ADVANCE_ID_SEQUENCE)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: &PersonaId) -> RepositoryResult<Option<PersonaEntity>> {
        sqlx::query_as::<_, PersonaEntity>(
            r#"
            SELECT id, first_name, last_name, birth_date, sex
            FROM personas
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: &PersonaId) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM personas WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn exists_by_id(&self, id: &PersonaId) -> RepositoryResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM personas WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }
}

/// Maps a failed insert or upsert; unique violations become `Duplicate`.
fn map_write_error(err: sqlx::Error, id: Option<i64>) -> RepositoryError {
    if let sqlx::Error::Database(db) = &err
        && db.is_unique_violation()
    {
        let id = id.map_or_else(|| "<generated>".to_string(), |id| id.to_string());
        return RepositoryError::duplicate("Persona", id);
    }
    map_sqlx_error(err)
}

/// Maps a sqlx error onto the repository error taxonomy.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(err.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::serialization(err.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message())
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"personas_pkey\""
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::NotNullViolation
            }
        }
    }

    #[test]
    fn unique_violation_on_write_maps_to_duplicate() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        let mapped = map_write_error(err, Some(1));
        assert!(mapped.is_duplicate());
        assert!(mapped.to_string().contains("Persona"));
        assert!(mapped.to_string().contains('1'));
    }

    #[test]
    fn unique_violation_on_generated_insert_maps_to_duplicate() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        assert!(map_write_error(err, None).is_duplicate());
    }

    #[test]
    fn other_database_errors_on_write_map_to_query() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(matches!(map_write_error(err, Some(1)), RepositoryError::Query(_)));
    }

    #[test]
    fn explicit_id_write_advances_sequence_without_rewinding() {
        assert!(ADVANCE_ID_SEQUENCE.contains("setval"));
        assert!(ADVANCE_ID_SEQUENCE.contains("$1 >"));
    }

    #[test]
    fn pool_timeout_maps_to_connection() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_connection());
    }

    #[test]
    fn missing_row_maps_to_query() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[test]
    fn schema_declares_every_entity_column() {
        for column in ["id", "first_name", "last_name", "birth_date", "sex"] {
            assert!(CREATE_PERSONAS_TABLE.contains(column), "missing {column}");
        }
    }
}

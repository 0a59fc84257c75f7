//! # Persona Service
//!
//! Use cases over a [`PersonaRepository`].
//!
//! The service validates input before it reaches storage and lifts
//! repository failures into [`ApplicationError`].

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Persona;
use crate::domain::value_objects::PersonaId;
use crate::infrastructure::persistence::PersonaRepository;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Resource name used in not-found errors.
const PERSONA_RESOURCE: &str = "Persona";

/// Registers, looks up, updates and removes personas.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use persona_registry::application::services::PersonaService;
/// use persona_registry::domain::entities::Persona;
/// use persona_registry::infrastructure::persistence::in_memory::InMemoryPersonaStore;
/// use persona_registry::infrastructure::persistence::PersonaRepositoryAdapter;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = PersonaService::new(Arc::new(PersonaRepositoryAdapter::new(
///     InMemoryPersonaStore::new(),
/// )));
///
/// let err = service
///     .register(Persona::new(None, "  ", "Toretto", None, "M"))
///     .await
///     .unwrap_err();
/// assert!(err.is_validation());
/// # });
/// ```
#[derive(Clone)]
pub struct PersonaService {
    repository: Arc<dyn PersonaRepository>,
}

impl PersonaService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new persona.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if a name is blank or the birth date
    ///   lies in the future
    /// - `ApplicationError::Repository` on storage failure
    pub async fn register(&self, persona: Persona) -> ApplicationResult<Persona> {
        validate(&persona, today())?;
        let created = self.repository.create_persona(persona).await?;
        tracing::info!(id = ?created.id(), "persona registered");
        Ok(created)
    }

    /// Looks up a persona; `None` if nothing is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on storage failure.
    pub async fn find(&self, id: PersonaId) -> ApplicationResult<Option<Persona>> {
        Ok(self.repository.get_persona(id).await?)
    }

    /// Looks up a persona that must exist.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if nothing is stored under `id`
    /// - `ApplicationError::Repository` on storage failure
    pub async fn require(&self, id: PersonaId) -> ApplicationResult<Persona> {
        self.find(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(PERSONA_RESOURCE, id.to_string()))
    }

    /// Validates `persona` and overwrites the record stored under `id`.
    ///
    /// Returns `None` if nothing is stored under `id`.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` on invalid input
    /// - `ApplicationError::Repository` on storage failure
    pub async fn update(
        &self,
        id: PersonaId,
        persona: Persona,
    ) -> ApplicationResult<Option<Persona>> {
        validate(&persona, today())?;
        let updated = self.repository.update_persona(id, persona).await?;
        if updated.is_none() {
            tracing::warn!(%id, "update for unknown persona");
        }
        Ok(updated)
    }

    /// Removes a persona; returns whether anything was deleted.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on storage failure.
    pub async fn remove(&self, id: PersonaId) -> ApplicationResult<bool> {
        let deleted = self.repository.delete_persona(Some(id)).await?;
        if deleted {
            tracing::info!(%id, "persona removed");
        }
        Ok(deleted)
    }
}

impl std::fmt::Debug for PersonaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonaService").finish_non_exhaustive()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn validate(persona: &Persona, today: NaiveDate) -> ApplicationResult<()> {
    if persona.first_name().trim().is_empty() {
        return Err(ApplicationError::validation("first name must not be blank"));
    }
    if persona.last_name().trim().is_empty() {
        return Err(ApplicationError::validation("last name must not be blank"));
    }
    if let Some(born) = persona.birth_date()
        && born > today
    {
        return Err(ApplicationError::validation(format!(
            "birth date {born} is in the future"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::RepositoryError;
    use crate::infrastructure::persistence::traits::MockPersonaRepository;
    use mockall::predicate::eq;

    fn service(repo: MockPersonaRepository) -> PersonaService {
        PersonaService::new(Arc::new(repo))
    }

    fn walker() -> Persona {
        Persona::new(
            None,
            "Paul",
            "Walker",
            NaiveDate::from_ymd_opt(1973, 9, 12),
            "Masculino",
        )
    }

    #[test]
    fn validate_rejects_blank_names() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let no_first = Persona::new(None, "", "Walker", None, "M");
        let no_last = Persona::new(None, "Paul", " ", None, "M");

        assert!(validate(&no_first, today).unwrap_err().is_validation());
        assert!(validate(&no_last, today).unwrap_err().is_validation());
        assert!(validate(&walker(), today).is_ok());
    }

    #[test]
    fn validate_rejects_future_birth_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let unborn = Persona::new(None, "Paul", "Walker", NaiveDate::from_ymd_opt(2024, 1, 2), "M");
        let born_today = Persona::new(None, "Paul", "Walker", Some(today), "M");

        assert!(validate(&unborn, today).unwrap_err().is_validation());
        assert!(validate(&born_today, today).is_ok());
    }

    #[tokio::test]
    async fn register_stores_valid_persona() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_create_persona()
            .times(1)
            .returning(|p| Ok(p.with_id(PersonaId::new(1))));

        let created = service(repo).register(walker()).await.unwrap();
        assert_eq!(created.id(), Some(PersonaId::new(1)));
    }

    #[tokio::test]
    async fn register_invalid_persona_never_reaches_repository() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_create_persona().never();

        let err = service(repo)
            .register(Persona::new(None, "", "", None, ""))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn require_missing_persona_is_not_found() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_get_persona()
            .with(eq(PersonaId::new(8)))
            .returning(|_| Ok(None));

        let err = service(repo).require(PersonaId::new(8)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains('8'));
    }

    #[tokio::test]
    async fn update_passes_through_absence() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_update_persona()
            .with(eq(PersonaId::new(2)), eq(walker()))
            .returning(|_, _| Ok(None));

        let updated = service(repo)
            .update(PersonaId::new(2), walker())
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn remove_delegates_with_present_id() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_delete_persona()
            .with(eq(Some(PersonaId::new(1))))
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(repo).remove(PersonaId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn repository_failure_surfaces_as_repository_error() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_get_persona()
            .returning(|_| Err(RepositoryError::connection("refused")));

        let err = service(repo).find(PersonaId::new(1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Repository(_)));
        assert!(err.is_retryable());
    }
}

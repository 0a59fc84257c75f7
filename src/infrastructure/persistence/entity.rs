//! # Persona Storage Entity
//!
//! Row-shaped mirror of [`Persona`] used by the storage ports.
//!
//! The identifier is kept as a raw `i64` so the type maps one-to-one onto a
//! `BIGINT` column.

use crate::domain::entities::Persona;
use crate::domain::value_objects::PersonaId;
use chrono::NaiveDate;

/// Storage representation of a [`Persona`].
#[derive(Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct PersonaEntity {
    /// Store-assigned identifier, `None` before the first save.
    pub id: Option<i64>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Birth date, if known.
    pub birth_date: Option<NaiveDate>,
    /// Sex descriptor.
    pub sex: String,
}

impl PersonaEntity {
    /// Builds the storage entity for a domain persona.
    #[must_use]
    pub fn from_domain(persona: &Persona) -> Self {
        Self {
            id: persona.id().map(PersonaId::value),
            first_name: persona.first_name().to_string(),
            last_name: persona.last_name().to_string(),
            birth_date: persona.birth_date(),
            sex: persona.sex().to_string(),
        }
    }

    /// Converts this entity into the domain model.
    #[must_use]
    pub fn to_domain_model(&self) -> Persona {
        Persona::new(
            self.persona_id(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.birth_date,
            self.sex.clone(),
        )
    }

    /// Copies every attribute of `persona` except its identifier.
    pub fn overwrite_from(&mut self, persona: &Persona) {
        self.first_name = persona.first_name().to_string();
        self.last_name = persona.last_name().to_string();
        self.birth_date = persona.birth_date();
        self.sex = persona.sex().to_string();
    }

    /// Returns the identifier as a domain value.
    #[inline]
    #[must_use]
    pub fn persona_id(&self) -> Option<PersonaId> {
        self.id.map(PersonaId::new)
    }
}

impl From<Persona> for PersonaEntity {
    fn from(persona: Persona) -> Self {
        Self::from_domain(&persona)
    }
}

impl From<PersonaEntity> for Persona {
    fn from(entity: PersonaEntity) -> Self {
        entity.to_domain_model()
    }
}

//! # Persona Entity
//!
//! A person record: identity plus a handful of descriptive attributes.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use persona_registry::domain::entities::Persona;
//! use persona_registry::domain::value_objects::PersonaId;
//!
//! let persona = Persona::new(
//!     Some(PersonaId::new(1)),
//!     "Paul",
//!     "Walker",
//!     NaiveDate::from_ymd_opt(1973, 9, 12),
//!     "Masculino",
//! );
//!
//! assert_eq!(persona.full_name(), "Paul Walker");
//! assert!(persona.is_persisted());
//! ```

use crate::domain::value_objects::PersonaId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person known to the registry.
///
/// The identifier is absent until the persona has been saved; the store
/// assigns it on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Persona {
    id: Option<PersonaId>,
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
    sex: String,
}

impl Persona {
    /// Creates a persona.
    #[must_use]
    pub fn new(
        id: Option<PersonaId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
        sex: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            sex: sex.into(),
        }
    }

    /// Returns a copy of this persona carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: PersonaId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the identifier, `None` until the persona has been stored.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<PersonaId> {
        self.id
    }

    /// Returns the first name.
    #[inline]
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[inline]
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the birth date, if known.
    #[inline]
    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    /// Returns the sex descriptor as recorded, e.g. `"M"` or `"Masculino"`.
    #[inline]
    #[must_use]
    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// Returns true once the store has assigned an identifier.
    #[inline]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns first and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Persona({}, {})", id, self.full_name()),
            None => write!(f, "Persona(unsaved, {})", self.full_name()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn toretto() -> Persona {
        Persona::new(
            Some(PersonaId::new(1)),
            "Dominic",
            "Toretto",
            NaiveDate::from_ymd_opt(1967, 8, 29),
            "M",
        )
    }

    #[test]
    fn accessors_return_fields() {
        let p = toretto();
        assert_eq!(p.id(), Some(PersonaId::new(1)));
        assert_eq!(p.first_name(), "Dominic");
        assert_eq!(p.last_name(), "Toretto");
        assert_eq!(p.birth_date(), NaiveDate::from_ymd_opt(1967, 8, 29));
        assert_eq!(p.sex(), "M");
    }

    #[test]
    fn unsaved_persona_has_no_id() {
        let p = Persona::new(None, "Mia", "Toretto", None, "F");
        assert!(!p.is_persisted());
        assert_eq!(p.to_string(), "Persona(unsaved, Mia Toretto)");
    }

    #[test]
    fn with_id_marks_persisted() {
        let p = Persona::new(None, "Mia", "Toretto", None, "F").with_id(PersonaId::new(9));
        assert!(p.is_persisted());
        assert_eq!(p.to_string(), "Persona(9, Mia Toretto)");
    }

    #[test]
    fn full_name_of_empty_persona_is_empty() {
        assert_eq!(Persona::default().full_name(), "");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(toretto()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["first_name"], "Dominic");
        assert_eq!(json["birth_date"], "1967-08-29");

        let back: Persona = serde_json::from_value(json).unwrap();
        assert_eq!(back, toretto());
    }
}

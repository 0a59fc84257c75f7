//! # Identifiers
//!
//! Identity types for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`Persona`](crate::domain::entities::Persona).
///
/// Assigned by the backing store when a persona is first saved.
///
/// # Examples
///
/// ```
/// use persona_registry::domain::value_objects::PersonaId;
///
/// let id = PersonaId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(i64);

impl PersonaId {
    /// Creates an identifier from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PersonaId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<PersonaId> for i64 {
    fn from(id: PersonaId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_raw_value() {
        assert!(PersonaId::new(1) < PersonaId::new(2));
        assert_eq!(PersonaId::from(7), PersonaId::new(7));
        assert_eq!(i64::from(PersonaId::new(7)), 7);
    }

    #[test]
    fn value_works_as_a_map_function() {
        let raw: Option<i64> = Some(PersonaId::new(3)).map(PersonaId::value);
        assert_eq!(raw, Some(3));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&PersonaId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: PersonaId = serde_json::from_str("42").unwrap();
        assert_eq!(back, PersonaId::new(42));
    }
}

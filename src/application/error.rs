//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(String)                  - Input validation failures
//! ├── NotFound { resource_type, id }      - Resource not found
//! ├── Repository(RepositoryError)         - Storage failures
//! └── Infrastructure(InfrastructureError) - Configuration, pool, logging
//! ```
//!
//! # Examples
//!
//! ```
//! use persona_registry::application::error::{ApplicationError, InfrastructureError};
//!
//! let err = ApplicationError::validation("first name must not be blank");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("Persona", "7");
//! assert!(err.is_not_found());
//!
//! let infra_err = InfrastructureError::database("connection timeout");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(app_err.is_retryable());
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Infrastructure layer error.
///
/// Represents failures while configuring or connecting the outside world.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Database error.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Logging or tracing setup error.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl InfrastructureError {
    /// Creates a database error.
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a telemetry error.
    #[must_use]
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Database(_) => true,
            Self::Repository(e) => e.is_connection(),
            Self::Configuration(_) | Self::Telemetry(_) => false,
        }
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// Storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Infrastructure error from external systems.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Infrastructure(e) => e.is_retryable(),
            Self::Repository(e) => e.is_connection(),
            _ => false,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_error_database() {
        let err = InfrastructureError::database("connection timeout");
        assert!(err.to_string().contains("database"));
        assert!(err.to_string().contains("connection timeout"));
        assert!(err.is_retryable());
    }

    #[test]
    fn infrastructure_error_configuration() {
        let err = InfrastructureError::configuration("missing database_url");
        assert!(err.to_string().contains("configuration"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn infrastructure_error_from_repository() {
        let err: InfrastructureError = RepositoryError::query("syntax error").into();
        assert!(err.to_string().contains("syntax error"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn application_error_validation() {
        let err = ApplicationError::validation("last name must not be blank");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("last name"));
    }

    #[test]
    fn application_error_not_found() {
        let err = ApplicationError::not_found("Persona", "12");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: Persona with id 12");
    }

    #[test]
    fn application_error_from_repository_connection_is_retryable() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(err.is_retryable());
        assert!(matches!(err, ApplicationError::Repository(_)));
    }
}

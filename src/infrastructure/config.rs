//! # Settings
//!
//! Runtime configuration loaded from the environment.
//!
//! Variables use the `PERSONA` prefix and `__` as the nesting separator.
//! A `.env` file in the working directory is read first when present.
//!
//! | Variable                            | Default   |
//! |-------------------------------------|-----------|
//! | `PERSONA__STORAGE__BACKEND`         | `memory`  |
//! | `PERSONA__STORAGE__DATABASE_URL`    | unset     |
//! | `PERSONA__STORAGE__MAX_CONNECTIONS` | `5`       |
//! | `PERSONA__LOG__FILTER`              | `info`    |
//! | `PERSONA__LOG__JSON`                | `false`   |
//!
//! # Examples
//!
//! ```
//! use persona_registry::infrastructure::config::{Settings, StorageBackend};
//!
//! let settings = Settings::default();
//! assert_eq!(settings.storage.backend, StorageBackend::Memory);
//! ```

use crate::application::error::InfrastructureError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PERSONA";

/// Nesting separator inside variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Default maximum number of pooled database connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default log filter directive.
const DEFAULT_LOG_FILTER: &str = "info";

/// Which storage port backs the persona repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local `HashMap`.
    #[default]
    Memory,
    /// PostgreSQL via sqlx.
    Postgres,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Storage settings.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct StorageSettings {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Connection string, required for [`StorageBackend::Postgres`].
    #[serde(default)]
    pub database_url: Option<String>,
    /// Pool size for database backends.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl StorageSettings {
    /// Settings for the in-memory backend.
    #[must_use]
    pub fn memory() -> Self {
        Self::default()
    }

    /// Settings for a PostgreSQL backend at `database_url`.
    #[must_use]
    pub fn postgres(database_url: impl Into<String>) -> Self {
        Self {
            backend: StorageBackend::Postgres,
            database_url: Some(database_url.into()),
            ..Self::default()
        }
    }

    /// Sets the pool size.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl fmt::Debug for StorageSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSettings")
            .field("backend", &self.backend)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `persona_registry=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Logging settings.
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Loads settings from `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a variable cannot be
    /// parsed into its setting.
    pub fn load() -> Result<Self, InfrastructureError> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
        }
        Self::from_source(None)
    }

    /// Loads settings from an explicit variable map instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` on malformed values.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, InfrastructureError> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self, InfrastructureError> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(vars);

        config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Self>())
            .map_err(|e| InfrastructureError::configuration(e.to_string()))
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

//! # Telemetry
//!
//! Installs the global `tracing` subscriber.
//!
//! # Usage
//!
//! ```ignore
//! use persona_registry::infrastructure::{config::Settings, telemetry};
//!
//! let settings = Settings::load()?;
//! telemetry::init_tracing(&settings.log)?;
//! tracing::info!("persona registry ready");
//! ```

use crate::application::error::InfrastructureError;
use crate::infrastructure::config::LogSettings;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the filter for `settings`.
///
/// `RUST_LOG`, when set, takes precedence over the configured directive.
///
/// # Errors
///
/// Returns `InfrastructureError::Telemetry` if the directive does not parse.
pub fn env_filter(settings: &LogSettings) -> Result<EnvFilter, InfrastructureError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter)
            .map_err(|e| InfrastructureError::telemetry(e.to_string())),
    }
}

/// Installs a global subscriber writing plain or JSON lines to stdout.
///
/// # Errors
///
/// Returns `InfrastructureError::Telemetry` if the filter is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<(), InfrastructureError> {
    let filter = env_filter(settings)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| InfrastructureError::telemetry(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let settings = LogSettings {
            filter: "persona_registry=loud".to_string(),
            json: false,
        };
        let err = env_filter(&settings).unwrap_err();
        assert!(matches!(err, InfrastructureError::Telemetry(_)));
    }

    #[test]
    fn second_install_fails() {
        let settings = LogSettings::default();
        // the first call may lose the race against another test's subscriber
        let _ = init_tracing(&settings);
        assert!(init_tracing(&settings).is_err());
    }
}

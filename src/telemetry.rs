//! Tracing subscriber setup.
//!
//! Test suites call [`init`] once; later calls report
//! `AlreadyInitialized` instead of panicking, so every test may call it.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Installs a subscriber with the default logging configuration.
pub fn init() -> Result<(), TelemetryError> {
    init_with_config(&LoggingConfig::default())
}

/// Installs a subscriber. `RUST_LOG` wins over the configured level.
pub fn init_with_config(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry.with(fmt::layer().json().with_test_writer()).try_init()
    } else {
        registry.with(fmt::layer().with_test_writer()).try_init()
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let _ = init();
        assert!(matches!(init(), Err(TelemetryError::AlreadyInitialized(_))));
    }

    #[test]
    fn invalid_level_is_reported() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "mock_transport=loud".to_string(),
            json: false,
        };
        assert!(matches!(
            init_with_config(&config),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }
}

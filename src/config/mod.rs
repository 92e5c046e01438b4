//! Mock transport configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOCK_TRANSPORT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mock_transport::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Links point at {}", config.link.uri);
//! ```

mod error;
mod link;
mod logging;
mod session;

pub use error::{ConfigError, ValidationError};
pub use link::LinkConfig;
pub use logging::LoggingConfig;
pub use session::SessionConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "MOCK_TRANSPORT";
const ENV_SEPARATOR: &str = "__";

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Simulated session (acting user)
    #[serde(default)]
    pub session: SessionConfig,

    /// Simulated sharing-link values
    #[serde(default)]
    pub link: LinkConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOCK_TRANSPORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Validates the result
    ///
    /// # Environment Variable Format
    ///
    /// - `MOCK_TRANSPORT__SESSION__SELF_USER_ID=...` -> `session.self_user_id = ...`
    /// - `MOCK_TRANSPORT__LINK__URI=...` -> `link.uri = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    /// or fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The file format (TOML, YAML, JSON, ...) is picked from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unreadable, if
    /// values cannot be parsed into expected types, or if they fail
    /// validation.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.session.validate()?;
        self.link.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MOCK_TRANSPORT__SESSION__SELF_USER_ID");
        env::remove_var("MOCK_TRANSPORT__LINK__URI");
        env::remove_var("MOCK_TRANSPORT__LINK__KEY");
        env::remove_var("MOCK_TRANSPORT__LOGGING__LEVEL");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.session.self_user_id, None);
        assert_eq!(config.link.uri, "https://wire-website.com/test-link");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOCK_TRANSPORT__SESSION__SELF_USER_ID", "self-user");
        env::set_var("MOCK_TRANSPORT__LINK__URI", "https://example.com/join");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.session.self_user_id.as_deref(), Some("self-user"));
        assert_eq!(config.link.uri, "https://example.com/join");
        assert_eq!(config.link.key, "test-key");
    }

    #[test]
    fn test_load_with_file_and_environment_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[link]\nuri = \"https://file.example.com/link\"\nkey = \"file-key\"\n\n[logging]\nlevel = \"debug\"\njson = true"
        )
        .unwrap();

        env::set_var("MOCK_TRANSPORT__LINK__KEY", "env-key");
        let result = AppConfig::load_with_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.link.uri, "https://file.example.com/link");
        assert_eq!(config.link.key, "env-key");
        assert_eq!(config.link.code, "test-code");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_with_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_with_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_rejects_invalid_environment_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOCK_TRANSPORT__LINK__URI", "ftp://example.com/join");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidLinkUri))
        ));
    }

    #[test]
    fn test_load_with_file_rejects_empty_self_user() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[session]\nself_user_id = \"\"").unwrap();

        let result = AppConfig::load_with_file(file.path());

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::EmptySelfUserId))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_link() {
        let config = AppConfig {
            link: LinkConfig {
                uri: "ftp://example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLinkUri));
    }
}

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Self user id cannot be empty")]
    EmptySelfUserId,

    #[error("Link URI must start with http:// or https://")]
    InvalidLinkUri,

    #[error("Link key cannot be empty")]
    EmptyLinkKey,

    #[error("Link code cannot be empty")]
    EmptyLinkCode,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}

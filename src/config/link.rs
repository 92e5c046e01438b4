//! Sharing-link configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::{
    LinkSettings, DEFAULT_LINK_CODE, DEFAULT_LINK_KEY, DEFAULT_LINK_URI,
};

/// Values handed out for simulated sharing links
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// URI stored when a link is created
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Key returned with every link
    #[serde(default = "default_key")]
    pub key: String,

    /// Code returned with every link
    #[serde(default = "default_code")]
    pub code: String,
}

impl LinkConfig {
    /// Validate link configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.uri.starts_with("https://") || self.uri.starts_with("http://")) {
            return Err(ValidationError::InvalidLinkUri);
        }
        if self.key.trim().is_empty() {
            return Err(ValidationError::EmptyLinkKey);
        }
        if self.code.trim().is_empty() {
            return Err(ValidationError::EmptyLinkCode);
        }
        Ok(())
    }

    pub fn settings(&self) -> LinkSettings {
        LinkSettings::new(self.uri.as_str(), self.key.as_str(), self.code.as_str())
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            key: default_key(),
            code: default_code(),
        }
    }
}

fn default_uri() -> String {
    DEFAULT_LINK_URI.to_string()
}

fn default_key() -> String {
    DEFAULT_LINK_KEY.to_string()
}

fn default_code() -> String {
    DEFAULT_LINK_CODE.to_string()
}

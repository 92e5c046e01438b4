//! Session configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::UserId;

/// Settings for the simulated session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Identifier of the acting user; a random one is generated when unset
    pub self_user_id: Option<String>,
}

impl SessionConfig {
    /// Resolve the acting user
    pub fn self_user(&self) -> Result<UserId, ValidationError> {
        match &self.self_user_id {
            Some(id) => UserId::new(id.as_str()).map_err(|_| ValidationError::EmptySelfUserId),
            None => Ok(UserId::random()),
        }
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.self_user().map(|_| ())
    }
}

//! Conversation endpoint error types.
//!
//! Every variant maps to the status code (and optional label payload) the
//! backend answers with. None of them is fatal to the caller.

use http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Label sent when the access mode does not allow link operations.
pub const LABEL_INVALID_OP: &str = "invalid-op";

/// Label sent when a link is requested but none exists.
pub const LABEL_NO_CONVERSATION_CODE: &str = "no-conversation-code";

/// Reasons a conversation request is refused.
#[derive(Debug, Clone, Error)]
pub enum ConversationError {
    #[error("Conversation not found: {0}")]
    NotFound(String),

    #[error("Missing field '{field}' in payload")]
    MissingField { field: &'static str },

    #[error("Field '{field}' has invalid type: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Access mode does not allow link operations")]
    InvalidOperation,

    #[error("Conversation has no link")]
    NoConversationCode,

    #[error("Conversation has no link to delete")]
    NoLinkToDelete,

    #[error("Repository failure: {0}")]
    Storage(#[from] DomainError),
}

impl ConversationError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ConversationError::NotFound(id.into())
    }

    pub fn missing_field(field: &'static str) -> Self {
        ConversationError::MissingField { field }
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        ConversationError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// HTTP status the backend answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            ConversationError::NotFound(_) => StatusCode::NOT_FOUND,
            ConversationError::MissingField { .. } => StatusCode::BAD_REQUEST,
            ConversationError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ConversationError::InvalidOperation => StatusCode::FORBIDDEN,
            ConversationError::NoConversationCode => StatusCode::NOT_FOUND,
            // Deleting an absent link is forbidden, not "not found".
            ConversationError::NoLinkToDelete => StatusCode::FORBIDDEN,
            ConversationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label carried in the `{label}` payload, if the backend sends one.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ConversationError::InvalidOperation => Some(LABEL_INVALID_OP),
            ConversationError::NoConversationCode => Some(LABEL_NO_CONVERSATION_CODE),
            _ => None,
        }
    }
}

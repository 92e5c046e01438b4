//! Response envelope and builders.

use http::StatusCode;
use serde_json::{json, Value};

use crate::domain::conversation::{ConversationError, ConversationEvent};

use super::TransportError;

/// Status code, optional payload, optional transport error.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    status: StatusCode,
    payload: Option<Value>,
    transport_error: Option<TransportError>,
}

impl TransportResponse {
    /// Response with no payload.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            payload: None,
            transport_error: None,
        }
    }

    /// Response carrying a payload.
    pub fn with_payload(status: StatusCode, payload: Value) -> Self {
        Self {
            status,
            payload: Some(payload),
            transport_error: None,
        }
    }

    /// Response carrying a `{label}` payload.
    pub fn labelled(status: StatusCode, label: &str) -> Self {
        Self::with_payload(status, json!({ "label": label }))
    }

    /// Response whose payload is a rendered update event.
    pub fn event(status: StatusCode, event: &ConversationEvent) -> Self {
        Self::with_payload(status, event.to_payload())
    }

    /// "Already applied": 204 with no payload.
    pub fn no_content() -> Self {
        Self::empty(StatusCode::NO_CONTENT)
    }

    /// Response describing a failure of the transport itself.
    pub fn transport_failure(status: StatusCode, error: TransportError) -> Self {
        Self {
            status,
            payload: None,
            transport_error: Some(error),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        self.transport_error.as_ref()
    }

    /// Consumes the response, returning the payload.
    pub fn into_payload(self) -> Option<Value> {
        self.payload
    }
}

impl From<ConversationError> for TransportResponse {
    fn from(err: ConversationError) -> Self {
        let status = err.status();
        if let ConversationError::Storage(inner) = &err {
            return Self::transport_failure(status, TransportError::Repository(inner.to_string()));
        }
        match err.label() {
            Some(label) => Self::labelled(status, label),
            None => Self::empty(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;

    #[test]
    fn empty_response_has_no_payload_or_error() {
        let response = TransportResponse::empty(StatusCode::OK);
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.payload().is_none());
        assert!(response.transport_error().is_none());
    }

    #[test]
    fn labelled_response_wraps_label() {
        let response = TransportResponse::labelled(StatusCode::FORBIDDEN, "invalid-op");
        assert_eq!(response.payload(), Some(&json!({"label": "invalid-op"})));
    }

    #[test]
    fn not_found_error_becomes_empty_404() {
        let response: TransportResponse = ConversationError::not_found("c1").into();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.payload().is_none());
    }

    #[test]
    fn invalid_operation_error_becomes_labelled_403() {
        let response: TransportResponse = ConversationError::InvalidOperation.into();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.payload(), Some(&json!({"label": "invalid-op"})));
    }

    #[test]
    fn storage_error_uses_transport_channel() {
        let response: TransportResponse =
            ConversationError::from(DomainError::storage("lock poisoned")).into();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            response.transport_error(),
            Some(TransportError::Repository(_))
        ));
    }
}

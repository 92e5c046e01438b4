//! Outgoing request as seen by the mock transport.

use http::Method;
use serde_json::Value;

/// Decoded request body: a loosely-typed JSON tree.
pub type Payload = Value;

/// A request intercepted by the mock transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
}

impl TransportRequest {
    /// Creates a request with an empty object payload.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Value::Object(Default::default()),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>, payload: Payload) -> Self {
        Self::new(Method::PUT, path).with_payload(payload)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_request_has_empty_object_payload() {
        let request = TransportRequest::get("/conversations/c1/code");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.payload, json!({}));
    }

    #[test]
    fn put_carries_payload() {
        let request = TransportRequest::put("/conversations/c1/receipt-mode", json!({"receipt_mode": 1}));
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.payload["receipt_mode"], 1);
    }
}

//! Transport-level failures.

use http::Method;
use thiserror::Error;

/// A failure of the transport itself rather than a backend answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("No mock endpoint for {method} {path}")]
    NoRoute { method: Method, path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },

    #[error("Repository unavailable: {0}")]
    Repository(String),
}

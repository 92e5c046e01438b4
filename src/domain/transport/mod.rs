//! Transport vocabulary shared by handlers and the mock session.
//!
//! A `TransportRequest` is what client code hands to the transport; a
//! `TransportResponse` is what it gets back. Handlers only ever fill in a
//! status and a payload; the transport-error channel is reserved for
//! failures outside the simulated backend.

mod error;
mod request;
mod response;

pub use error::TransportError;
pub use request::{Payload, TransportRequest};
pub use response::TransportResponse;

//! Clock port.
//!
//! Event payloads carry a `time` field; injecting the clock keeps
//! responses deterministic under test.

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

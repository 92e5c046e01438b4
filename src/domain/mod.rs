//! Domain layer containing the simulated backend's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, timestamps, errors)
//! - `conversation` - Conversation entity, access rules, update events
//! - `transport` - Request and response envelopes

pub mod conversation;
pub mod foundation;
pub mod transport;

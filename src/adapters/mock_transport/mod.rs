//! Mock transport adapter.
//!
//! Intercepts requests, routes them to the conversation endpoints, and
//! keeps a log of what the client sent.

mod routes;
mod session;

pub use routes::{resolve, ConversationOperation, ConversationResource, ConversationRoute};
pub use session::MockTransportSession;

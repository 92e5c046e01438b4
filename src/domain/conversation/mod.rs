//! Conversation domain module.
//!
//! The simulated conversation resource, its access rules, and the events
//! and errors produced when its sub-resources are updated.

mod access;
mod aggregate;
mod errors;
mod events;
mod link;

pub use access::{AccessMode, ACCESS_CODE, ACCESS_INVITE, DEFAULT_ACCESS_ROLE};
pub use aggregate::Conversation;
pub use errors::{ConversationError, LABEL_INVALID_OP, LABEL_NO_CONVERSATION_CODE};
pub use events::{ConversationEvent, ACCESS_UPDATE, CODE_UPDATE, RECEIPT_MODE_UPDATE};
pub use link::{LinkSettings, DEFAULT_LINK_CODE, DEFAULT_LINK_KEY, DEFAULT_LINK_URI};

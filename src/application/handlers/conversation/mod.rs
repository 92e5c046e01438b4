//! Conversation endpoint handlers.
//!
//! One handler per simulated backend operation. Each handler looks the
//! conversation up first, then validates the payload, then checks resource
//! preconditions, and finally mutates at most one conversation.

mod context;
mod create_link;
mod delete_link;
mod fetch_link;
mod service;
mod support;
mod update_access_mode;
mod update_receipt_mode;

#[cfg(test)]
mod test_support;

pub use context::ResponseContext;
pub use create_link::{CreateLinkCommand, CreateLinkHandler};
pub use delete_link::{DeleteLinkCommand, DeleteLinkHandler};
pub use fetch_link::{FetchLinkHandler, FetchLinkQuery};
pub use service::ConversationService;
pub use update_access_mode::{UpdateAccessModeCommand, UpdateAccessModeHandler};
pub use update_receipt_mode::{UpdateReceiptModeCommand, UpdateReceiptModeHandler};

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;

pub use conversation::{
    ConversationService, CreateLinkCommand, CreateLinkHandler, DeleteLinkCommand,
    DeleteLinkHandler, FetchLinkHandler, FetchLinkQuery, ResponseContext,
    UpdateAccessModeCommand, UpdateAccessModeHandler, UpdateReceiptModeCommand,
    UpdateReceiptModeHandler,
};

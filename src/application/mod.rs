//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer turns intercepted requests into domain operations against the
//! conversation repository and shapes the backend's answers.

pub mod handlers;

pub use handlers::{
    ConversationService, CreateLinkCommand, CreateLinkHandler, DeleteLinkCommand,
    DeleteLinkHandler, FetchLinkHandler, FetchLinkQuery, ResponseContext,
    UpdateAccessModeCommand, UpdateAccessModeHandler, UpdateReceiptModeCommand,
    UpdateReceiptModeHandler,
};

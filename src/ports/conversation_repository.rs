//! Conversation repository port.
//!
//! Defines the contract for storing and looking up simulated conversations.
//! The test harness owns the repository and injects it into the session.
//!
//! # Design
//!
//! - **Case-insensitive**: lookups go through `ConversationId`, which is
//!   normalised to lowercase
//! - **Copy-out**: lookups return owned snapshots; handlers write changes
//!   back with `update`
//! - **No locking contract**: callers serialise read-validate-update

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};

/// Repository port for simulated conversations.
pub trait ConversationRepository: Send + Sync {
    /// Insert a new conversation.
    ///
    /// # Errors
    ///
    /// - `ConversationAlreadyExists` if the identifier is taken
    /// - `StorageError` if the store is unavailable
    fn save(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Replace an existing conversation.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    /// - `StorageError` if the store is unavailable
    fn update(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Find a conversation by its identifier.
    ///
    /// Returns `None` if not found.
    fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// All conversations, ordered by identifier.
    fn find_all(&self) -> Result<Vec<Conversation>, DomainError>;

    /// Delete a conversation (harness teardown).
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    /// - `StorageError` if the store is unavailable
    fn delete(&self, id: &ConversationId) -> Result<(), DomainError>;
}

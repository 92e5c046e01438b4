//! In-memory conversation repository.
//!
//! Stands in for the persistent object store the real mock backend sits on.
//! Conversations are keyed by their normalised identifier, so lookups are
//! case-insensitive.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationRepository;

/// In-memory store of simulated conversations.
///
/// Features:
/// - Case-insensitive lookup by identifier
/// - Stable ordering by identifier for `find_all`
/// - Poisoned locks surface as `StorageError` instead of panicking
///
/// # Example
///
/// ```ignore
/// let repo = InMemoryConversationRepository::new();
/// repo.save(&Conversation::new(ConversationId::new("C1")?))?;
///
/// assert!(repo.find_by_id(&ConversationId::new("c1")?)?.is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryConversationRepository {
    conversations: RwLock<BTreeMap<ConversationId, Conversation>>,
}

impl InMemoryConversationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with conversations.
    ///
    /// Later entries replace earlier ones with the same identifier.
    pub fn with_conversations(conversations: impl IntoIterator<Item = Conversation>) -> Self {
        let conversations = conversations
            .into_iter()
            .map(|c| (c.id().clone(), c))
            .collect();
        Self {
            conversations: RwLock::new(conversations),
        }
    }

    /// Removes every conversation (for test isolation).
    pub fn clear(&self) -> Result<(), DomainError> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<ConversationId, Conversation>>, DomainError> {
        self.conversations
            .read()
            .map_err(|_| DomainError::storage("InMemoryConversationRepository: lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<ConversationId, Conversation>>, DomainError> {
        self.conversations
            .write()
            .map_err(|_| DomainError::storage("InMemoryConversationRepository: lock poisoned"))
    }
}

fn not_found(id: &ConversationId) -> DomainError {
    DomainError::new(
        ErrorCode::ConversationNotFound,
        format!("Conversation not found: {}", id),
    )
    .with_detail("conversation_id", id.as_str())
}

impl ConversationRepository for InMemoryConversationRepository {
    fn save(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut conversations = self.write()?;
        if conversations.contains_key(conversation.id()) {
            return Err(DomainError::new(
                ErrorCode::ConversationAlreadyExists,
                format!("Conversation already exists: {}", conversation.id()),
            )
            .with_detail("conversation_id", conversation.id().as_str()));
        }
        conversations.insert(conversation.id().clone(), conversation.clone());
        Ok(())
    }

    fn update(&self, conversation: &Conversation) -> Result<(), DomainError> {
        let mut conversations = self.write()?;
        match conversations.get_mut(conversation.id()) {
            Some(stored) => {
                *stored = conversation.clone();
                Ok(())
            }
            None => Err(not_found(conversation.id())),
        }
    }

    fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        Ok(self.read()?.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Conversation>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn delete(&self, id: &ConversationId) -> Result<(), DomainError> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

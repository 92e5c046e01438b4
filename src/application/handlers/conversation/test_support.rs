//! Shared fixtures for handler unit tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::domain::conversation::{AccessMode, Conversation, LinkSettings};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{Clock, ConversationRepository};

use super::ResponseContext;

pub const TIME: &str = "2018-03-01T10:15:30.000Z";
pub const SELF_USER: &str = "self-user";

pub struct MockConversationRepository {
    conversations: Mutex<Vec<Conversation>>,
    pub fail_lookups: bool,
    pub update_count: Mutex<usize>,
}

impl MockConversationRepository {
    pub fn new() -> Self {
        Self {
            conversations: Mutex::new(Vec::new()),
            fail_lookups: false,
            update_count: Mutex::new(0),
        }
    }

    pub fn with_conversation(conversation: Conversation) -> Self {
        let repo = Self::new();
        repo.conversations.lock().unwrap().push(conversation);
        repo
    }

    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Self::new()
        }
    }

    pub fn get(&self, id: &str) -> Option<Conversation> {
        let id = ConversationId::new(id).unwrap();
        self.conversations
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == &id)
            .cloned()
    }

    pub fn updates(&self) -> usize {
        *self.update_count.lock().unwrap()
    }
}

impl ConversationRepository for MockConversationRepository {
    fn save(&self, conversation: &Conversation) -> Result<(), DomainError> {
        self.conversations.lock().unwrap().push(conversation.clone());
        Ok(())
    }

    fn update(&self, conversation: &Conversation) -> Result<(), DomainError> {
        *self.update_count.lock().unwrap() += 1;
        let mut conversations = self.conversations.lock().unwrap();
        match conversations.iter().position(|c| c.id() == conversation.id()) {
            Some(pos) => {
                conversations[pos] = conversation.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::ConversationNotFound, "missing")),
        }
    }

    fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        if self.fail_lookups {
            return Err(DomainError::storage("Simulated lookup failure"));
        }
        Ok(self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Conversation>, DomainError> {
        Ok(self.conversations.lock().unwrap().clone())
    }

    fn delete(&self, _id: &ConversationId) -> Result<(), DomainError> {
        Ok(())
    }
}

struct StoppedClock(Timestamp);

impl Clock for StoppedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

pub fn context() -> Arc<ResponseContext> {
    let time = DateTime::parse_from_rfc3339(TIME)
        .unwrap()
        .with_timezone(&Utc);
    Arc::new(ResponseContext::new(
        UserId::new(SELF_USER).unwrap(),
        Arc::new(StoppedClock(Timestamp::from_datetime(time))),
        LinkSettings::default(),
    ))
}

pub fn conversation(id: &str) -> Conversation {
    Conversation::new(ConversationId::new(id).unwrap())
}

pub fn code_conversation(id: &str) -> Conversation {
    conversation(id).with_access("non_activated", AccessMode::code_access())
}

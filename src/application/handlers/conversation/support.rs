//! Lookup and payload decoding shared by the conversation handlers.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::conversation::{Conversation, ConversationError};
use crate::domain::foundation::ConversationId;
use crate::domain::transport::Payload;
use crate::ports::ConversationRepository;

/// Loads the conversation a request targets.
///
/// Lookup ignores case only. An empty identifier is simply not found, and a
/// whitespace-padded one never matches its trimmed form.
pub(super) fn load_conversation(
    repository: &dyn ConversationRepository,
    conversation_id: &str,
) -> Result<Conversation, ConversationError> {
    let Ok(id) = ConversationId::new(conversation_id) else {
        return Err(ConversationError::not_found(conversation_id));
    };
    repository
        .find_by_id(&id)?
        .ok_or_else(|| ConversationError::not_found(conversation_id))
}

/// Decodes one required field of the payload.
pub(super) fn required_field<T: DeserializeOwned>(
    payload: &Payload,
    field: &'static str,
) -> Result<T, ConversationError> {
    let value = payload
        .get(field)
        .ok_or_else(|| ConversationError::missing_field(field))?;
    <T as Deserialize>::deserialize(value)
        .map_err(|e| ConversationError::invalid_field(field, e.to_string()))
}

/// Link operations are only valid while access mode is `{invite, code}`.
pub(super) fn require_link_access(conversation: &Conversation) -> Result<(), ConversationError> {
    if conversation.permits_link() {
        Ok(())
    } else {
        Err(ConversationError::InvalidOperation)
    }
}

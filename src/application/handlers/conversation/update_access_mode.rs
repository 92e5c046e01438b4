//! UpdateAccessModeHandler - `PUT /conversations/{id}/access`.

use std::sync::Arc;

use http::StatusCode;
use tracing::debug;

use crate::domain::conversation::{AccessMode, ConversationError, ConversationEvent};
use crate::domain::transport::{Payload, TransportResponse};
use crate::ports::ConversationRepository;

use super::support::{load_conversation, required_field};
use super::ResponseContext;

/// Command to replace a conversation's access role and mode.
#[derive(Debug, Clone)]
pub struct UpdateAccessModeCommand {
    pub conversation_id: String,
    pub payload: Payload,
}

/// Handler for access updates.
///
/// Unlike receipt mode, access updates are always applied and always
/// answered with an event, even when nothing changes.
pub struct UpdateAccessModeHandler {
    repository: Arc<dyn ConversationRepository>,
    context: Arc<ResponseContext>,
}

impl UpdateAccessModeHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>, context: Arc<ResponseContext>) -> Self {
        Self {
            repository,
            context,
        }
    }

    pub fn handle(&self, cmd: UpdateAccessModeCommand) -> TransportResponse {
        self.execute(cmd).unwrap_or_else(TransportResponse::from)
    }

    fn execute(&self, cmd: UpdateAccessModeCommand) -> Result<TransportResponse, ConversationError> {
        let mut conversation = load_conversation(self.repository.as_ref(), &cmd.conversation_id)?;

        // Role is checked before the access list.
        let access_role: String = required_field(&cmd.payload, "access_role")?;
        let access: Vec<String> = required_field(&cmd.payload, "access")?;

        conversation.update_access(access_role, AccessMode::from(access));
        self.repository.update(&conversation)?;

        debug!(
            conversation_id = %conversation.id(),
            access_role = conversation.access_role(),
            "Access updated"
        );

        let event = ConversationEvent::access_update(
            conversation.id().as_str(),
            self.context.self_user().clone(),
            self.context.now(),
            conversation.access_role(),
            conversation.access_mode().tokens(),
        );
        Ok(TransportResponse::event(StatusCode::OK, &event))
    }
}

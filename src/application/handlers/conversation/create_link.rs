//! CreateLinkHandler - `POST /conversations/{id}/code`.

use std::sync::Arc;

use http::StatusCode;
use tracing::{debug, info};

use crate::domain::conversation::{ConversationError, ConversationEvent};
use crate::domain::transport::TransportResponse;
use crate::ports::ConversationRepository;

use super::support::{load_conversation, require_link_access};
use super::ResponseContext;

/// Command to create a conversation's sharing link.
#[derive(Debug, Clone)]
pub struct CreateLinkCommand {
    pub conversation_id: String,
}

/// Handler for link creation.
///
/// An existing link is returned as-is with 200; a new one is answered with
/// 201 and a `conversation.code-update` event.
pub struct CreateLinkHandler {
    repository: Arc<dyn ConversationRepository>,
    context: Arc<ResponseContext>,
}

impl CreateLinkHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>, context: Arc<ResponseContext>) -> Self {
        Self {
            repository,
            context,
        }
    }

    pub fn handle(&self, cmd: CreateLinkCommand) -> TransportResponse {
        self.execute(cmd).unwrap_or_else(TransportResponse::from)
    }

    fn execute(&self, cmd: CreateLinkCommand) -> Result<TransportResponse, ConversationError> {
        let mut conversation = load_conversation(self.repository.as_ref(), &cmd.conversation_id)?;
        require_link_access(&conversation)?;

        let settings = self.context.link();

        if let Some(link) = conversation.link() {
            debug!(conversation_id = %conversation.id(), "Link already exists");
            return Ok(TransportResponse::with_payload(
                StatusCode::OK,
                settings.payload_for(link),
            ));
        }

        conversation.set_link(settings.uri.as_str());
        self.repository.update(&conversation)?;
        info!(conversation_id = %conversation.id(), uri = %settings.uri, "Link created");

        // The event echoes the identifier exactly as the client sent it.
        let event = ConversationEvent::code_update(
            cmd.conversation_id,
            self.context.self_user().clone(),
            self.context.now(),
            settings.payload_for(&settings.uri),
        );
        Ok(TransportResponse::event(StatusCode::CREATED, &event))
    }
}

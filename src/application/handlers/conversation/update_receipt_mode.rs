//! UpdateReceiptModeHandler - `PUT /conversations/{id}/receipt-mode`.

use std::sync::Arc;

use http::StatusCode;
use tracing::debug;

use crate::domain::conversation::{ConversationError, ConversationEvent};
use crate::domain::transport::{Payload, TransportResponse};
use crate::ports::ConversationRepository;

use super::support::{load_conversation, required_field};
use super::ResponseContext;

/// Command to change a conversation's receipt mode.
#[derive(Debug, Clone)]
pub struct UpdateReceiptModeCommand {
    pub conversation_id: String,
    pub payload: Payload,
}

/// Handler for receipt-mode updates.
///
/// Setting the value already stored answers 204 without touching the
/// conversation.
pub struct UpdateReceiptModeHandler {
    repository: Arc<dyn ConversationRepository>,
    context: Arc<ResponseContext>,
}

impl UpdateReceiptModeHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>, context: Arc<ResponseContext>) -> Self {
        Self {
            repository,
            context,
        }
    }

    pub fn handle(&self, cmd: UpdateReceiptModeCommand) -> TransportResponse {
        self.execute(cmd).unwrap_or_else(TransportResponse::from)
    }

    fn execute(&self, cmd: UpdateReceiptModeCommand) -> Result<TransportResponse, ConversationError> {
        // 1. Load conversation
        let mut conversation = load_conversation(self.repository.as_ref(), &cmd.conversation_id)?;

        // 2. Decode payload
        let receipt_mode: i64 = required_field(&cmd.payload, "receipt_mode")?;

        // 3. Apply, short-circuiting when already set
        if !conversation.apply_receipt_mode(receipt_mode) {
            debug!(
                conversation_id = %conversation.id(),
                receipt_mode,
                "Receipt mode already applied"
            );
            return Ok(TransportResponse::no_content());
        }

        // 4. Persist
        self.repository.update(&conversation)?;

        // 5. Answer with the update event
        let event = ConversationEvent::receipt_mode_update(
            conversation.id().as_str(),
            self.context.self_user().clone(),
            self.context.now(),
            receipt_mode,
        );
        Ok(TransportResponse::event(StatusCode::OK, &event))
    }
}

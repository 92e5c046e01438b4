//! DeleteLinkHandler - `DELETE /conversations/{id}/code`.

use std::sync::Arc;

use http::StatusCode;
use tracing::info;

use crate::domain::conversation::ConversationError;
use crate::domain::transport::TransportResponse;
use crate::ports::ConversationRepository;

use super::support::{load_conversation, require_link_access};

/// Command to remove a conversation's sharing link.
#[derive(Debug, Clone)]
pub struct DeleteLinkCommand {
    pub conversation_id: String,
}

/// Handler for link removal.
///
/// Removing a link that does not exist answers 403, not 404.
pub struct DeleteLinkHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl DeleteLinkHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub fn handle(&self, cmd: DeleteLinkCommand) -> TransportResponse {
        self.execute(cmd).unwrap_or_else(TransportResponse::from)
    }

    fn execute(&self, cmd: DeleteLinkCommand) -> Result<TransportResponse, ConversationError> {
        let mut conversation = load_conversation(self.repository.as_ref(), &cmd.conversation_id)?;
        require_link_access(&conversation)?;

        let removed = conversation
            .take_link()
            .ok_or(ConversationError::NoLinkToDelete)?;
        self.repository.update(&conversation)?;
        info!(conversation_id = %conversation.id(), uri = %removed, "Link deleted");

        Ok(TransportResponse::empty(StatusCode::OK))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::conversation::AccessMode;
    use serde_json::json;

    fn command(id: &str) -> DeleteLinkCommand {
        DeleteLinkCommand {
            conversation_id: id.to_string(),
        }
    }

    #[test]
    fn removes_existing_link() {
        let repo = Arc::new(MockConversationRepository::with_conversation(
            code_conversation("conv-1").with_link("https://example.com/join"),
        ));
        let handler = DeleteLinkHandler::new(repo.clone());

        let response = handler.handle(command("conv-1"));

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.payload().is_none());
        assert!(repo.get("conv-1").unwrap().link().is_none());
    }

    #[test]
    fn absent_link_is_forbidden_not_missing() {
        let repo = Arc::new(MockConversationRepository::with_conversation(code_conversation("conv-1")));
        let handler = DeleteLinkHandler::new(repo.clone());

        let response = handler.handle(command("conv-1"));

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.payload().is_none());
        assert_eq!(repo.updates(), 0);
    }

    #[test]
    fn wrong_access_mode_is_forbidden_with_label() {
        let repo = Arc::new(MockConversationRepository::with_conversation(
            conversation("conv-1")
                .with_access("activated", AccessMode::new(["code"]))
                .with_link("https://example.com/join"),
        ));
        let handler = DeleteLinkHandler::new(repo.clone());

        let response = handler.handle(command("conv-1"));

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.payload(), Some(&json!({"label": "invalid-op"})));
        assert!(repo.get("conv-1").unwrap().link().is_some());
    }

    #[test]
    fn unknown_conversation_returns_404() {
        let repo = Arc::new(MockConversationRepository::new());
        let handler = DeleteLinkHandler::new(repo);

        let response = handler.handle(command("missing"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.payload().is_none());
    }
}

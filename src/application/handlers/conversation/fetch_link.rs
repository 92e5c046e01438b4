//! FetchLinkHandler - `GET /conversations/{id}/code`.

use std::sync::Arc;

use http::StatusCode;

use crate::domain::conversation::ConversationError;
use crate::domain::transport::TransportResponse;
use crate::ports::ConversationRepository;

use super::support::{load_conversation, require_link_access};
use super::ResponseContext;

/// Query for a conversation's sharing link.
#[derive(Debug, Clone)]
pub struct FetchLinkQuery {
    pub conversation_id: String,
}

/// Handler for link lookups.
pub struct FetchLinkHandler {
    repository: Arc<dyn ConversationRepository>,
    context: Arc<ResponseContext>,
}

impl FetchLinkHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>, context: Arc<ResponseContext>) -> Self {
        Self {
            repository,
            context,
        }
    }

    pub fn handle(&self, query: FetchLinkQuery) -> TransportResponse {
        self.execute(query).unwrap_or_else(TransportResponse::from)
    }

    fn execute(&self, query: FetchLinkQuery) -> Result<TransportResponse, ConversationError> {
        let conversation = load_conversation(self.repository.as_ref(), &query.conversation_id)?;
        require_link_access(&conversation)?;

        let link = conversation
            .link()
            .ok_or(ConversationError::NoConversationCode)?;

        Ok(TransportResponse::with_payload(
            StatusCode::OK,
            self.context.link().payload_for(link),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::conversation::AccessMode;
    use serde_json::json;

    fn query(id: &str) -> FetchLinkQuery {
        FetchLinkQuery {
            conversation_id: id.to_string(),
        }
    }

    #[test]
    fn returns_existing_link() {
        let repo = Arc::new(MockConversationRepository::with_conversation(
            code_conversation("conv-1").with_link("https://example.com/join"),
        ));
        let handler = FetchLinkHandler::new(repo, context());

        let response = handler.handle(query("conv-1"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.payload(),
            Some(&json!({"uri": "https://example.com/join", "key": "test-key", "code": "test-code"}))
        );
    }

    #[test]
    fn no_link_returns_labelled_404() {
        let repo = Arc::new(MockConversationRepository::with_conversation(code_conversation("conv-1")));
        let handler = FetchLinkHandler::new(repo, context());

        let response = handler.handle(query("conv-1"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.payload(), Some(&json!({"label": "no-conversation-code"})));
    }

    #[test]
    fn wrong_access_mode_is_forbidden_even_with_link() {
        let repo = Arc::new(MockConversationRepository::with_conversation(
            conversation("conv-1")
                .with_access("activated", AccessMode::new(["invite"]))
                .with_link("https://example.com/stale"),
        ));
        let handler = FetchLinkHandler::new(repo, context());

        let response = handler.handle(query("conv-1"));

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.payload(), Some(&json!({"label": "invalid-op"})));
    }

    #[test]
    fn unknown_conversation_returns_empty_404() {
        let repo = Arc::new(MockConversationRepository::new());
        let handler = FetchLinkHandler::new(repo, context());

        let response = handler.handle(query("missing"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.payload().is_none());
    }
}

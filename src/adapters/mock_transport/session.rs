//! MockTransportSession - intercepts requests and answers them in memory.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use http::StatusCode;
use tracing::{debug, debug_span, warn};

use crate::application::handlers::conversation::{ConversationService, ResponseContext};
use crate::config::{AppConfig, ValidationError};
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::transport::{TransportError, TransportRequest, TransportResponse};
use crate::ports::{Clock, ConversationEndpoints, ConversationRepository};

use super::routes::{resolve, ConversationOperation};

/// Simulated backend session.
///
/// The session is the single serialization point for requests: one
/// request runs to completion before the next one touches the repository.
/// Handlers themselves do no locking.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryConversationRepository::new());
/// let session = MockTransportSession::new(repo, context);
/// session.insert_conversation(Conversation::new(ConversationId::new("c1")?))?;
///
/// let response = session.process_request(TransportRequest::post("/conversations/c1/code"));
/// assert_eq!(response.status(), StatusCode::FORBIDDEN);
/// ```
pub struct MockTransportSession {
    repository: Arc<dyn ConversationRepository>,
    endpoints: Arc<dyn ConversationEndpoints>,
    request_gate: Mutex<()>,
    received_requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransportSession {
    /// Creates a session answering with the standard conversation endpoints.
    pub fn new(repository: Arc<dyn ConversationRepository>, context: ResponseContext) -> Self {
        let endpoints = Arc::new(ConversationService::new(repository.clone(), Arc::new(context)));
        Self::with_endpoints(repository, endpoints)
    }

    /// Creates a session answering with custom endpoints.
    pub fn with_endpoints(
        repository: Arc<dyn ConversationRepository>,
        endpoints: Arc<dyn ConversationEndpoints>,
    ) -> Self {
        Self {
            repository,
            endpoints,
            request_gate: Mutex::new(()),
            received_requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the configured self user id is blank.
    pub fn from_config(
        config: &AppConfig,
        repository: Arc<dyn ConversationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ValidationError> {
        let context = ResponseContext::new(config.session.self_user()?, clock, config.link.settings());
        Ok(Self::new(repository, context))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request processing
    // ─────────────────────────────────────────────────────────────────────────

    /// Answers one intercepted request.
    pub fn process_request(&self, request: TransportRequest) -> TransportResponse {
        let _gate = lock(&self.request_gate);
        let span = debug_span!("mock_request", method = %request.method, path = %request.path);
        let _enter = span.enter();

        lock(&self.received_requests).push(request.clone());

        let response = self.dispatch(&request);
        match response.transport_error() {
            Some(err) => warn!(status = %response.status(), error = %err, "Transport failure"),
            None => debug!(status = %response.status(), "Request answered"),
        }
        response
    }

    fn dispatch(&self, request: &TransportRequest) -> TransportResponse {
        let Some(route) = resolve(&request.path) else {
            return TransportResponse::transport_failure(
                StatusCode::NOT_FOUND,
                TransportError::NoRoute {
                    method: request.method.clone(),
                    path: request.path.clone(),
                },
            );
        };

        let Some(operation) = route.operation(&request.method) else {
            return TransportResponse::transport_failure(
                StatusCode::METHOD_NOT_ALLOWED,
                TransportError::MethodNotAllowed {
                    method: request.method.clone(),
                    path: request.path.clone(),
                },
            );
        };

        let id = route.conversation_id;
        let payload = &request.payload;
        match operation {
            ConversationOperation::UpdateReceiptMode => self.endpoints.update_receipt_mode(id, payload),
            ConversationOperation::UpdateAccessMode => self.endpoints.update_access_mode(id, payload),
            ConversationOperation::FetchLink => self.endpoints.fetch_link(id, payload),
            ConversationOperation::CreateLink => self.endpoints.create_link(id, payload),
            ConversationOperation::DeleteLink => self.endpoints.delete_link(id, payload),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Harness helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Looks a conversation up by identifier, ignoring case.
    pub fn fetch_conversation(&self, identifier: &str) -> Result<Option<Conversation>, DomainError> {
        match ConversationId::new(identifier) {
            Ok(id) => self.repository.find_by_id(&id),
            Err(_) => Ok(None),
        }
    }

    /// All conversations, ordered by identifier.
    pub fn conversations(&self) -> Result<Vec<Conversation>, DomainError> {
        self.repository.find_all()
    }

    /// Adds a conversation to the simulated backend.
    pub fn insert_conversation(&self, conversation: Conversation) -> Result<(), DomainError> {
        let _gate = lock(&self.request_gate);
        self.repository.save(&conversation)
    }

    /// Requests received so far, oldest first.
    pub fn received_requests(&self) -> Vec<TransportRequest> {
        lock(&self.received_requests).clone()
    }

    /// Forgets received requests (for test isolation).
    pub fn clear_received_requests(&self) {
        lock(&self.received_requests).clear();
    }
}

// A panicking test must not wedge every later request.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

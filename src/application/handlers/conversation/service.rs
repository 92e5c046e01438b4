//! ConversationService - the conversation endpoints behind one type.

use std::sync::Arc;

use crate::domain::transport::{Payload, TransportResponse};
use crate::ports::{ConversationEndpoints, ConversationRepository};

use super::{
    CreateLinkCommand, CreateLinkHandler, DeleteLinkCommand, DeleteLinkHandler, FetchLinkHandler,
    FetchLinkQuery, ResponseContext, UpdateAccessModeCommand, UpdateAccessModeHandler,
    UpdateReceiptModeCommand, UpdateReceiptModeHandler,
};

/// Bundles the conversation handlers behind `ConversationEndpoints`.
#[derive(Clone)]
pub struct ConversationService {
    receipt_mode_handler: Arc<UpdateReceiptModeHandler>,
    access_mode_handler: Arc<UpdateAccessModeHandler>,
    fetch_link_handler: Arc<FetchLinkHandler>,
    create_link_handler: Arc<CreateLinkHandler>,
    delete_link_handler: Arc<DeleteLinkHandler>,
}

impl ConversationService {
    /// Wires every handler to the same repository and context.
    pub fn new(repository: Arc<dyn ConversationRepository>, context: Arc<ResponseContext>) -> Self {
        Self {
            receipt_mode_handler: Arc::new(UpdateReceiptModeHandler::new(
                repository.clone(),
                context.clone(),
            )),
            access_mode_handler: Arc::new(UpdateAccessModeHandler::new(
                repository.clone(),
                context.clone(),
            )),
            fetch_link_handler: Arc::new(FetchLinkHandler::new(repository.clone(), context.clone())),
            create_link_handler: Arc::new(CreateLinkHandler::new(repository.clone(), context)),
            delete_link_handler: Arc::new(DeleteLinkHandler::new(repository)),
        }
    }
}

impl ConversationEndpoints for ConversationService {
    fn update_receipt_mode(&self, conversation_id: &str, payload: &Payload) -> TransportResponse {
        self.receipt_mode_handler.handle(UpdateReceiptModeCommand {
            conversation_id: conversation_id.to_string(),
            payload: payload.clone(),
        })
    }

    fn update_access_mode(&self, conversation_id: &str, payload: &Payload) -> TransportResponse {
        self.access_mode_handler.handle(UpdateAccessModeCommand {
            conversation_id: conversation_id.to_string(),
            payload: payload.clone(),
        })
    }

    fn fetch_link(&self, conversation_id: &str, _payload: &Payload) -> TransportResponse {
        self.fetch_link_handler.handle(FetchLinkQuery {
            conversation_id: conversation_id.to_string(),
        })
    }

    fn create_link(&self, conversation_id: &str, _payload: &Payload) -> TransportResponse {
        self.create_link_handler.handle(CreateLinkCommand {
            conversation_id: conversation_id.to_string(),
        })
    }

    fn delete_link(&self, conversation_id: &str, _payload: &Payload) -> TransportResponse {
        self.delete_link_handler.handle(DeleteLinkCommand {
            conversation_id: conversation_id.to_string(),
        })
    }
}

//! Conversation endpoints port.
//!
//! One method per simulated resource operation. Every method answers with a
//! fully formed response; none of them fails.

use crate::domain::transport::{Payload, TransportResponse};

pub trait ConversationEndpoints: Send + Sync {
    /// `PUT /conversations/{id}/receipt-mode`
    fn update_receipt_mode(&self, conversation_id: &str, payload: &Payload) -> TransportResponse;

    /// `PUT /conversations/{id}/access`
    fn update_access_mode(&self, conversation_id: &str, payload: &Payload) -> TransportResponse;

    /// `GET /conversations/{id}/code`
    fn fetch_link(&self, conversation_id: &str, payload: &Payload) -> TransportResponse;

    /// `POST /conversations/{id}/code`
    fn create_link(&self, conversation_id: &str, payload: &Payload) -> TransportResponse;

    /// `DELETE /conversations/{id}/code`
    fn delete_link(&self, conversation_id: &str, payload: &Payload) -> TransportResponse;
}

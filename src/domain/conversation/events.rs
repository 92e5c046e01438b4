//! Update events returned by conversation endpoints.
//!
//! The backend answers successful updates with an event describing the
//! change, in the same shape it pushes to other clients:
//! `{conversation, type, time, from, data}`.

use serde_json::{json, Value};

use crate::domain::foundation::{Timestamp, UserId};

pub const RECEIPT_MODE_UPDATE: &str = "conversation.receipt-mode-update";
pub const ACCESS_UPDATE: &str = "conversation.access-update";
pub const CODE_UPDATE: &str = "conversation.code-update";

/// Event emitted for a conversation update.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub conversation: String,
    pub event_type: &'static str,
    pub time: Timestamp,
    pub from: UserId,
    pub data: Value,
}

impl ConversationEvent {
    pub fn receipt_mode_update(
        conversation: impl Into<String>,
        from: UserId,
        time: Timestamp,
        receipt_mode: i64,
    ) -> Self {
        Self {
            conversation: conversation.into(),
            event_type: RECEIPT_MODE_UPDATE,
            time,
            from,
            data: json!({ "receipt_mode": receipt_mode }),
        }
    }

    pub fn access_update(
        conversation: impl Into<String>,
        from: UserId,
        time: Timestamp,
        access_role: &str,
        access: &[String],
    ) -> Self {
        Self {
            conversation: conversation.into(),
            event_type: ACCESS_UPDATE,
            time,
            from,
            data: json!({
                "access_role": access_role,
                "access": access,
            }),
        }
    }

    /// `link` is the `{uri, key, code}` object of the new link.
    pub fn code_update(
        conversation: impl Into<String>,
        from: UserId,
        time: Timestamp,
        link: Value,
    ) -> Self {
        Self {
            conversation: conversation.into(),
            event_type: CODE_UPDATE,
            time,
            from,
            data: link,
        }
    }

    /// Renders the event as a response payload.
    pub fn to_payload(&self) -> Value {
        json!({
            "conversation": self.conversation,
            "type": self.event_type,
            "time": self.time.transport_string(),
            "from": self.from.as_str(),
            "data": self.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn time() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2018-03-01T10:15:30Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    fn self_user() -> UserId {
        UserId::new("self-user").unwrap()
    }

    #[test]
    fn receipt_mode_update_payload_shape() {
        let event = ConversationEvent::receipt_mode_update("conv-1", self_user(), time(), 1);
        assert_eq!(
            event.to_payload(),
            json!({
                "conversation": "conv-1",
                "type": "conversation.receipt-mode-update",
                "time": "2018-03-01T10:15:30.000Z",
                "from": "self-user",
                "data": {"receipt_mode": 1},
            })
        );
    }

    #[test]
    fn access_update_payload_keeps_token_order() {
        let access = vec!["code".to_string(), "invite".to_string()];
        let event = ConversationEvent::access_update("conv-1", self_user(), time(), "team", &access);
        let payload = event.to_payload();
        assert_eq!(payload["type"], "conversation.access-update");
        assert_eq!(payload["data"], json!({"access_role": "team", "access": ["code", "invite"]}));
    }

    #[test]
    fn code_update_nests_link_under_data() {
        let link = json!({"uri": "u", "key": "k", "code": "c"});
        let event = ConversationEvent::code_update("Conv-1", self_user(), time(), link.clone());
        let payload = event.to_payload();
        assert_eq!(payload["conversation"], "Conv-1");
        assert_eq!(payload["type"], "conversation.code-update");
        assert_eq!(payload["data"], link);
    }
}

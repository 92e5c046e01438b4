//! Route table for conversation endpoints.
//!
//! | Method | Path |
//! |---|---|
//! | PUT | `/conversations/{id}/receipt-mode` |
//! | PUT | `/conversations/{id}/access` |
//! | GET, POST, DELETE | `/conversations/{id}/code` |

use http::Method;

/// Conversation sub-resource addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationResource {
    ReceiptMode,
    Access,
    Code,
}

impl ConversationResource {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "receipt-mode" => Some(Self::ReceiptMode),
            "access" => Some(Self::Access),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

/// The operation a method and resource resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationOperation {
    UpdateReceiptMode,
    UpdateAccessMode,
    FetchLink,
    CreateLink,
    DeleteLink,
}

/// A parsed conversation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationRoute<'a> {
    pub conversation_id: &'a str,
    pub resource: ConversationResource,
}

impl ConversationRoute<'_> {
    /// Returns the operation for `method`, or `None` if the resource does
    /// not accept it.
    pub fn operation(&self, method: &Method) -> Option<ConversationOperation> {
        use ConversationOperation::*;
        use ConversationResource::*;

        match self.resource {
            ReceiptMode if *method == Method::PUT => Some(UpdateReceiptMode),
            Access if *method == Method::PUT => Some(UpdateAccessMode),
            Code if *method == Method::GET => Some(FetchLink),
            Code if *method == Method::POST => Some(CreateLink),
            Code if *method == Method::DELETE => Some(DeleteLink),
            _ => None,
        }
    }
}

/// Parses `/conversations/{id}/{resource}`.
///
/// Query strings, fragments, and leading or trailing slashes are ignored.
pub fn resolve(path: &str) -> Option<ConversationRoute<'_>> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or(path);
    let mut segments = path.trim_matches('/').split('/');

    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some("conversations"), Some(id), Some(resource), None) if !id.is_empty() => {
            Some(ConversationRoute {
                conversation_id: id,
                resource: ConversationResource::from_segment(resource)?,
            })
        }
        _ => None,
    }
}

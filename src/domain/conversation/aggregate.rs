//! Conversation entity.
//!
//! The in-memory representation of a simulated server-side conversation.
//! Conversations are created and destroyed by the test harness through the
//! repository; request handlers only read and mutate their fields.

use crate::domain::foundation::ConversationId;

use super::access::{AccessMode, DEFAULT_ACCESS_ROLE};

use serde::{Deserialize, Serialize};

/// Simulated conversation resource.
///
/// # Invariants
///
/// - `id` is immutable and stored lowercase
/// - `link` may only have been created while `access_mode` permitted it,
///   but access mode can change afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique, case-insensitive identifier.
    id: ConversationId,

    /// Read receipt mode; `None` means unset.
    receipt_mode: Option<i64>,

    /// Who may join.
    access_role: String,

    /// Capability tokens.
    access_mode: AccessMode,

    /// Active sharing link, if any.
    link: Option<String>,
}

impl Conversation {
    /// Creates a conversation with no receipt mode, no link, the default
    /// access role and invite-only access.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            receipt_mode: None,
            access_role: DEFAULT_ACCESS_ROLE.to_string(),
            access_mode: AccessMode::new(["invite"]),
            link: None,
        }
    }

    /// Sets the initial receipt mode (harness setup).
    pub fn with_receipt_mode(mut self, receipt_mode: i64) -> Self {
        self.receipt_mode = Some(receipt_mode);
        self
    }

    /// Sets the initial access role and mode (harness setup).
    pub fn with_access(mut self, access_role: impl Into<String>, access_mode: AccessMode) -> Self {
        self.access_role = access_role.into();
        self.access_mode = access_mode;
        self
    }

    /// Sets an initial sharing link (harness setup).
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn receipt_mode(&self) -> Option<i64> {
        self.receipt_mode
    }

    pub fn access_role(&self) -> &str {
        &self.access_role
    }

    pub fn access_mode(&self) -> &AccessMode {
        &self.access_mode
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Returns true when the current access mode allows a sharing link.
    pub fn permits_link(&self) -> bool {
        self.access_mode.permits_link()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a receipt mode.
    ///
    /// Returns `false` and leaves the conversation untouched when the value
    /// is already the stored one.
    pub fn apply_receipt_mode(&mut self, receipt_mode: i64) -> bool {
        if self.receipt_mode == Some(receipt_mode) {
            return false;
        }
        self.receipt_mode = Some(receipt_mode);
        true
    }

    /// Overwrites access role and mode. Always applied, even when unchanged.
    pub fn update_access(&mut self, access_role: impl Into<String>, access_mode: AccessMode) {
        self.access_role = access_role.into();
        self.access_mode = access_mode;
    }

    /// Stores a sharing link.
    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = Some(link.into());
    }

    /// Removes the sharing link, returning it if one was present.
    pub fn take_link(&mut self) -> Option<String> {
        self.link.take()
    }
}

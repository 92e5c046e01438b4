//! Simulated sharing-link values.

use serde_json::{json, Value};

/// URI stored on a conversation when a link is created.
pub const DEFAULT_LINK_URI: &str = "https://wire-website.com/test-link";

/// Key returned alongside every link.
pub const DEFAULT_LINK_KEY: &str = "test-key";

/// Code returned alongside every link.
pub const DEFAULT_LINK_CODE: &str = "test-code";

/// Fixed values the mock backend hands out for sharing links.
///
/// `key` and `code` are never derived from conversation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    pub uri: String,
    pub key: String,
    pub code: String,
}

impl LinkSettings {
    pub fn new(uri: impl Into<String>, key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            key: key.into(),
            code: code.into(),
        }
    }

    /// Builds the `{uri, key, code}` object for a stored link.
    pub fn payload_for(&self, uri: &str) -> Value {
        json!({
            "uri": uri,
            "key": self.key,
            "code": self.code,
        })
    }
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_URI, DEFAULT_LINK_KEY, DEFAULT_LINK_CODE)
    }
}

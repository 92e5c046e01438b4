//! Access mode value object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability token allowing members to invite others.
pub const ACCESS_INVITE: &str = "invite";

/// Capability token allowing guests to join through a conversation code.
pub const ACCESS_CODE: &str = "code";

/// Access role assigned to conversations created without an explicit role.
pub const DEFAULT_ACCESS_ROLE: &str = "activated";

/// Set of capability tokens governing who may join a conversation.
///
/// The tokens are kept in the order they were supplied, since updates echo
/// them back verbatim. Precondition checks compare them as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessMode(Vec<String>);

impl AccessMode {
    /// Creates an access mode from a list of tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The only access mode under which a sharing link may exist.
    pub fn code_access() -> Self {
        Self::new([ACCESS_INVITE, ACCESS_CODE])
    }

    /// Returns the tokens in their original order.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Returns true when the token set is exactly `{invite, code}`.
    pub fn permits_link(&self) -> bool {
        let tokens: BTreeSet<&str> = self.0.iter().map(String::as_str).collect();
        tokens == BTreeSet::from([ACCESS_INVITE, ACCESS_CODE])
    }
}

impl From<Vec<String>> for AccessMode {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_access_permits_link() {
        assert!(AccessMode::code_access().permits_link());
    }

    #[test]
    fn order_does_not_matter() {
        assert!(AccessMode::new(["code", "invite"]).permits_link());
    }

    #[test]
    fn duplicates_collapse_to_the_same_set() {
        assert!(AccessMode::new(["invite", "code", "code"]).permits_link());
    }

    #[test]
    fn subsets_and_supersets_are_rejected() {
        assert!(!AccessMode::new(["invite"]).permits_link());
        assert!(!AccessMode::new(["code"]).permits_link());
        assert!(!AccessMode::new(["invite", "code", "link"]).permits_link());
        assert!(!AccessMode::default().permits_link());
    }

    #[test]
    fn tokens_keep_supplied_order() {
        let mode = AccessMode::new(["code", "invite"]);
        assert_eq!(mode.tokens(), ["code".to_string(), "invite".to_string()]);
    }
}

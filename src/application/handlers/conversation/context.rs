//! Values every conversation handler needs to shape its response.

use std::sync::Arc;

use crate::domain::conversation::LinkSettings;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::Clock;

/// The acting user, the clock, and the simulated link values.
#[derive(Clone)]
pub struct ResponseContext {
    self_user: UserId,
    clock: Arc<dyn Clock>,
    link: LinkSettings,
}

impl ResponseContext {
    pub fn new(self_user: UserId, clock: Arc<dyn Clock>, link: LinkSettings) -> Self {
        Self {
            self_user,
            clock,
            link,
        }
    }

    /// The user every event is attributed to.
    pub fn self_user(&self) -> &UserId {
        &self.self_user
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn link(&self) -> &LinkSettings {
        &self.link
    }
}

impl std::fmt::Debug for ResponseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseContext")
            .field("self_user", &self.self_user)
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}

//! In-memory session adapter.

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::domain::SessionState;
use crate::domain::ports::SessionPort;

/// Process-lifetime session flag; starts signed out.
#[derive(Debug, Default)]
pub struct InMemorySession {
    state: RwLock<SessionState>,
}

impl InMemorySession {
    /// Signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::signed_out()),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        *self.state.read()
    }
}

impl SessionPort for InMemorySession {
    fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }

    fn set_logged_in(&self, next: bool) {
        let changed = self.state.write().set_logged_in(next);
        if changed {
            info!(is_logged_in = next, "Session state changed");
        } else {
            debug!(is_logged_in = next, "Session state unchanged");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_signed_out() {
        let session = InMemorySession::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.snapshot(), SessionState::signed_out());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let session = InMemorySession::new();
        session.set_logged_in(true);
        session.set_logged_in(true);
        assert!(session.is_logged_in());

        session.set_logged_in(false);
        session.set_logged_in(false);
        assert!(!session.is_logged_in());
    }
}

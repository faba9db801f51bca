//! Session flag gating which navigation flow is mounted.

/// Signed-in flag of the running process.
///
/// Starts signed out on every launch; nothing is restored from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    is_logged_in: bool,
}

impl SessionState {
    /// Returns the initial, signed-out state.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            is_logged_in: false,
        }
    }

    /// Whether the user is signed in.
    #[must_use]
    pub const fn is_logged_in(self) -> bool {
        self.is_logged_in
    }

    /// Sets the flag and returns whether it changed.
    pub fn set_logged_in(&mut self, next: bool) -> bool {
        let changed = self.is_logged_in != next;
        self.is_logged_in = next;
        changed
    }

    /// Short label for status displays.
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        if self.is_logged_in {
            "SIGNED IN"
        } else {
            "SIGNED OUT"
        }
    }

    /// Filled dot when signed in, hollow otherwise.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        if self.is_logged_in { "●" } else { "○" }
    }
}

impl From<bool> for SessionState {
    fn from(is_logged_in: bool) -> Self {
        Self { is_logged_in }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_out() {
        assert!(!SessionState::default().is_logged_in());
        assert_eq!(SessionState::default(), SessionState::signed_out());
    }

    #[test]
    fn test_set_reports_change() {
        let mut state = SessionState::signed_out();
        assert!(state.set_logged_in(true));
        assert!(!state.set_logged_in(true));
        assert!(state.is_logged_in());
        assert!(state.set_logged_in(false));
        assert!(!state.set_logged_in(false));
    }

    #[test]
    fn test_display() {
        let mut state = SessionState::signed_out();
        assert_eq!(state.display_text(), "SIGNED OUT");
        assert_eq!(state.indicator(), "○");
        state.set_logged_in(true);
        assert_eq!(state.display_text(), "SIGNED IN");
        assert_eq!(state.indicator(), "●");
    }
}

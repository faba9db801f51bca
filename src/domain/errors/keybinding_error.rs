//! Keybinding configuration errors.

use thiserror::Error;

/// Raised when a configured key string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum KeybindingError {
    #[error("invalid key binding {spec:?}: {reason}")]
    InvalidKey { spec: String, reason: String },
}

impl KeybindingError {
    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

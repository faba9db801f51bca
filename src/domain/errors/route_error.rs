//! Route configuration errors.

use thiserror::Error;

/// Raised when a configured route name has no matching route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RouteError {
    #[error("unknown tab route: {name}")]
    UnknownTab { name: String },
}

impl RouteError {
    /// Creates unknown tab error.
    #[must_use]
    pub fn unknown_tab(name: impl Into<String>) -> Self {
        Self::UnknownTab { name: name.into() }
    }
}

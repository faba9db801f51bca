//! Navigation routes.

use std::str::FromStr;

use super::errors::RouteError;
use super::icon::Icon;

/// Tabs of the signed-in navigator, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabRoute {
    /// Search bar and carousels.
    #[default]
    Explorer,
    /// Profile and sign-out.
    Account,
}

impl TabRoute {
    /// Every tab in display order.
    pub const ALL: [Self; 2] = [Self::Explorer, Self::Account];

    /// Display name, also accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Account => "Account",
        }
    }

    /// Tab bar icon.
    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Explorer => Icon::Compass,
            Self::Account => Icon::User,
        }
    }

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Explorer => 0,
            Self::Account => 1,
        }
    }

    /// Next tab, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for TabRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TabRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RouteError::unknown_tab(s))
    }
}

/// Screens of the signed-out stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthRoute {
    /// Sign-in form, the stack root.
    SignIn,
    /// Registration placeholder; no sign-up flow exists.
    SignUp,
}

impl AuthRoute {
    /// Route name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignIn => "SignIn",
            Self::SignUp => "SignUp",
        }
    }
}

impl std::fmt::Display for AuthRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

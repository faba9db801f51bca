//! Signed-in user profile.

/// Display-only profile shown on the account screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: String,
    email: String,
}

impl UserProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Profile shown for every session.
    #[must_use]
    pub fn demo() -> Self {
        Self::new("John Doe", "johndoe@example.com")
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::demo()
    }
}

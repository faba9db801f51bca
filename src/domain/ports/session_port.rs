//! Session state port definition.

/// Port exposing the signed-in flag to the rest of the application.
///
/// Implementations are injected where needed; there is no global instance.
#[cfg_attr(test, mockall::automock)]
pub trait SessionPort: Send + Sync {
    /// Returns whether the user is signed in.
    fn is_logged_in(&self) -> bool;

    /// Sets the signed-in flag. Never fails and performs no validation.
    fn set_logged_in(&self, next: bool);
}
